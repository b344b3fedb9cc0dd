//! Render styling for projected calendar events
//!
//! Every reservation occupies its slot; styles only differ in how strongly
//! the renderer should emphasise them. Free time has no style because it has
//! no event.

use serde::{Deserialize, Serialize};

/// Ordering used when overlapping blocks compete for emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePriority {
    Low,
    Medium,
    High,
}

/// Semantic style of a calendar block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStyle {
    /// Confirmed reservation.
    Booked,
    /// Reservation awaiting approval; the slot is still unavailable.
    Tentative,
    /// Status the client does not recognise, rendered with the default
    /// booked palette.
    Occupied,
}

/// Background and border colors handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StylePalette {
    pub background: &'static str,
    pub border: &'static str,
}

/// One row of the availability legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
    pub available: bool,
}

impl EventStyle {
    pub fn priority(self) -> StylePriority {
        match self {
            Self::Booked => StylePriority::High,
            Self::Tentative => StylePriority::Medium,
            Self::Occupied => StylePriority::Low,
        }
    }

    pub fn palette(self) -> StylePalette {
        match self {
            Self::Booked => StylePalette { background: "#10b981", border: "#047857" },
            Self::Tentative => StylePalette { background: "#f59e0b", border: "#b45309" },
            Self::Occupied => StylePalette { background: "#3b82f6", border: "#1d4ed8" },
        }
    }

    /// Every styled block makes its slot unavailable.
    pub fn blocks_availability(self) -> bool {
        true
    }

    /// Legend shown above the calendar: booked, tentative, then free space.
    pub fn legend() -> [LegendEntry; 3] {
        [
            LegendEntry {
                label: "Reserved (unavailable)",
                color: Self::Booked.palette().background,
                available: false,
            },
            LegendEntry {
                label: "Awaiting approval (unavailable)",
                color: Self::Tentative.palette().background,
                available: false,
            },
            LegendEntry { label: "Empty slot (available)", color: "#ffffff", available: true },
        ]
    }
}
