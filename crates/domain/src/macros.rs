//! Macro for implementing Display and FromStr for string-backed enums
//!
//! Used for enums that cross the host boundary as plain strings (calendar
//! granularity, chat sender). It handles case-insensitive parsing and a
//! consistent lowercase representation.
//!
//! # Example
//!
//! ```rust
//! use ballkeeper_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Zoom {
//!     Day,
//!     Week,
//! }
//!
//! impl_domain_status_conversions!(Zoom {
//!     Day => "day",
//!     Week => "week",
//! });
//!
//! assert_eq!("WEEK".parse::<Zoom>().unwrap(), Zoom::Week);
//! ```

/// Implements Display and FromStr traits for string-backed enums
///
/// - Display: converts enum variants to their lowercase strings
/// - FromStr: parses case-insensitive strings (surrounding whitespace is
///   ignored) and reports the enum name on failure
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
