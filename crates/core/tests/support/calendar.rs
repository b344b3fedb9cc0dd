use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ballkeeper_core::calendar::ReservationSource;
use ballkeeper_domain::{
    BallkeeperError, FetchWindow, ItemId, ReservationRecord, ReservationStatus,
    Result as DomainResult,
};
use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::{oneshot, Notify};

type Responder = oneshot::Sender<DomainResult<Vec<ReservationRecord>>>;

struct PendingCall {
    item_id: ItemId,
    window: FetchWindow,
    responder: Option<Responder>,
}

/// `ReservationSource` whose calls stay pending until the test answers them.
#[derive(Default)]
pub struct ScriptedSource {
    calls: Mutex<Vec<PendingCall>>,
    arrived: Notify,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wait until at least `count` calls have been made.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            let notified = self.arrived.notified();
            if self.calls.lock().unwrap().len() >= count {
                return;
            }
            notified.await;
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call(&self, index: usize) -> (ItemId, FetchWindow) {
        let calls = self.calls.lock().unwrap();
        (calls[index].item_id, calls[index].window)
    }

    /// Complete call `index`. Panics if it was already answered.
    pub fn respond(&self, index: usize, result: DomainResult<Vec<ReservationRecord>>) {
        let responder = self.calls.lock().unwrap()[index]
            .responder
            .take()
            .expect("call already answered");
        let _ = responder.send(result);
    }
}

#[async_trait]
impl ReservationSource for ScriptedSource {
    async fn fetch_reservation_window(
        &self,
        item_id: ItemId,
        window: &FetchWindow,
    ) -> DomainResult<Vec<ReservationRecord>> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().unwrap().push(PendingCall {
            item_id,
            window: *window,
            responder: Some(tx),
        });
        self.arrived.notify_waiters();
        rx.await.unwrap_or_else(|_| Err(BallkeeperError::Network("responder dropped".into())))
    }
}

/// Fails the first `failures` calls with `error`, then returns `records`.
pub struct FlakySource {
    failures: usize,
    error: BallkeeperError,
    records: Vec<ReservationRecord>,
    calls: AtomicUsize,
}

impl FlakySource {
    pub fn new(failures: usize, error: BallkeeperError, records: Vec<ReservationRecord>) -> Arc<Self> {
        Arc::new(Self { failures, error, records, calls: AtomicUsize::new(0) })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReservationSource for FlakySource {
    async fn fetch_reservation_window(
        &self,
        _item_id: ItemId,
        _window: &FetchWindow,
    ) -> DomainResult<Vec<ReservationRecord>> {
        let previous = self.calls.fetch_add(1, Ordering::SeqCst);
        if previous < self.failures {
            Err(self.error.clone())
        } else {
            Ok(self.records.clone())
        }
    }
}

/// Never answers.
pub struct HangingSource {
    pub calls: AtomicUsize,
}

impl HangingSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { calls: AtomicUsize::new(0) })
    }
}

#[async_trait]
impl ReservationSource for HangingSource {
    async fn fetch_reservation_window(
        &self,
        _item_id: ItemId,
        _window: &FetchWindow,
    ) -> DomainResult<Vec<ReservationRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

pub fn record(id: i64, start: NaiveDateTime, end: NaiveDateTime, status: &str) -> ReservationRecord {
    ReservationRecord { id, start, end, status: ReservationStatus::from(status) }
}
