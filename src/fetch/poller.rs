use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::fetch::{FetchError, FetchRuntime};

/// Cache entry for one request URL. `value` is the last successfully decoded
/// payload and stays visible while a refresh is in flight or failing
/// (stale-while-revalidate); `error` records the most recent failure without
/// evicting the value.
struct Slot<T> {
    value: Option<T>,
    error: Option<FetchError>,
    in_flight: bool,
    issued_at: Option<Instant>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            in_flight: false,
            issued_at: None,
        }
    }
}

/// Per-URL polling cache. Results are always applied to the slot of the key
/// they were requested for, so a slow response for a key the user has already
/// navigated away from can never overwrite the current view.
pub struct Poller<T> {
    slots: HashMap<String, Slot<T>>,
    /// Re-issue cadence while a key stays in use. `None` means fetch once per
    /// key and only again on an explicit [`Poller::refresh`].
    interval: Option<Duration>,
    tx: Sender<(String, Result<T, FetchError>)>,
    rx: Receiver<(String, Result<T, FetchError>)>,
}

impl<T: DeserializeOwned + Send + 'static> Poller<T> {
    pub fn new(interval: Option<Duration>) -> Self {
        let (tx, rx) = channel();
        Self {
            slots: HashMap::new(),
            interval,
            tx,
            rx,
        }
    }

    /// Drain resolved fetches into the cache. Call once per frame, before
    /// reading any slot.
    pub fn tick(&mut self) {
        while let Ok((key, result)) = self.rx.try_recv() {
            let slot = self.slots.entry(key).or_default();
            slot.in_flight = false;
            match result {
                Ok(value) => {
                    slot.value = Some(value);
                    slot.error = None;
                }
                // Keep the stale value; the error only annotates the slot.
                Err(e) => slot.error = Some(e),
            }
        }
    }

    /// Make sure `key` is being fetched: issue immediately if it was never
    /// requested, or re-issue once the poll interval has elapsed. At most one
    /// request per key is in flight at a time.
    pub fn ensure(&mut self, rt: &FetchRuntime, key: &str) {
        let due = match self.slots.get(key) {
            None => true,
            Some(slot) if slot.in_flight => false,
            Some(slot) => match (self.interval, slot.issued_at) {
                (Some(interval), Some(issued)) => issued.elapsed() >= interval,
                (None, Some(_)) => false,
                (_, None) => true,
            },
        };
        if due {
            self.issue(rt, key);
        }
    }

    /// Force a revalidation of `key` now, keeping any cached value visible
    /// until the fresh response lands.
    pub fn refresh(&mut self, rt: &FetchRuntime, key: &str) {
        let in_flight = self.slots.get(key).map(|s| s.in_flight).unwrap_or(false);
        if !in_flight {
            self.issue(rt, key);
        }
    }

    fn issue(&mut self, rt: &FetchRuntime, key: &str) {
        let slot = self.slots.entry(key.to_string()).or_default();
        slot.in_flight = true;
        slot.issued_at = Some(Instant::now());
        rt.spawn_get(key.to_string(), self.tx.clone());
    }

    /// Last decoded payload for `key`, if any response has arrived yet.
    pub fn value(&self, key: &str) -> Option<&T> {
        self.slots.get(key).and_then(|s| s.value.as_ref())
    }

    /// Most recent error for `key`, if the latest attempt failed.
    pub fn error(&self, key: &str) -> Option<&FetchError> {
        self.slots.get(key).and_then(|s| s.error.as_ref())
    }
}
