//! `EventLogObserver<W>` — bridges `TripObserver` to an `EventWriter`.

use std::sync::Mutex;

use lift_core::{ElevatorId, Floor, PassengerId};
use lift_dispatch::TripObserver;

use crate::row::TripEventRow;
use crate::writer::EventWriter;
use crate::OutputError;

const POISONED: &str = "event log lock poisoned";

struct Inner<W> {
    writer:     W,
    seq:        u64,
    last_error: Option<OutputError>,
}

/// A [`TripObserver`] that appends one row per event to any [`EventWriter`]
/// backend.
///
/// Observer hooks are called concurrently from passenger and elevator
/// threads, so the writer sits behind a mutex; `seq` is assigned under the
/// same lock and gives a total order over the log.
///
/// Errors from the writer are stored internally because `TripObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    inner: Mutex<Inner<W>>,
}

impl<W: EventWriter> EventLogObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(Inner { writer, seq: 0, last_error: None }),
        }
    }

    /// Flush the underlying writer.  Call once after the run completes.
    pub fn finish(&self) -> crate::OutputResult<()> {
        let mut inner = self.inner.lock().expect(POISONED);
        inner.writer.finish()
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.inner.lock().expect(POISONED).last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.inner.into_inner().expect(POISONED).writer
    }

    fn record(
        &self,
        event: &'static str,
        passenger: Option<PassengerId>,
        elevator: Option<ElevatorId>,
        from: Option<Floor>,
        to: Option<Floor>,
        count: Option<u64>,
    ) {
        let mut inner = self.inner.lock().expect(POISONED);
        let row = TripEventRow {
            seq: inner.seq,
            event,
            passenger: passenger.map(|p| p.0),
            elevator: elevator.map(|e| e.0),
            from: from.map(|f| f.0),
            to: to.map(|f| f.0),
            count,
        };
        inner.seq += 1;
        let result = inner.writer.write_event(&row);
        if let Err(e) = result {
            // Keep only the first error.
            if inner.last_error.is_none() {
                inner.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> TripObserver for EventLogObserver<W> {
    fn on_request(&self, passenger: PassengerId, from: Floor, to: Floor) {
        self.record("request", Some(passenger), None, Some(from), Some(to), None);
    }

    fn on_claim(&self, passenger: PassengerId, elevator: ElevatorId) {
        self.record("claim", Some(passenger), Some(elevator), None, None, None);
    }

    fn on_pickup(&self, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        self.record("pickup", Some(passenger), Some(elevator), Some(floor), None, None);
    }

    fn on_board(&self, passenger: PassengerId, elevator: ElevatorId) {
        self.record("board", Some(passenger), Some(elevator), None, None, None);
    }

    fn on_arrival(&self, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        self.record("arrival", Some(passenger), Some(elevator), None, Some(floor), None);
    }

    fn on_exit(&self, passenger: PassengerId, elevator: ElevatorId) {
        self.record("exit", Some(passenger), Some(elevator), None, None, None);
    }

    fn on_trip_complete(&self, passenger: PassengerId, elevator: ElevatorId, completed: u64) {
        self.record("complete", Some(passenger), Some(elevator), None, None, Some(completed));
    }

    fn on_elevator_done(&self, elevator: ElevatorId, trips_served: u64) {
        self.record("elevator_done", None, Some(elevator), None, None, Some(trips_served));
    }
}
