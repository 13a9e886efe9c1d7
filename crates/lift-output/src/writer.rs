//! The backend seam: anything that can persist trip events.

use crate::{OutputResult, TripEventRow};

/// A sink for [`TripEventRow`]s.
///
/// Implementations are driven from behind a mutex by
/// [`EventLogObserver`][crate::EventLogObserver], so they see calls one at a
/// time and need no internal synchronization.  The `Send` bound exists
/// because agent threads take turns driving the writer through that mutex.
pub trait EventWriter: Send {
    /// Append one event row.
    fn write_event(&mut self, row: &TripEventRow) -> OutputResult<()>;

    /// Flush and close the sink.  Must be idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
