//! `lift-output` — persistent trip-event logging for the rust_lift framework.
//!
//! Bridges [`lift_dispatch::TripObserver`] to a pluggable [`EventWriter`]
//! backend.  The only backend currently shipped writes one CSV file; the
//! trait seam exists so applications can add their own sinks without
//! touching the agents.
//!
//! ```rust,ignore
//! let writer = CsvEventWriter::new(Path::new("out"))?;
//! let log = EventLogObserver::new(writer);
//! sim.run(&cabin, &log)?;
//! log.finish()?;
//! if let Some(err) = log.take_error() {
//!     eprintln!("event log incomplete: {err}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::TripEventRow;
pub use writer::EventWriter;
