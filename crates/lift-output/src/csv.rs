//! CSV output backend.
//!
//! Creates one file, `trip_events.csv`, in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{OutputResult, TripEventRow};

/// Writes trip events to a single CSV file.
pub struct CsvEventWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Open (or create) `trip_events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("trip_events.csv"))?;
        events.write_record(["seq", "event", "passenger", "elevator", "from", "to", "count"])?;
        Ok(Self { events, finished: false })
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl EventWriter for CsvEventWriter {
    fn write_event(&mut self, row: &TripEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.seq.to_string(),
            row.event.to_string(),
            cell(row.passenger),
            cell(row.elevator),
            cell(row.from),
            cell(row.to),
            cell(row.count),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
