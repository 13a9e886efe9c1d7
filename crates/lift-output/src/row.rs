//! Plain data row type written by output backends.

/// One observer event, flattened to a row.
///
/// Not every event carries every field; absent fields are `None` and render
/// as empty CSV cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripEventRow {
    /// Global sequence number in observation order, starting at 0.
    pub seq:       u64,
    /// Event label: `request`, `claim`, `pickup`, `board`, `arrival`,
    /// `exit`, `complete`, or `elevator_done`.
    pub event:     &'static str,
    /// Passenger slot, or `None` for `elevator_done`.
    pub passenger: Option<u32>,
    /// Serving elevator, or `None` for `request` (not yet assigned).
    pub elevator:  Option<u32>,
    /// Pickup floor (`request`, `pickup`) .
    pub from:      Option<i32>,
    /// Destination floor (`request`, `arrival`).
    pub to:        Option<i32>,
    /// Running completed-trip counter (`complete`) or per-car total
    /// (`elevator_done`).
    pub count:     Option<u64>,
}
