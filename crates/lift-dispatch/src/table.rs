//! The shared request table — the single source of truth.
//!
//! # Why one lock
//!
//! All mutable coordination state (every slot plus the completed-trip
//! counter) sits behind one mutex.  Critical sections are O(1) table reads
//! and writes; the lock is never held across a cabin callback, a passenger
//! action, or anything else that can block.  With state this small and
//! uniformly accessed, finer-grained locking would buy nothing and cost the
//! simplicity that makes the handshake auditable.
//!
//! # Wakeup discipline
//!
//! Each slot carries one condition variable per [`Phase`], each with exactly
//! one designated waiter, so every phase signal is a `notify_one` on a single
//! slot's condvar — never a broadcast.  A separate table-wide `work` condvar
//! wakes idle elevators: `notify_one` per published request, `notify_all`
//! once the trip quota is reached so every parked elevator re-checks the
//! termination predicate and returns.

use std::sync::{Condvar, Mutex, MutexGuard};

use lift_core::{BuildingConfig, ElevatorId, Floor, PassengerId};

use crate::{DispatchError, DispatchResult, Phase, RequestState, SlotState};

// A poisoned lock means an agent thread panicked mid-update; the table
// contents can no longer be trusted, so the panic is propagated.
const POISONED: &str = "request table lock poisoned";

// ── Claim ─────────────────────────────────────────────────────────────────────

/// The result of an elevator taking ownership of a pending request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Claim {
    pub passenger:   PassengerId,
    pub pickup:      Floor,
    pub destination: Floor,
}

// ── RequestTable ──────────────────────────────────────────────────────────────

struct TableInner {
    slots:     Vec<SlotState>,
    /// Trips finished so far.  Monotonic; never exceeds `quota`.
    completed: u64,
    /// `passenger_count × trips_per_passenger` — the termination target.
    quota:     u64,
}

struct SlotCondvars {
    /// One condvar per [`Phase`], indexed by `Phase::index()`.
    phases: [Condvar; Phase::COUNT],
}

impl SlotCondvars {
    fn new() -> Self {
        Self {
            phases: std::array::from_fn(|_| Condvar::new()),
        }
    }
}

/// Per-passenger trip records, rendezvous flags, and the global trip counter,
/// all behind one mutex.
///
/// Shared between all agent threads via `Arc`.  See the
/// [crate docs](crate) for the handshake this table implements.
pub struct RequestTable {
    inner: Mutex<TableInner>,
    /// Per-slot, per-phase condvars.  Outside the mutex: condvars are their
    /// own synchronization.
    slots: Vec<SlotCondvars>,
    /// Wakes elevators parked in [`claim_next`][Self::claim_next].
    work:  Condvar,
}

impl RequestTable {
    /// A table with `passenger_count` idle slots and the given trip quota.
    pub fn new(passenger_count: u32, quota: u64) -> Self {
        let n = passenger_count as usize;
        Self {
            inner: Mutex::new(TableInner {
                slots:     vec![SlotState::idle(); n],
                completed: 0,
                quota,
            }),
            slots: (0..n).map(|_| SlotCondvars::new()).collect(),
            work:  Condvar::new(),
        }
    }

    /// Convenience constructor from a [`BuildingConfig`].
    pub fn for_config(config: &BuildingConfig) -> Self {
        Self::new(config.passenger_count, config.trip_quota())
    }

    // ── Passenger side ────────────────────────────────────────────────────

    /// Publish a new trip request: record the floors and mark the slot
    /// `Pending`, then wake one parked elevator.
    pub fn publish(&self, passenger: PassengerId, from: Floor, to: Floor) -> DispatchResult<()> {
        self.check(passenger)?;
        {
            let mut t = self.lock();
            let slot = &mut t.slots[passenger.index()];
            slot.pickup      = from;
            slot.destination = to;
            slot.state       = RequestState::Pending;
        }
        self.work.notify_one();
        Ok(())
    }

    /// Block until the pickup flag rises for `passenger`, clear it, and
    /// return the elevator that claimed the trip.
    pub fn await_pickup(&self, passenger: PassengerId) -> DispatchResult<ElevatorId> {
        self.check(passenger)?;
        let i = passenger.index();
        let mut t = self.lock();
        while !t.slots[i].flag(Phase::Pickup) {
            t = self.wait_phase(t, i, Phase::Pickup);
        }
        t.slots[i].flags[Phase::Pickup.index()] = false;
        Ok(t.slots[i].elevator)
    }

    /// Retire the slot after exiting: raise the `Exited` flag, return the
    /// slot to `Idle`, and clear the elevator assignment.
    pub fn retire(&self, passenger: PassengerId) -> DispatchResult<()> {
        self.check(passenger)?;
        let i = passenger.index();
        {
            let mut t = self.lock();
            let slot = &mut t.slots[i];
            slot.flags[Phase::Exited.index()] = true;
            slot.state    = RequestState::Idle;
            slot.elevator = ElevatorId::INVALID;
        }
        self.slots[i].phases[Phase::Exited.index()].notify_one();
        Ok(())
    }

    // ── Elevator side ─────────────────────────────────────────────────────

    /// Claim the first pending request in slot-index order, or park on the
    /// `work` condvar until one is published.  Returns `None` once the trip
    /// quota has been reached — the elevator thread should then return.
    ///
    /// Claim plus elevator assignment happen in a single critical section,
    /// which is what makes a double claim unreachable.
    pub fn claim_next(&self, elevator: ElevatorId) -> Option<Claim> {
        let mut t = self.lock();
        loop {
            if t.completed >= t.quota {
                return None;
            }
            if let Some(claim) = Self::scan_pending(&mut t, elevator) {
                return Some(claim);
            }
            t = self.work.wait(t).expect(POISONED);
        }
    }

    /// Non-blocking variant of [`claim_next`][Self::claim_next]: a single
    /// scan of the table, `None` when nothing is pending.
    pub fn try_claim(&self, elevator: ElevatorId) -> Option<Claim> {
        let mut t = self.lock();
        if t.completed >= t.quota {
            return None;
        }
        Self::scan_pending(&mut t, elevator)
    }

    /// Block until the `Exited` flag rises for `passenger`, clear it, and
    /// count the finished trip.  Returns the updated completed-trip count.
    pub fn finish_trip(&self, passenger: PassengerId) -> DispatchResult<u64> {
        self.check(passenger)?;
        let i = passenger.index();
        let mut t = self.lock();
        while !t.slots[i].flag(Phase::Exited) {
            t = self.wait_phase(t, i, Phase::Exited);
        }
        t.slots[i].flags[Phase::Exited.index()] = false;

        debug_assert!(t.completed < t.quota, "completed trips overran the quota");
        t.completed += 1;
        let completed = t.completed;
        let done = completed >= t.quota;
        drop(t);
        if done {
            // Wake every parked elevator so they observe termination.
            self.work.notify_all();
        }
        Ok(completed)
    }

    // ── Phase signals (both sides) ────────────────────────────────────────

    /// Raise one phase flag for `passenger` and wake its single waiter.
    pub fn raise(&self, passenger: PassengerId, phase: Phase) -> DispatchResult<()> {
        self.check(passenger)?;
        let i = passenger.index();
        {
            let mut t = self.lock();
            t.slots[i].flags[phase.index()] = true;
        }
        self.slots[i].phases[phase.index()].notify_one();
        Ok(())
    }

    /// Block until one phase flag rises for `passenger`, then clear it.
    ///
    /// Robust to spurious wakeups and to the signal arriving before the wait
    /// begins: the flag, not the notification, carries the meaning.
    pub fn await_phase(&self, passenger: PassengerId, phase: Phase) -> DispatchResult<()> {
        self.check(passenger)?;
        let i = passenger.index();
        let mut t = self.lock();
        while !t.slots[i].flag(phase) {
            t = self.wait_phase(t, i, phase);
        }
        t.slots[i].flags[phase.index()] = false;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Trips finished so far.
    pub fn completed(&self) -> u64 {
        self.lock().completed
    }

    /// The fixed termination target.
    pub fn quota(&self) -> u64 {
        self.lock().quota
    }

    /// `true` once every quota trip has completed.
    pub fn is_done(&self) -> bool {
        let t = self.lock();
        t.completed >= t.quota
    }

    /// Number of passenger slots.
    pub fn passenger_count(&self) -> usize {
        self.slots.len()
    }

    /// Snapshot of one slot (for tests and diagnostics).
    pub fn slot(&self, passenger: PassengerId) -> DispatchResult<SlotState> {
        self.check(passenger)?;
        Ok(self.lock().slots[passenger.index()])
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check(&self, passenger: PassengerId) -> DispatchResult<()> {
        if passenger.index() >= self.slots.len() {
            return Err(DispatchError::PassengerOutOfRange {
                passenger,
                count: self.slots.len(),
            });
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, TableInner> {
        self.inner.lock().expect(POISONED)
    }

    fn wait_phase<'a>(
        &self,
        guard: MutexGuard<'a, TableInner>,
        slot:  usize,
        phase: Phase,
    ) -> MutexGuard<'a, TableInner> {
        self.slots[slot].phases[phase.index()].wait(guard).expect(POISONED)
    }

    /// First pending slot in index order, transitioned to `Claimed` with the
    /// elevator recorded.  Must run under the table lock.
    fn scan_pending(t: &mut TableInner, elevator: ElevatorId) -> Option<Claim> {
        let i = t.slots.iter().position(|s| s.state == RequestState::Pending)?;
        let slot = &mut t.slots[i];
        slot.state    = RequestState::Claimed;
        slot.elevator = elevator;
        Some(Claim {
            passenger:   PassengerId(i as u32),
            pickup:      slot.pickup,
            destination: slot.destination,
        })
    }
}
