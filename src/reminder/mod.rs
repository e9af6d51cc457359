//! Reconciliation between the computed day index and the outstanding
//! reminder schedule.

pub mod sync;
