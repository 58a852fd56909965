//! Run orchestration.

mod check;

pub use check::{CheckOutcome, run_check, track};
