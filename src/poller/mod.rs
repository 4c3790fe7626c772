pub mod worker;

pub use worker::{initial_cursor, CycleOutcome, PollState, Poller};
