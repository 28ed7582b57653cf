//! Fetch, parse and render polling loop
//!
//! The loop is an explicit state machine. [`Phase::transition`] is pure;
//! [`PollLoop::step`] does the work of the current phase and feeds the
//! outcome back into it. Time only passes through the injected delay, so
//! the whole cycle runs deterministically on the host.

pub mod phase;
pub mod runner;
pub mod state;

pub use phase::{ErrorKind, Event, Phase};
pub use runner::PollLoop;
pub use state::{Failure, PollState, ERROR_PREFIX, FATAL_MESSAGE};
