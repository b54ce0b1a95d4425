//! Turn-based combat resolution.

mod log;
mod resolver;

pub use log::{Actor, FightResult, Outcome, RoundAction, RoundEntry};
pub use resolver::resolve_fight;
