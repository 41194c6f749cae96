//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The arena only talks to move pickers through [`Agent`] and reports progress
//! through [`GameObserver`], so console players, engines and progress bars can
//! be swapped freely.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::{GameObserver, NullObserver};
