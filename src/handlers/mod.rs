//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and dispatch to the orchestration methods in
//! src/app/.

pub mod keyboard;
