//! Automated players and their card memory.
//!
//! - `Agent`: identity, score, and the memory-driven guessing strategy
//! - `AgentMemory`: known cards, certain pairs, and guessable ids
//! - `PlayerView`: read-only agent view for rendering

pub mod agent;
pub mod memory;

pub use agent::{Agent, PlayerView};
pub use memory::AgentMemory;
