//! Round-generation and pair-coverage engine for table-rotation events.
//!
//! A changing roster of participants is rotated through capacity-limited
//! tables across successive rounds, maximizing the number of distinct
//! pairs that have shared a table. The engine is synchronous and owns all
//! of its state; messaging and dashboard layers consume its outputs.

pub mod assign;
pub mod coverage;
pub mod engine;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod score;
pub mod search;
pub mod types;
