//! Logging and observability
//!
//! JSONL history of generation requests.

pub mod jsonl;

pub use jsonl::{GenerationRecord, JsonlLogger, LiftSummary};
