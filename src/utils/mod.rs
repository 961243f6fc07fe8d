//! Utility modules for the assistant core
//!
//! Contains shared functionality used across the library:
//! - Normalization: Utterance case-folding before rule matching

pub mod normalize;

// Re-export commonly used functions
pub use normalize::normalize_utterance;
