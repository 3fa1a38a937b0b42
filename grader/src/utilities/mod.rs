//! # Utilities Module
//!
//! Small helpers shared by the parser and the evaluator.
//!
//! - [`score_normalization`]: coercing raw model scores to numbers and enforcing the
//!   `[0, 10]`, one-decimal contract.

pub mod score_normalization;
