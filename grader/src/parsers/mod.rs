//! # Parsers Module
//!
//! - [`response_parser`]: turns the raw text of a grading-service answer into
//!   [`crate::types::EvaluationFields`].

pub mod response_parser;
