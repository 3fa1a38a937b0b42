//!
//! Traits Module
//!
//! Seams of the grading pipeline, so each stage can be swapped or scripted in tests.
//!
//! - [`grading_client`]: sends one prompt to the external grading service.
//! - [`pacing`]: decides how long to wait between external calls.
//! - [`parser`]: generic trait for turning raw input into typed output.

pub mod grading_client;
pub mod pacing;
pub mod parser;
