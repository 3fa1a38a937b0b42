//! # Grading Clients
//!
//! Implementations of [`crate::traits::grading_client::GradingClient`].
//!
//! - [`gemini`]: Google's Gemini `generateContent` endpoint.

pub mod gemini;
