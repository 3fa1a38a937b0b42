//! # Pacing Policies
//!
//! Implementations of [`crate::traits::pacing::Pacing`].
//!
//! - [`fixed_delay`]: sleeps a constant interval before each call after the first.
//! - [`no_pacing`]: never waits; for tests and for services without rate limits.

pub mod fixed_delay;
pub mod no_pacing;
