use crate::traits::pacing::Pacing;
use async_trait::async_trait;

/// Never waits between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacing for NoPacing {
    async fn pause(&self, _calls_made: usize) {}
}
