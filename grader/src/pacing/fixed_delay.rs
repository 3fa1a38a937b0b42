use crate::traits::pacing::Pacing;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Waits the same interval before every external call after the first.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl Pacing for FixedDelay {
    async fn pause(&self, _calls_made: usize) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
