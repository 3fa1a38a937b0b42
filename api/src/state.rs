use common::config::AppConfig;
use grader::ExamJob;
use grader::client::gemini::{GeminiClient, GeminiConfig};
use grader::error::TransportError;
use grader::evaluator::EvaluatorSettings;
use grader::pacing::fixed_delay::FixedDelay;
use grader::traits::grading_client::GradingClient;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Shared state of the grading service.
///
/// The grading client is created once and shared by every request; each exam gets its
/// own [`ExamJob`] so batches never share pacing or progress.
#[derive(Clone)]
pub struct AppState {
    grading_client: Option<Arc<dyn GradingClient>>,
    settings: EvaluatorSettings,
    pacing_delay: Duration,
    shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        grading_client: Option<Arc<dyn GradingClient>>,
        settings: EvaluatorSettings,
        pacing_delay: Duration,
    ) -> Self {
        Self {
            grading_client,
            settings,
            pacing_delay,
            shutdown: CancellationToken::new(),
        }
    }

    /// Builds the Gemini client from configuration. Without an API key the state has
    /// no client and the grading endpoints answer 500.
    pub fn from_config(config: &AppConfig) -> Result<Self, TransportError> {
        let grading_client: Option<Arc<dyn GradingClient>> = if config.has_gemini_api_key() {
            let gemini = GeminiConfig::new(config.gemini_api_key.trim())
                .with_model(&config.gemini_model)
                .with_base_url(&config.gemini_base_url)
                .with_timeout(Duration::from_secs(config.grading_timeout_secs));
            Some(Arc::new(GeminiClient::new(gemini)?))
        } else {
            None
        };

        let settings = EvaluatorSettings {
            fallback_score: config.grading_fallback_score,
            reveal_reference_on_blank: config.reveal_reference_on_blank,
        };

        Ok(Self::new(
            grading_client,
            settings,
            Duration::from_millis(config.grading_pacing_ms),
        ))
    }

    pub fn grading_client(&self) -> Option<&Arc<dyn GradingClient>> {
        self.grading_client.as_ref()
    }

    /// Fired on server shutdown; running exams stop between items.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn exam_job(&self, client: Arc<dyn GradingClient>) -> ExamJob {
        ExamJob::new(client)
            .with_settings(self.settings)
            .with_pacing(FixedDelay::new(self.pacing_delay))
    }
}
