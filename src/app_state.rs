use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        CompletionProvider, GenerationSettings, OpenAiCompletionProvider, QuizBatchGenerator,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generator: Arc<QuizBatchGenerator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(OpenAiCompletionProvider::new(&config));
        Self::with_provider(config, provider)
    }

    /// Builds the state around an already constructed provider.
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let quiz_generator = Arc::new(QuizBatchGenerator::new(
            provider,
            GenerationSettings::from(&config),
        ));

        Self {
            quiz_generator,
            config: Arc::new(config),
        }
    }
}
