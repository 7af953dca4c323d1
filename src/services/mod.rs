pub mod completion_provider;
pub mod quiz_generator;

pub use completion_provider::{CompletionProvider, CompletionRequest, OpenAiCompletionProvider};
pub use quiz_generator::{GenerationSettings, QuizBatchGenerator};
