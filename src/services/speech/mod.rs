mod service;
mod types;
mod validation;


pub use service::{SpeechService, SpeechServiceImpl};
pub use types::SpeechRequest;
pub use validation::MAX_SPEECH_TEXT_LEN;
