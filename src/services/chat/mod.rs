mod assembler;
mod message;
mod service;
mod stream;
mod types;
mod validation;


pub use assembler::DeltaAssembler;
pub use message::{AssistantReply, Transcript, TranscriptEntry};
pub use service::{ChatService, ChatServiceImpl};
pub use stream::ChatReplyStream;
pub use types::{ChatMessage, ChatRequest, ChatRole, MessageUpdate};
