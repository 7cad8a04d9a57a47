//! CropGuard client library.
//!
//! Talks to the CropGuard AI gateway for crop photo diagnosis, streaming
//! advisor chat, and text-to-speech, and drives the device camera for
//! capturing crop photos.
//!
//! # Example
//!
//! ```no_run
//! use cropguard::prelude::*;
//!
//! # async fn run() -> CropGuardResult<()> {
//! let client = create_client("cg-your-key-here")?;
//!
//! let request = AnalysisRequest::new("data:image/jpeg;base64,...", Language::English);
//! match client.analysis().analyze(request).await? {
//!     AnalysisOutcome::Report(report) => println!("{}", report.name),
//!     AnalysisOutcome::NotPlant { message } => println!("{}", message),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod camera;
pub mod client;
pub mod errors;
pub mod services;
pub mod transport;
pub mod types;


pub use client::{create_client, create_client_from_env, CropGuardClient, CropGuardClientBuilder};
pub use errors::{CropGuardError, CropGuardResult};

pub mod prelude {
    pub use crate::camera::{CameraController, CameraDevice, CameraState, CapturedImage, Facing};
    pub use crate::client::{
        create_client, create_client_from_env, CropGuardClient, CropGuardClientBuilder,
        CropGuardConfig,
    };
    pub use crate::errors::{CropGuardError, CropGuardResult};
    pub use crate::services::analysis::{
        AnalysisOutcome, AnalysisReport, AnalysisRequest, AnalysisService,
    };
    pub use crate::services::chat::{
        AssistantReply, ChatMessage, ChatRequest, ChatService, MessageUpdate, Transcript,
    };
    pub use crate::services::speech::{SpeechRequest, SpeechService};
    pub use crate::types::Language;
}
