mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, CameraError, ConfigurationError, NetworkError, RateLimitError,
    ServerError, ValidationError,
};
pub use error::{CropGuardError, CropGuardResult};
pub use mapping::{ErrorMapper, GatewayErrorResponse};
