mod client_impl;
mod config;
mod factory;

pub use client_impl::{CropGuardClient, CropGuardClientImpl};
pub use config::{CropGuardConfig, DEFAULT_BASE_URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT};
pub use factory::{create_client, create_client_from_env, CropGuardClientBuilder};
