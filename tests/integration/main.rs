mod analysis;
mod chat_streaming;
mod speech;

use cropguard::client::{CropGuardClientImpl, CropGuardConfig};
use wiremock::MockServer;

pub async fn client_against(server: &MockServer) -> CropGuardClientImpl {
    let config = CropGuardConfig::new("cg-integration-key").with_base_url(server.uri());
    CropGuardClientImpl::new(config).expect("client should build")
}
