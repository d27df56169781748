//! Shared test helpers for auth client tests.

#![allow(dead_code)]

use std::path::Path;
use vortex_auth::{AuthClient, AuthConfig, DeviceFingerprint, DeviceInfo, Session};
use wiremock::MockServer;

/// Installs a log subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixed device info so fingerprints are identical on every machine.
pub fn test_device() -> DeviceInfo {
    DeviceInfo {
        os_name: "linux".to_string(),
        arch: "x86_64".to_string(),
        os_version: "6.8.0".to_string(),
        username: "steve".to_string(),
    }
}

/// Config pointing at `server` with the license cache under `dir`.
pub fn mock_config(server: &MockServer, dir: &Path) -> AuthConfig {
    AuthConfig {
        server_url: server.uri(),
        license_path: dir.join("vortex_license.txt"),
        ..Default::default()
    }
}

/// Client wired to `server`, with a fresh session.
pub fn mock_client(server: &MockServer, dir: &Path) -> (AuthClient, Session) {
    init_tracing();
    let session = Session::new();
    let client = AuthClient::new(
        mock_config(server, dir),
        DeviceFingerprint::from_info(&test_device()),
        session.clone(),
    )
    .unwrap();
    (client, session)
}
