/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use lychee::{LycheeClient, ServerConfig, ServerVersion};
use std::str::FromStr;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token sent by the mock handshake, as it appears in the cookie
#[allow(dead_code)]
pub(crate) const HANDSHAKE_COOKIE_VALUE: &str = "tok1%3D%3D";

/// Token the client should echo back after the handshake
#[allow(dead_code)]
pub(crate) const HANDSHAKE_TOKEN: &str = "tok1";

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Response setting the CSRF cookie
#[allow(dead_code)]
pub(crate) fn with_csrf_cookie(value: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("set-cookie", format!("XSRF-TOKEN={value}; path=/").as_str())
        .set_body_string("{}")
}

/// Mock server that answers the handshake
#[allow(dead_code)]
pub(crate) async fn mock_gallery() -> MockServer {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/Session::init"))
        .respond_with(with_csrf_cookie(HANDSHAKE_COOKIE_VALUE))
        .mount(&server)
        .await;
    server
}

#[allow(dead_code)]
pub(crate) async fn connect(server: &MockServer, config: ServerConfig) -> LycheeClient {
    LycheeClient::with_config(&server.uri(), config)
        .await
        .expect("handshake against mock server")
}

#[allow(dead_code)]
pub(crate) struct LiveServer {
    pub url: String,
    pub username: String,
    pub password: String,
    pub config: ServerConfig,
}

#[allow(dead_code)]
pub(crate) fn get_live_server() -> anyhow::Result<LiveServer> {
    let version = std::env::var("LYCHEE_SERVER_VERSION").unwrap_or_else(|_| "Legacy".into());
    Ok(LiveServer {
        url: std::env::var("LYCHEE_URL")?,
        username: std::env::var("LYCHEE_USERNAME")?,
        password: std::env::var("LYCHEE_PASSWORD")?,
        config: ServerConfig::for_version(ServerVersion::from_str(&version)?),
    })
}
