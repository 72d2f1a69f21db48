/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::config::{ResultConvention, ServerConfig};
use crate::errors::LycheeError;
use crate::fields::ApiFields;
use crate::session::{ApiResponse, Payload, Session};
use bytes::Bytes;
use reqwest::Method;
use serde_json::Value;

/// Client for a Lychee server.
///
/// Construction performs the CSRF handshake, so a client is always ready for
/// requests. Operations are grouped by API area in the `album`, `photo`,
/// `sharing` and `settings` modules.
#[derive(Debug)]
pub struct LycheeClient {
    session: Session,
}

impl LycheeClient {
    /// Connects to the server at `url` using the legacy wire conventions
    pub async fn new(url: &str) -> Result<Self, LycheeError> {
        Self::with_config(url, ServerConfig::default()).await
    }

    /// Connects using the given wire conventions
    pub async fn with_config(url: &str, config: ServerConfig) -> Result<Self, LycheeError> {
        Self::with_http_builder(url, config, reqwest::Client::builder()).await
    }

    /// Connects using a caller supplied transport builder, e.g. one with timeouts set
    pub async fn with_http_builder(
        url: &str,
        config: ServerConfig,
        http_builder: reqwest::ClientBuilder,
    ) -> Result<Self, LycheeError> {
        Ok(Self {
            session: Session::connect(url, config, http_builder).await?,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct access for endpoints that have no wrapper here
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Logs in. The session cookie is kept by the cookie jar.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<bool, LycheeError> {
        let fields = vec![
            ("username", username.to_string()),
            ("password", password.to_string()),
        ];
        self.post_bool("Session::login", fields).await
    }

    /// Logs out and forgets the stored cookies
    pub async fn logout(&mut self) -> Result<(), LycheeError> {
        self.session
            .request(Method::POST, "Session::logout", Payload::None)
            .await?;
        self.session.clear_cookies();
        Ok(())
    }

    // Boolean style calls
    pub(crate) async fn post_bool(
        &mut self,
        endpoint: &str,
        fields: ApiFields,
    ) -> Result<bool, LycheeError> {
        let resp = self.post(endpoint, Payload::Fields(fields)).await?;
        Ok(match self.session.config().result_convention {
            ResultConvention::TrueSubstring => resp.reports_true(),
            ResultConvention::NoError => true,
        })
    }

    // Read style calls, body handed back untouched
    pub(crate) async fn post_read(
        &mut self,
        endpoint: &str,
        payload: Payload,
    ) -> Result<Value, LycheeError> {
        self.post(endpoint, payload).await?.json()
    }

    // Binary style calls through a query string
    pub(crate) async fn get_bytes(
        &mut self,
        endpoint: &str,
        params: ApiFields,
    ) -> Result<Bytes, LycheeError> {
        Ok(self
            .session
            .request(Method::GET, endpoint, Payload::Query(params))
            .await?
            .bytes())
    }

    pub(crate) async fn post(
        &mut self,
        endpoint: &str,
        payload: Payload,
    ) -> Result<ApiResponse, LycheeError> {
        self.session.request(Method::POST, endpoint, payload).await
    }
}
