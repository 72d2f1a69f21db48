/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::config::{BodyEncoding, ServerConfig};
use crate::cookies::SessionCookies;
use crate::errors::LycheeError;
use crate::fields::{ApiFields, to_json_object};
use bytes::Bytes;
use log::{debug, trace, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Cookie the server stores its CSRF token in
pub const CSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the CSRF token is echoed back in
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Endpoint used for the handshake that hands out the CSRF cookie
pub const HANDSHAKE_ENDPOINT: &str = "Session::init";

/// What goes along with a request
#[derive(Debug, Default)]
pub enum Payload {
    #[default]
    None,
    /// Body fields, encoded per [`ServerConfig::body_encoding`]
    Fields(ApiFields),
    /// Query string parameters
    Query(ApiFields),
    /// Multipart form with text fields and one file
    Upload {
        fields: ApiFields,
        file_name: String,
        data: Bytes,
    },
}

/// Response that made it through sentinel classification
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Bytes,
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, LycheeError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// True when the body contains the literal `true`
    pub fn reports_true(&self) -> bool {
        self.text().contains("true")
    }
}

/// Authenticated connection to one server.
///
/// Every request is sent to `<base_url>/api/<endpoint>` with the current CSRF
/// token attached, and every body is checked against the configured sentinels.
pub struct Session {
    http: reqwest::Client,
    cookies: Arc<SessionCookies>,
    base_url: Url,
    api_url: Url,
    token: Option<String>,
    config: ServerConfig,
}

impl Session {
    /// Builds the transport and performs the CSRF handshake
    pub async fn connect(
        base_url: &str,
        config: ServerConfig,
        http_builder: reqwest::ClientBuilder,
    ) -> Result<Self, LycheeError> {
        let base_url = Url::parse(base_url)?;
        let api_url = api_root(&base_url)?;
        let cookies = Arc::new(SessionCookies::default());
        let http = http_builder.cookie_provider(cookies.clone()).build()?;

        let mut session = Self {
            http,
            cookies,
            base_url,
            api_url,
            token: None,
            config,
        };
        session
            .request(Method::POST, HANDSHAKE_ENDPOINT, Payload::None)
            .await?;
        if session.token.is_none() {
            return Err(LycheeError::MissingCsrfToken(CSRF_COOKIE.to_string()));
        }
        Ok(session)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Token currently sent in the CSRF header
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Forgets all cookies. The token already in use stays attached.
    pub fn clear_cookies(&mut self) {
        self.cookies.clear();
    }

    /// Full url for the given endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, LycheeError> {
        join_endpoint(&self.api_url, endpoint)
    }

    /// Sends a request to the API and classifies the response body
    pub async fn request(
        &mut self,
        method: Method,
        endpoint: &str,
        payload: Payload,
    ) -> Result<ApiResponse, LycheeError> {
        let req_url = self.endpoint_url(endpoint)?;
        debug!("{} {}", method, req_url);

        let mut req = self.http.request(method, req_url);
        if let Some(token) = &self.token {
            req = req.header(CSRF_HEADER, token.as_str());
        }
        req = match payload {
            Payload::None => req,
            Payload::Query(params) => req.query(&params),
            Payload::Fields(fields) => match self.config.body_encoding {
                BodyEncoding::Form => req.form(&fields),
                BodyEncoding::Json => req.json(&to_json_object(&fields)),
            },
            Payload::Upload {
                fields,
                file_name,
                data,
            } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                let part = Part::bytes(data.to_vec()).file_name(file_name);
                req.multipart(form.part(self.config.upload_field.clone(), part))
            }
        };

        let resp = req.send().await?;
        self.refresh_token();

        let status = resp.status();
        let body = resp.bytes().await?;
        trace!("{} {} ({} bytes)", endpoint, status, body.len());

        if let Err(err) = self.config.classify(&String::from_utf8_lossy(&body)) {
            warn!("{} failed: {}", endpoint, err);
            return Err(err);
        }
        Ok(ApiResponse { status, body })
    }

    // Picks up the token again in case the server rotated it
    fn refresh_token(&mut self) {
        let Some(raw) = self.cookies.get(&self.api_url, CSRF_COOKIE) else {
            return;
        };
        let token = decode_token(&raw);
        if self.token.as_deref() != Some(token.as_str()) {
            let change = if self.token.is_some() { "rotated" } else { "set" };
            debug!("CSRF token {}", change);
            self.token = Some(token);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "xxx"))
            .field("config", &self.config)
            .finish()
    }
}

// `<base_url>/api/`, however many slashes end the base
fn api_root(base_url: &Url) -> Result<Url, LycheeError> {
    Ok(Url::parse(&format!(
        "{}/api/",
        base_url.as_str().trim_end_matches('/')
    ))?)
}

fn join_endpoint(api_url: &Url, endpoint: &str) -> Result<Url, LycheeError> {
    Ok(Url::parse(&format!(
        "{}{}",
        api_url.as_str(),
        endpoint.trim_start_matches('/')
    ))?)
}

/// Url decodes a cookie value and strips trailing `=` padding
pub(crate) fn decode_token(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    decoded.trim_end_matches('=').to_string()
}
