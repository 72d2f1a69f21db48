/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::errors::LycheeError;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

/// Forbidden messages sent back by legacy servers
pub const LEGACY_FORBIDDEN_MESSAGES: &[&str] = &["Warning: Album private!"];

/// Not found messages sent back by legacy servers
pub const LEGACY_NOT_FOUND_MESSAGES: &[&str] = &[];

/// Forbidden messages sent back by current servers
pub const CURRENT_FORBIDDEN_MESSAGES: &[&str] = &[
    "Warning: Album private!",
    "Warning: Wrong password!",
];

/// Not found messages sent back by current servers
pub const CURRENT_NOT_FOUND_MESSAGES: &[&str] = &[
    "Error: Album not found",
    "Error: Photo not found",
];

/// Multipart field holding the photo on legacy servers
pub const LEGACY_UPLOAD_FIELD: &str = "0";

/// Multipart field holding the photo on current servers
pub const CURRENT_UPLOAD_FIELD: &str = "file";

/// Server generation the client talks to. Picks a [`ServerConfig`] preset.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ServerVersion {
    #[default]
    Legacy,
    Current,
}

/// How request fields are put on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyEncoding {
    Form,
    Json,
}

/// How a boolean operation decides it succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultConvention {
    /// Success when the body contains `true`
    TrueSubstring,
    /// Success whenever no error was classified
    NoError,
}

/// How sentinel messages appear in a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentinelEncoding {
    /// As a JSON string literal, quotes included
    Json,
    /// As the raw message text
    Bare,
}

impl SentinelEncoding {
    fn matches(&self, body: &str, message: &str) -> bool {
        match self {
            SentinelEncoding::Bare => body == message,
            // Decoded so escapes like `\/` or `\u00e9` still match
            SentinelEncoding::Json => {
                body.len() >= 2
                    && body.starts_with('"')
                    && body.ends_with('"')
                    && serde_json::from_str::<String>(body).is_ok_and(|text| text == message)
            }
        }
    }
}

/// Wire conventions for one server deployment.
///
/// The presets cover the known server generations. Individual fields can be
/// overridden with the `with_*` builders or by deserializing a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub version: ServerVersion,
    pub body_encoding: BodyEncoding,
    pub result_convention: ResultConvention,
    pub sentinel_encoding: SentinelEncoding,
    pub upload_field: String,
    /// Treat an empty body as success, e.g. for servers replying 204.
    /// Off in every preset.
    pub accept_empty_body: bool,
    pub forbidden: Vec<String>,
    pub not_found: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::for_version(ServerVersion::default())
    }
}

impl ServerConfig {
    /// Returns the preset for the given server version
    pub fn for_version(version: ServerVersion) -> Self {
        match version {
            ServerVersion::Legacy => Self {
                version,
                body_encoding: BodyEncoding::Form,
                result_convention: ResultConvention::TrueSubstring,
                sentinel_encoding: SentinelEncoding::Json,
                upload_field: LEGACY_UPLOAD_FIELD.to_string(),
                accept_empty_body: false,
                forbidden: owned(LEGACY_FORBIDDEN_MESSAGES),
                not_found: owned(LEGACY_NOT_FOUND_MESSAGES),
            },
            ServerVersion::Current => Self {
                version,
                body_encoding: BodyEncoding::Json,
                result_convention: ResultConvention::NoError,
                sentinel_encoding: SentinelEncoding::Json,
                upload_field: CURRENT_UPLOAD_FIELD.to_string(),
                accept_empty_body: false,
                forbidden: owned(CURRENT_FORBIDDEN_MESSAGES),
                not_found: owned(CURRENT_NOT_FOUND_MESSAGES),
            },
        }
    }

    pub fn legacy() -> Self {
        Self::for_version(ServerVersion::Legacy)
    }

    pub fn current() -> Self {
        Self::for_version(ServerVersion::Current)
    }

    pub fn with_body_encoding(mut self, body_encoding: BodyEncoding) -> Self {
        self.body_encoding = body_encoding;
        self
    }

    pub fn with_result_convention(mut self, result_convention: ResultConvention) -> Self {
        self.result_convention = result_convention;
        self
    }

    pub fn with_sentinel_encoding(mut self, sentinel_encoding: SentinelEncoding) -> Self {
        self.sentinel_encoding = sentinel_encoding;
        self
    }

    pub fn with_upload_field(mut self, upload_field: &str) -> Self {
        self.upload_field = upload_field.to_string();
        self
    }

    pub fn with_empty_body_accepted(mut self, accept_empty_body: bool) -> Self {
        self.accept_empty_body = accept_empty_body;
        self
    }

    /// Replaces both sentinel lists. Messages are given unencoded and are compared
    /// against the body after JSON decoding under [`SentinelEncoding::Json`].
    pub fn with_sentinels(mut self, forbidden: &[&str], not_found: &[&str]) -> Self {
        self.forbidden = owned(forbidden);
        self.not_found = owned(not_found);
        self
    }

    /// Maps a response body onto an error, if it is one
    pub(crate) fn classify(&self, body: &str) -> Result<(), LycheeError> {
        let enc = self.sentinel_encoding;
        if self.forbidden.iter().any(|m| enc.matches(body, m)) {
            return Err(LycheeError::Forbidden(body.to_string()));
        }
        if self.not_found.iter().any(|m| enc.matches(body, m)) {
            return Err(LycheeError::NotFound(body.to_string()));
        }
        if body == "false" || (body.is_empty() && !self.accept_empty_body) {
            return Err(LycheeError::Api(body.to_string()));
        }
        Ok(())
    }
}

fn owned(msgs: &[&str]) -> Vec<String> {
    msgs.iter().map(|m| m.to_string()).collect()
}
