/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum LycheeError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    /// Body matched a forbidden sentinel. Usually a missing session or a private resource.
    #[error("Authorization error. {0}")]
    Forbidden(String),

    /// Body matched a not found sentinel.
    #[error("Resource not found. {0}")]
    NotFound(String),

    /// Body was `false` or empty. Could be unauthorized, wrong args or anything else.
    #[error("API Response was error: {0:?}")]
    Api(String),

    /// The handshake never set the CSRF cookie
    #[error("Session handshake did not set the {0} cookie")]
    MissingCsrfToken(String),
}
