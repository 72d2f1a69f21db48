/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Lychee
//!
//! This library was created for working with the HTTP API of a
//! [Lychee](https://lycheeorg.github.io/) photo gallery server.
//!
//! ## Features
//!
//! - Session handling
//!     - CSRF handshake and token rotation are handled for you
//!     - Login/Logout
//! - Albums
//!     - Listing, creating, renaming, merging, moving and deleting
//!     - Sharing properties and licenses
//!     - ZIP archive download
//! - Photos
//!     - Upload, titles, tags, stars, licenses
//!     - Download in any of the size variants
//! - Sharing of albums with users
//! - Changing login credentials, search, url imports
//! - Lower level interface for handling the raw communication
//!
//! *Servers of different generations disagree on body encoding, success
//! reporting and the upload field name. Pick the matching [`ServerConfig`].*
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`Session`] is a way to make request/responses in a more direct way*
//!
//! ## Usage
//!
//! ```no_run
//! use lychee::{LycheeClient, LycheeError};
//!
//! async fn first_album_archive(url: &str) -> Result<Vec<u8>, LycheeError> {
//!     let mut client = LycheeClient::new(url).await?;
//!     if !client.login("admin", "secret").await? {
//!         return Ok(Vec::new());
//!     }
//!
//!     // Albums are returned as the server sent them
//!     let albums = client.get_albums().await?;
//!     let Some(id) = albums["albums"][0]["id"].as_str() else {
//!         return Ok(Vec::new());
//!     };
//!     let archive = client.get_albums_archive(&[id]).await?;
//!     client.logout().await?;
//!     Ok(archive.to_vec())
//! }
//! ```
//!
mod album;
pub mod client;
pub mod config;
mod cookies;
pub mod errors;
pub mod fields;
mod photo;
pub mod properties;
pub mod session;
mod settings;
mod sharing;

pub use album::{NO_PARENT, PLACEHOLDER_PASSWORD};
pub use client::*;
pub use config::*;
pub use errors::*;
pub use fields::{ApiFields, join_dest_and_sources, join_ids};
pub use properties::*;
pub use session::*;
