/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::client::LycheeClient;
use crate::errors::LycheeError;
use crate::fields::{join_dest_and_sources, join_ids, or_default};
use crate::properties::AlbumVisibility;
use crate::session::Payload;
use bytes::Bytes;
use serde_json::Value;

/// Parent id meaning "top level". The server rejects an empty parent.
pub const NO_PARENT: &str = "0";

/// Password sent when checking a public album without one. The server rejects an empty password.
pub const PLACEHOLDER_PASSWORD: &str = "rand";

impl LycheeClient {
    /// Returns the albums visible to the current session
    pub async fn get_albums(&mut self) -> Result<Value, LycheeError> {
        self.post_read("Albums::get", Payload::None).await
    }

    /// Returns the album hierarchy
    pub async fn get_albums_tree(&mut self) -> Result<Value, LycheeError> {
        self.post_read("Albums::tree", Payload::None).await
    }

    /// Returns all albums with only map related data
    pub async fn get_albums_position_data(&mut self) -> Result<Value, LycheeError> {
        self.post_read("Albums::getPositionData", Payload::None).await
    }

    pub async fn get_album(&mut self, album_id: &str) -> Result<Value, LycheeError> {
        let fields = vec![("albumID", album_id.to_string())];
        self.post_read("Album::get", Payload::Fields(fields)).await
    }

    /// Returns the album with only map related data
    pub async fn get_album_position_data(&mut self, album_id: &str) -> Result<Value, LycheeError> {
        let fields = vec![("albumID", album_id.to_string())];
        self.post_read("Album::getPositionData", Payload::Fields(fields))
            .await
    }

    /// Whether the album can be accessed with the given password
    pub async fn get_public_album(
        &mut self,
        album_id: &str,
        password: Option<&str>,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("albumID", album_id.to_string()),
            ("password", or_default(password, PLACEHOLDER_PASSWORD).to_string()),
        ];
        self.post_bool("Album::getPublic", fields).await
    }

    /// Creates an album, at the top level unless a parent is given
    pub async fn add_album(
        &mut self,
        title: &str,
        parent_id: Option<&str>,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("title", title.to_string()),
            ("parent_id", or_default(parent_id, NO_PARENT).to_string()),
        ];
        self.post_bool("Album::add", fields).await
    }

    pub async fn set_albums_title<S: AsRef<str>>(
        &mut self,
        album_ids: &[S],
        title: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![("albumIDs", join_ids(album_ids)), ("title", title.to_string())];
        self.post_bool("Album::setTitle", fields).await
    }

    pub async fn set_album_description(
        &mut self,
        album_id: &str,
        description: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("albumID", album_id.to_string()),
            ("description", description.to_string()),
        ];
        self.post_bool("Album::setDescription", fields).await
    }

    /// Changes the sharing properties of the album. The password may be empty here.
    pub async fn set_album_public(
        &mut self,
        album_id: &str,
        visibility: &AlbumVisibility,
    ) -> Result<bool, LycheeError> {
        self.post_bool("Album::setPublic", visibility.to_fields(album_id))
            .await
    }

    /// Sets the license of the album. Returns false for an unknown license name.
    pub async fn set_album_license(
        &mut self,
        album_id: &str,
        license: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("albumID", album_id.to_string()),
            ("license", license.to_string()),
        ];
        self.post_bool("Album::setLicense", fields).await
    }

    /// Deletes the albums and every photo in them
    pub async fn delete_albums<S: AsRef<str>>(
        &mut self,
        album_ids: &[S],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("albumIDs", join_ids(album_ids))];
        self.post_bool("Album::delete", fields).await
    }

    /// Merges the sources into `dest_id`.
    ///
    /// A destination that is also listed as a source gets deleted by the server.
    pub async fn merge_albums<S: AsRef<str>>(
        &mut self,
        dest_id: &str,
        source_ids: &[S],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("albumIDs", join_dest_and_sources(dest_id, source_ids))];
        self.post_bool("Album::merge", fields).await
    }

    /// Moves the sources under `dest_id`, which becomes their parent
    pub async fn move_albums<S: AsRef<str>>(
        &mut self,
        dest_id: &str,
        source_ids: &[S],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("albumIDs", join_dest_and_sources(dest_id, source_ids))];
        self.post_bool("Album::move", fields).await
    }

    /// ZIP archive of the albums' photos, sub albums included
    pub async fn get_albums_archive<S: AsRef<str>>(
        &mut self,
        album_ids: &[S],
    ) -> Result<Bytes, LycheeError> {
        // TODO: stream large archives to a writer instead of buffering the whole body
        let params = vec![("albumIDs", join_ids(album_ids))];
        self.get_bytes("Album::getArchive", params).await
    }
}
