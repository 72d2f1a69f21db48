/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::client::LycheeClient;
use crate::errors::LycheeError;
use crate::fields::join_ids;
use crate::properties::ArchiveKind;
use crate::session::Payload;
use bytes::Bytes;
use serde_json::Value;

impl LycheeClient {
    pub async fn get_photo(&mut self, photo_id: &str) -> Result<Value, LycheeError> {
        let fields = vec![("photoID", photo_id.to_string())];
        self.post_read("Photo::get", Payload::Fields(fields)).await
    }

    /// Raw body of `Photo::getRandom`
    pub async fn get_random_photo(&mut self) -> Result<Bytes, LycheeError> {
        Ok(self.post("Photo::getRandom", Payload::None).await?.bytes())
    }

    pub async fn set_photos_title<S: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
        title: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![("photoIDs", join_ids(photo_ids)), ("title", title.to_string())];
        self.post_bool("Photo::setTitle", fields).await
    }

    pub async fn set_photo_description(
        &mut self,
        photo_id: &str,
        description: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("photoID", photo_id.to_string()),
            ("description", description.to_string()),
        ];
        self.post_bool("Photo::setDescription", fields).await
    }

    /// Toggles the star of each photo
    pub async fn set_photos_star<S: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("photoIDs", join_ids(photo_ids))];
        self.post_bool("Photo::setStar", fields).await
    }

    /// Toggles the public flag of the photo
    pub async fn set_photo_public(&mut self, photo_id: &str) -> Result<bool, LycheeError> {
        let fields = vec![("photoID", photo_id.to_string())];
        self.post_bool("Photo::setPublic", fields).await
    }

    /// Replaces the tags of each photo
    pub async fn set_photos_tags<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
        tags: &[T],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("photoIDs", join_ids(photo_ids)), ("tags", join_ids(tags))];
        self.post_bool("Photo::setTags", fields).await
    }

    /// Moves the photos into the album
    pub async fn set_photos_album<S: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
        album_id: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("photoIDs", join_ids(photo_ids)),
            ("albumID", album_id.to_string()),
        ];
        self.post_bool("Photo::setAlbum", fields).await
    }

    pub async fn set_photo_license(
        &mut self,
        photo_id: &str,
        license: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("photoID", photo_id.to_string()),
            ("license", license.to_string()),
        ];
        self.post_bool("Photo::setLicense", fields).await
    }

    /// Uploads a photo into the album and returns the raw response, usually the new photo id.
    ///
    /// The file goes in the multipart field named by [`crate::ServerConfig::upload_field`].
    pub async fn add_photo(
        &mut self,
        album_id: &str,
        file_name: &str,
        data: impl Into<Bytes>,
    ) -> Result<Bytes, LycheeError> {
        let payload = Payload::Upload {
            fields: vec![("albumID", album_id.to_string())],
            file_name: file_name.to_string(),
            data: data.into(),
        };
        Ok(self.post("Photo::add", payload).await?.bytes())
    }

    pub async fn delete_photos<S: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("photoIDs", join_ids(photo_ids))];
        self.post_bool("Photo::delete", fields).await
    }

    /// Copies the photos into the album
    pub async fn duplicate_photos<S: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
        album_id: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("photoIDs", join_ids(photo_ids)),
            ("albumID", album_id.to_string()),
        ];
        self.post_bool("Photo::duplicate", fields).await
    }

    /// Downloads the photos in the requested size.
    ///
    /// The server sends a single image for one id and a ZIP for several.
    /// Either way the bytes are returned as is.
    pub async fn get_photos_archive<S: AsRef<str>>(
        &mut self,
        photo_ids: &[S],
        kind: ArchiveKind,
    ) -> Result<Bytes, LycheeError> {
        let kind: &'static str = kind.into();
        let params = vec![("photoIDs", join_ids(photo_ids)), ("kind", kind.to_string())];
        self.get_bytes("Photo::getArchive", params).await
    }
}
