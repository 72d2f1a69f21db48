/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::client::LycheeClient;
use crate::errors::LycheeError;
use crate::fields::{join_ids, or_default};
use crate::session::Payload;
use serde_json::Value;

impl LycheeClient {
    /// Changes the login credentials.
    ///
    /// A blank new username or password keeps the old one.
    pub async fn change_login(
        &mut self,
        username: &str,
        password: &str,
        new_username: &str,
        new_password: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![
            ("username", or_default(Some(new_username), username).to_string()),
            ("password", or_default(Some(new_password), password).to_string()),
            ("oldUsername", username.to_string()),
            ("oldPassword", password.to_string()),
        ];
        self.post_bool("Settings::setLogin", fields).await
    }

    pub async fn list_users(&mut self) -> Result<Value, LycheeError> {
        self.post_read("User::List", Payload::None).await
    }

    /// Searches albums and photos for the term
    pub async fn search(&mut self, term: &str) -> Result<Value, LycheeError> {
        let fields = vec![("term", term.to_string())];
        self.post_read("Search::run", Payload::Fields(fields)).await
    }

    /// Has the server fetch each url into the album
    pub async fn import_from_urls<S: AsRef<str>>(
        &mut self,
        urls: &[S],
        album_id: &str,
    ) -> Result<bool, LycheeError> {
        let fields = vec![("url", join_ids(urls)), ("albumID", album_id.to_string())];
        self.post_bool("Import::url", fields).await
    }
}
