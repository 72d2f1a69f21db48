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
use crate::session::Payload;
use serde_json::Value;

impl LycheeClient {
    /// Lists existing shares along with the users and albums they can involve
    pub async fn get_shares(&mut self) -> Result<Value, LycheeError> {
        self.post_read("Sharing::List", Payload::None).await
    }

    /// Shares every album with every user
    pub async fn add_shares<S: AsRef<str>, T: AsRef<str>>(
        &mut self,
        user_ids: &[S],
        album_ids: &[T],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("UserIDs", join_ids(user_ids)), ("albumIDs", join_ids(album_ids))];
        self.post_bool("Sharing::Add", fields).await
    }

    pub async fn delete_shares<S: AsRef<str>>(
        &mut self,
        share_ids: &[S],
    ) -> Result<bool, LycheeError> {
        let fields = vec![("ShareIDs", join_ids(share_ids))];
        self.post_bool("Sharing::Delete", fields).await
    }
}
