/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::fields::{ApiFields, flag};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Size variant requested from `Photo::getArchive`
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArchiveKind {
    #[default]
    #[strum(serialize = "FULL")]
    Full,
    #[strum(serialize = "MEDIUM2X")]
    Medium2x,
    #[strum(serialize = "MEDIUM")]
    Medium,
    #[strum(serialize = "SMALL2X")]
    Small2x,
    #[strum(serialize = "SMALL")]
    Small,
    #[strum(serialize = "THUMB2X")]
    Thumb2x,
    #[strum(serialize = "THUMB")]
    Thumb,
}

/// Sharing properties used by `Album::setPublic`
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct AlbumVisibility {
    pub public: bool,
    pub visible: bool,
    pub nsfw: bool,
    pub downloadable: bool,
    pub share_button_visible: bool,
    pub full_photo: bool,

    /// Empty means no password
    #[serde(default)]
    pub password: String,
}

impl AlbumVisibility {
    pub(crate) fn to_fields(&self, album_id: &str) -> ApiFields {
        vec![
            ("albumID", album_id.to_string()),
            ("public", flag(self.public)),
            ("visible", flag(self.visible)),
            ("nsfw", flag(self.nsfw)),
            ("downloadable", flag(self.downloadable)),
            ("share_button_visible", flag(self.share_button_visible)),
            ("full_photo", flag(self.full_photo)),
            ("password", self.password.clone()),
        ]
    }
}
