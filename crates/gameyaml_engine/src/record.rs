//! Canonical catalogue record produced for every supported page.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CanonicalRecord {
    pub name: String,
    pub brief_description: Option<String>,
    pub description: String,
    pub authors: Vec<Author>,
    pub tags: Tags,
    pub links: Vec<Link>,
    pub thumbnail: String,
    pub screenshots: Vec<Screenshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorRole {
    Developer,
    Publisher,
    Producer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: Vec<AuthorRole>,
}

impl Author {
    pub fn new(name: impl Into<String>, role: Vec<AuthorRole>) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tags {
    #[serde(rename = "type")]
    pub kind: Vec<String>,
    pub species: Vec<String>,
    pub fetish: Vec<String>,
    pub misc: Vec<String>,
    pub generated_tags: Vec<String>,
    pub lang: Vec<String>,
    pub publish: Vec<String>,
    pub platform: Vec<String>,
    pub sys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Link {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// One screenshot slot: a static image URL or a video with alternative sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Screenshot {
    Video(VideoEntry),
    Image(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: Vec<VideoSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    pub mime: String,
    pub sensitive: bool,
    pub uri: String,
}

impl VideoEntry {
    /// Pairs the webm and mp4 encodings of one trailer, webm first.
    pub fn webm_mp4(webm: String, mp4: String, sensitive: bool) -> Self {
        Self {
            kind: MediaKind::Video,
            src: vec![
                VideoSource {
                    mime: "video/webm".to_string(),
                    sensitive,
                    uri: webm,
                },
                VideoSource {
                    mime: "video/mp4".to_string(),
                    sensitive,
                    uri: mp4,
                },
            ],
        }
    }
}

/// A canonical record plus the remote image its `thumbnail` filename stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledRecord {
    pub record: CanonicalRecord,
    pub thumbnail_url: String,
}
