//! Image search records, kept close to the wire shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One search hit. Fields the view needs are typed; everything else the API
/// returns is carried along untouched in `extra`. A missing or null typed
/// field falls back to empty so one odd record cannot sink the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: ImageUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: ImageAuthor,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUrls {
    #[serde(default, deserialize_with = "null_as_default")]
    pub small: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAuthor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageRecord {
    pub fn new(id: impl Into<String>, small_url: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            urls: ImageUrls {
                small: small_url.into(),
                extra: Map::new(),
            },
            alt_description: None,
            user: ImageAuthor {
                name: author.into(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn display_url(&self) -> &str {
        &self.urls.small
    }

    pub fn attribution(&self) -> &str {
        if self.user.name.is_empty() {
            "Unknown author"
        } else {
            &self.user.name
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /search/photos`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ImageRecord>,
}
