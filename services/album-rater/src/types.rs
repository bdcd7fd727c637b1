use serde::{Deserialize, Serialize};

/// Catalog metadata for one album. Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    #[serde(rename = "albumName", default)]
    pub album_name: String,
    #[serde(rename = "artistName", default)]
    pub artist_name: String,
    #[serde(rename = "img", default)]
    pub image: String,
    #[serde(default)]
    pub link: String
}

// Short-lived bearer credential, requested fresh per transaction
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token", default)]
    token: String
}

impl AccessToken {
    #[cfg(test)]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

/// Never print the bearer itself
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("len", &self.token.len())
            .finish()
    }
}
