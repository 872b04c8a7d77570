//! Opaque image references

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to image data, such as a URL or an attachment identifier.
///
/// The contents are never inspected here; whatever turns an embed into a
/// payload decides what the reference means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Image(String);

impl Image {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Image {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl From<&str> for Image {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
