//! Embed data model: a displayable content card and its nested records

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::image::Image;

/// Author block shown above the title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_url: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_icon_url(self, icon_url: impl Into<Image>) -> Self {
        Self {
            icon_url: Some(icon_url.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..self
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn icon_url(&self) -> Option<&Image> {
        self.icon_url.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Key-value field in the body of an embed
///
/// `inline` is tri-state: `None` leaves the layout to the platform default,
/// which is not the same as `Some(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline: Option<bool>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: None,
        }
    }

    #[must_use]
    pub fn with_inline(self, inline: bool) -> Self {
        Self {
            inline: Some(inline),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn inline(&self) -> Option<bool> {
        self.inline
    }
}

/// Footer block shown under the body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_url: Option<Image>,
}

impl Footer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            icon_url: None,
        }
    }

    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_icon_url(self, icon_url: impl Into<Image>) -> Self {
        Self {
            icon_url: Some(icon_url.into()),
            ..self
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn icon_url(&self) -> Option<&Image> {
        self.icon_url.as_ref()
    }
}

/// Rich content card.
///
/// Every optional attribute starts out absent rather than empty, and the
/// author and footer start out with all of their own attributes absent.
/// Populate it by assigning fields directly; `fields` keeps insertion order.
/// No limits on text length or field count are enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Image>,

    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub footer: Footer,
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Embed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
