//! # Embed Preview
//!
//! Builds an [`Embed`] from environment variables so a card can be checked
//! without writing any code. Only the `embui-preview` binary uses this; it
//! is not part of the library.
//!
//! ## Environment Configuration
//!
//! | Variable            | Embed attribute |
//! |---------------------|-----------------|
//! | `EMBUI_TITLE`       | `title`         |
//! | `EMBUI_DESCRIPTION` | `description`   |
//! | `EMBUI_URL`         | `url`           |
//! | `EMBUI_COLOUR`      | `colour` (`#rrggbb`) |
//! | `EMBUI_IMAGE`       | `image`         |
//! | `EMBUI_THUMBNAIL`   | `thumbnail`     |
//! | `EMBUI_FOOTER`      | `footer.text`   |
//!
//! Unset variables leave the attribute absent. A colour that fails to parse
//! is logged and skipped rather than aborting the preview.

use chrono::{DateTime, FixedOffset};
use tracing::{info, warn};

use embui::{Colour, Embed, Footer, Image};

/// Preview settings collected from the environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub colour: Option<Colour>,
    pub image: Option<Image>,
    pub thumbnail: Option<Image>,
    pub footer: Option<String>,
}

impl PreviewConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let colour = lookup("EMBUI_COLOUR").and_then(|raw| match raw.parse::<Colour>() {
            Ok(colour) => Some(colour),
            Err(e) => {
                warn!("Ignoring EMBUI_COLOUR={raw:?}: {e}");
                None
            }
        });

        Self {
            title: lookup("EMBUI_TITLE"),
            description: lookup("EMBUI_DESCRIPTION"),
            url: lookup("EMBUI_URL"),
            colour,
            image: lookup("EMBUI_IMAGE").map(Image::from),
            thumbnail: lookup("EMBUI_THUMBNAIL").map(Image::from),
            footer: lookup("EMBUI_FOOTER"),
        }
    }

    /// Builds the embed described by this configuration, stamped with `timestamp`.
    pub fn to_embed(&self, timestamp: DateTime<FixedOffset>) -> Embed {
        let mut embed = Embed::new();
        embed.title.clone_from(&self.title);
        embed.description.clone_from(&self.description);
        embed.url.clone_from(&self.url);
        embed.colour = self.colour;
        embed.image.clone_from(&self.image);
        embed.thumbnail.clone_from(&self.thumbnail);
        if let Some(text) = &self.footer {
            embed.footer = Footer::new(text.as_str());
        }
        embed.timestamp = Some(timestamp);

        info!(
            "Built preview embed: title={:?}, colour={}",
            embed.title,
            embed.colour.map_or_else(|| "none".to_string(), |c| c.to_string())
        );

        embed
    }
}
