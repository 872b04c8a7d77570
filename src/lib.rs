//! Value objects for composing rich chat embeds: a packed RGB [`Colour`]
//! and the [`Embed`] card with its author, field and footer records.

pub mod colour;
pub mod embed;
pub mod image;

pub use colour::{Colour, ParseColourError};
pub use embed::{Author, Embed, Field, Footer};
pub use image::Image;
