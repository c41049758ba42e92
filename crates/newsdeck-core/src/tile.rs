use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything a page can lay out.
///
/// Pages store handles (typically `Arc<T>`), so the trait is implemented for
/// the common smart pointers as well.
pub trait Tile {
    /// True when the tile needs a 2x2 block instead of a single cell
    fn has_large_form(&self) -> bool;
}

impl<T: Tile + ?Sized> Tile for &T {
    fn has_large_form(&self) -> bool {
        (**self).has_large_form()
    }
}

impl<T: Tile + ?Sized> Tile for Arc<T> {
    fn has_large_form(&self) -> bool {
        (**self).has_large_form()
    }
}

impl<T: Tile + ?Sized> Tile for Rc<T> {
    fn has_large_form(&self) -> bool {
        (**self).has_large_form()
    }
}

impl<T: Tile + ?Sized> Tile for Box<T> {
    fn has_large_form(&self) -> bool {
        (**self).has_large_form()
    }
}

/// A headline shown in the deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsTile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Publisher or feed name
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Lead image; only its presence matters for layout
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsTile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            summary: None,
            source: None,
            url: None,
            image_url: None,
            published_at: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Tile for NewsTile {
    fn has_large_form(&self) -> bool {
        self.image_url.is_some()
    }
}

impl fmt::Display for NewsTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
