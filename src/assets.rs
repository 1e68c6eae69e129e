//! Read-only registry of tile images.
//!
//! The registry is filled once when the host has loaded its images and is
//! only read afterwards. It is generic over the image type so the browser
//! uses `HtmlImageElement` while tests use plain values.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::collections::HashMap;

use crate::tile::TileKind;

/// Default URL of the image for each tile kind, relative to the page.
#[must_use]
pub fn image_source(tile: TileKind) -> &'static str {
    match tile {
        TileKind::Queen => "static/images/honeybee.svg",
        TileKind::Spider => "static/images/spider.svg",
        TileKind::Beetle => "static/images/beetle.svg",
        TileKind::Ant => "static/images/ant.svg",
        TileKind::Grasshopper => "static/images/cockroach.svg",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRegistry<I> {
    images: HashMap<TileKind, I>,
}

impl<I> AssetRegistry<I> {
    #[must_use]
    pub fn new() -> Self {
        Self { images: HashMap::new() }
    }

    /// Register `image` for `tile`, replacing any previous one.
    #[must_use]
    pub fn with(mut self, tile: TileKind, image: I) -> Self {
        self.images.insert(tile, image);
        self
    }

    #[must_use]
    pub fn get(&self, tile: TileKind) -> Option<&I> {
        self.images.get(&tile)
    }

    /// Tile kinds with no registered image.
    #[must_use]
    pub fn missing(&self) -> Vec<TileKind> {
        TileKind::ALL.into_iter().filter(|t| !self.images.contains_key(t)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl<I> Default for AssetRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> FromIterator<(TileKind, I)> for AssetRegistry<I> {
    fn from_iter<T: IntoIterator<Item = (TileKind, I)>>(iter: T) -> Self {
        Self { images: iter.into_iter().collect() }
    }
}
