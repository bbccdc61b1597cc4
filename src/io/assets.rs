//! Tile catalogue describing the sprite sets an asset loader provides
//!
//! The catalogue never loads images; it only records how many variants exist
//! for each tile type and how large their sprites are, which is all the level
//! grid needs to resolve variants and build colliders.

use crate::spatial::tile::TileKind;
use rand::Rng;
use std::collections::HashMap;

/// Variant count and sprite size for one tile type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSet {
    /// Number of variants (at least one)
    pub variants: usize,
    /// Sprite size in pixels `[width, height]`
    pub sprite_size: [u32; 2],
}

impl SpriteSet {
    /// Resolve a requested variant to a valid index
    ///
    /// In-range requests are kept; negative or out-of-range ones are replaced by
    /// a uniformly random variant.
    pub fn resolve_variant<R: Rng + ?Sized>(&self, requested: i32, rng: &mut R) -> i32 {
        match usize::try_from(requested) {
            Ok(index) if index < self.variants => requested,
            _ => i32::try_from(rng.random_range(0..self.variants.max(1))).unwrap_or(0),
        }
    }
}

/// Mapping from tile type to the sprite set available for it
#[derive(Debug, Clone, Default)]
pub struct TileCatalogue {
    entries: HashMap<TileKind, SpriteSet>,
}

impl TileCatalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue matching the standard tile sheet, with tile-sized sprites
    pub fn standard(tile_size: u32) -> Self {
        let mut catalogue = Self::new();
        let size = [tile_size, tile_size];
        catalogue.register(TileKind::None, 1, size);
        catalogue.register(TileKind::StoneFloor, 4, size);
        catalogue.register(TileKind::DirtFloor, 6, size);
        catalogue.register(TileKind::Wall, 4, size);
        catalogue.register(TileKind::WallTop, 4, size);
        catalogue.register(TileKind::Stone, 4, size);
        catalogue
    }

    /// Register (or replace) the sprite set for a kind
    ///
    /// A variant count of zero is stored as one.
    pub fn register(&mut self, kind: TileKind, variants: usize, sprite_size: [u32; 2]) {
        self.entries.insert(
            kind,
            SpriteSet {
                variants: variants.max(1),
                sprite_size,
            },
        );
    }

    /// Remove a kind, returning its sprite set
    pub fn unregister(&mut self, kind: TileKind) -> Option<SpriteSet> {
        self.entries.remove(&kind)
    }

    /// Look up the sprite set for a kind
    pub fn get(&self, kind: TileKind) -> Option<&SpriteSet> {
        self.entries.get(&kind)
    }

    /// Whether the catalogue provides sprites for a kind
    pub fn contains(&self, kind: TileKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no kinds are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
