//! Two-plane tile grid with bounded point and area queries
//!
//! Tiles are owned by a central [`TileStore`]; the per-plane matrices and tile
//! sets only hold [`TileId`] handles into it. Removing a tile empties its slot,
//! so any handle still pointing at it resolves to nothing instead of dangling.

use crate::algorithm::generator::{GenerationConfig, generate_blueprint};
use crate::algorithm::maze::validate_dimensions;
use crate::io::assets::{SpriteSet, TileCatalogue};
use crate::io::configuration::{
    DEFAULT_BORDER, DEFAULT_LEVEL_HEIGHT, DEFAULT_LEVEL_WIDTH, DEFAULT_TILE_SIZE,
};
use crate::io::error::{Result, WithContext, invalid_configuration, out_of_bounds};
use crate::spatial::grid::{grid_index, pixel_to_tile, square_spans, tile_to_pixel};
use crate::spatial::rect::Rect;
use crate::spatial::tile::{Plane, Tile, TileCode, TileFlags, TileId, TileKind, collider_for};
use glam::DVec2;
use log::{info, warn};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Size of a level and its tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    /// Width in tiles (even)
    pub width: usize,
    /// Height in tiles (even)
    pub height: usize,
    /// Outer wall thickness in tiles (even)
    pub border: usize,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

impl LevelConfig {
    /// Check the even-size invariants and a non-zero tile size
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for odd or zero dimensions, an odd border
    /// or a zero tile size.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height, self.border)?;
        if self.tile_size == 0 {
            return Err(invalid_configuration(
                "tile_size",
                &self.tile_size,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_LEVEL_WIDTH,
            height: DEFAULT_LEVEL_HEIGHT,
            border: DEFAULT_BORDER,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Half-extent of a square query, possibly different per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRadius {
    /// Horizontal radius in tiles
    pub x: i32,
    /// Vertical radius in tiles
    pub y: i32,
}

impl From<i32> for SquareRadius {
    fn from(radius: i32) -> Self {
        Self {
            x: radius,
            y: radius,
        }
    }
}

impl From<(i32, i32)> for SquareRadius {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Owning table of placed tiles addressed by [`TileId`]
///
/// Removing a tile only empties its slot, so a stale id never resolves to a
/// later tile. Slots are reclaimed by [`LevelGrid::clear`], which every
/// regeneration runs first.
#[derive(Debug, Clone, Default)]
struct TileStore {
    slots: Vec<Option<Tile>>,
}

impl TileStore {
    fn next_id(&self) -> TileId {
        TileId(self.slots.len())
    }

    fn insert(&mut self, tile: Tile) {
        self.slots.push(Some(tile));
    }

    fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn remove(&mut self, id: TileId) -> Option<Tile> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Foreground and background tile layers of one level
#[derive(Debug, Clone)]
pub struct LevelGrid {
    config: LevelConfig,
    catalogue: TileCatalogue,
    store: TileStore,
    foreground: Array2<Option<TileId>>,
    background: Array2<Option<TileId>>,
    foreground_tiles: BTreeSet<TileId>,
    background_tiles: BTreeSet<TileId>,
}

impl LevelGrid {
    /// Create an empty level
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` fails [`LevelConfig::validate`].
    pub fn new(config: LevelConfig, catalogue: TileCatalogue) -> Result<Self> {
        config.validate()?;
        let shape = (config.height, config.width);
        Ok(Self {
            config,
            catalogue,
            store: TileStore::default(),
            foreground: Array2::from_elem(shape, None),
            background: Array2::from_elem(shape, None),
            foreground_tiles: BTreeSet::new(),
            background_tiles: BTreeSet::new(),
        })
    }

    /// Create a level and generate its layout from a seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` is rejected.
    pub fn generated(config: LevelConfig, catalogue: TileCatalogue, seed: u64) -> Result<Self> {
        let mut level = Self::new(config, catalogue)?;
        let mut rng = StdRng::seed_from_u64(seed);
        level.generate(&mut rng)?;
        info!(
            "generated level {}x{} from seed {seed}: {} foreground, {} background tiles",
            config.width,
            config.height,
            level.tile_count(Plane::Foreground),
            level.tile_count(Plane::Background)
        );
        Ok(level)
    }

    /// Discard every tile and build a new random layout
    ///
    /// Foreground tiles are collidable. A background tile is placed wherever the
    /// foreground is empty or holds a transparent kind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the level size or border cannot be carved.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.clear();

        let generation = GenerationConfig::with_size(
            self.config.width,
            self.config.height,
            self.config.border,
        );
        let blueprint = generate_blueprint(&generation, rng)?;

        for ((row, col), foreground) in blueprint.foreground.indexed_iter() {
            let position = [col as i32, row as i32];
            let background = blueprint
                .background
                .get([row, col])
                .copied()
                .unwrap_or(TileCode::NONE);

            if !foreground.is_none() {
                self.place_tile(position, *foreground, Plane::Foreground, TileFlags::SOLID, rng)?;
            }
            if foreground.is_none() || foreground.kind.is_transparent() {
                self.place_tile(position, background, Plane::Background, TileFlags::DECOR, rng)?;
            }
        }

        Ok(())
    }

    /// Remove every tile from both planes
    pub fn clear(&mut self) {
        self.store.clear();
        self.foreground.fill(None);
        self.background.fill(None);
        self.foreground_tiles.clear();
        self.background_tiles.clear();
    }

    /// Level configuration
    pub const fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Sprite catalogue used for placement
    pub const fn catalogue(&self) -> &TileCatalogue {
        &self.catalogue
    }

    /// Width in tiles
    pub const fn width(&self) -> usize {
        self.config.width
    }

    /// Height in tiles
    pub const fn height(&self) -> usize {
        self.config.height
    }

    /// Tile edge length in pixels
    pub const fn tile_size(&self) -> u32 {
        self.config.tile_size
    }

    /// Level size in pixels `[width, height]`
    pub const fn size_pixels(&self) -> [u32; 2] {
        [
            self.config.width as u32 * self.config.tile_size,
            self.config.height as u32 * self.config.tile_size,
        ]
    }

    /// Tile coordinates containing a pixel position
    pub fn pixel_to_tile(&self, pixel: DVec2) -> [i32; 2] {
        [
            pixel_to_tile(pixel.x, self.config.tile_size),
            pixel_to_tile(pixel.y, self.config.tile_size),
        ]
    }

    /// Tile at a cell, if any
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` lies outside the grid.
    pub fn get_tile(&self, position: [i32; 2], plane: Plane) -> Result<Option<&Tile>> {
        let index = self.cell_index(position).with_operation("get_tile")?;
        Ok(self.tile_at(index, plane))
    }

    /// Non-empty tiles within an inclusive square around `center`
    ///
    /// The square is clipped to the grid; `radius` may differ per axis.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `center` lies outside the grid.
    pub fn get_tiles_in_square(
        &self,
        center: [i32; 2],
        radius: impl Into<SquareRadius>,
        plane: Plane,
    ) -> Result<Vec<&Tile>> {
        self.cell_index(center).with_operation("get_tiles_in_square")?;

        let radius = radius.into();
        let (cols, rows) = square_spans(
            center,
            [radius.x, radius.y],
            self.config.width,
            self.config.height,
        );

        let mut tiles = Vec::new();
        for row in rows {
            for col in cols.clone() {
                if let Some(tile) = self.tile_at([row, col], plane) {
                    tiles.push(tile);
                }
            }
        }
        Ok(tiles)
    }

    /// Collidable foreground tiles within a square around `center`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `center` lies outside the grid.
    pub fn collidable_tiles_near(
        &self,
        center: [i32; 2],
        radius: impl Into<SquareRadius>,
    ) -> Result<Vec<&Tile>> {
        let mut tiles = self.get_tiles_in_square(center, radius, Plane::Foreground)?;
        tiles.retain(|tile| tile.collidable);
        Ok(tiles)
    }

    /// Place a tile at a cell
    ///
    /// `TileKind::None` places nothing. A kind missing from the catalogue is
    /// replaced by the blank `none` tile. The variant is kept when valid and
    /// drawn uniformly otherwise. A tile already in the cell is detached first.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` lies outside the grid.
    pub fn place_tile<R: Rng + ?Sized>(
        &mut self,
        position: [i32; 2],
        code: TileCode,
        plane: Plane,
        flags: TileFlags,
        rng: &mut R,
    ) -> Result<Option<TileId>> {
        let index = self.cell_index(position).with_operation("place_tile")?;
        if code.is_none() {
            return Ok(None);
        }

        let (kind, sprites) = match self.catalogue.get(code.kind) {
            Some(sprites) => (code.kind, *sprites),
            None => {
                warn!("tile type '{}' missing from catalogue; placing blank tile", code.kind);
                (TileKind::None, self.blank_sprites())
            }
        };
        let requested = if kind == code.kind { code.variant } else { 0 };
        let resolved = TileCode::new(kind, sprites.resolve_variant(requested, rng));

        let tile_size = self.config.tile_size;
        let bounds = Rect::new(
            tile_to_pixel(position[0], tile_size),
            tile_to_pixel(position[1], tile_size),
            sprites.sprite_size[0] as i32,
            sprites.sprite_size[1] as i32,
        );

        self.detach(index, plane);

        let id = self.store.next_id();
        self.store.insert(Tile {
            id,
            code: resolved,
            plane,
            grid_position: position,
            bounds,
            collider: collider_for(kind, bounds),
            collidable: flags.collidable,
            visible: flags.visible,
        });

        let (matrix, members) = self.plane_mut(plane);
        if let Some(slot) = matrix.get_mut(index) {
            *slot = Some(id);
        }
        members.insert(id);

        Ok(Some(id))
    }

    /// Remove the tile at a cell, returning it
    ///
    /// Removing from an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` lies outside the grid.
    pub fn remove_tile(&mut self, position: [i32; 2], plane: Plane) -> Result<Option<Tile>> {
        let index = self.cell_index(position).with_operation("remove_tile")?;
        Ok(self.detach(index, plane))
    }

    /// Resolve a handle
    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        self.store.get(id)
    }

    /// Iterate the tiles of a plane in placement order
    pub fn tiles(&self, plane: Plane) -> impl Iterator<Item = &Tile> {
        let members = match plane {
            Plane::Foreground => &self.foreground_tiles,
            Plane::Background => &self.background_tiles,
        };
        members.iter().filter_map(|id| self.store.get(*id))
    }

    /// Number of tiles on a plane
    pub fn tile_count(&self, plane: Plane) -> usize {
        match plane {
            Plane::Foreground => self.foreground_tiles.len(),
            Plane::Background => self.background_tiles.len(),
        }
    }

    fn cell_index(&self, position: [i32; 2]) -> Result<[usize; 2]> {
        grid_index(position, self.config.width, self.config.height)
            .ok_or_else(|| out_of_bounds(position, (self.config.width, self.config.height)))
    }

    fn tile_at(&self, index: [usize; 2], plane: Plane) -> Option<&Tile> {
        let matrix = match plane {
            Plane::Foreground => &self.foreground,
            Plane::Background => &self.background,
        };
        matrix
            .get(index)
            .copied()
            .flatten()
            .and_then(|id| self.store.get(id))
    }

    fn plane_mut(&mut self, plane: Plane) -> (&mut Array2<Option<TileId>>, &mut BTreeSet<TileId>) {
        match plane {
            Plane::Foreground => (&mut self.foreground, &mut self.foreground_tiles),
            Plane::Background => (&mut self.background, &mut self.background_tiles),
        }
    }

    fn detach(&mut self, index: [usize; 2], plane: Plane) -> Option<Tile> {
        let (matrix, members) = self.plane_mut(plane);
        let id = matrix.get_mut(index).and_then(Option::take)?;
        members.remove(&id);
        self.store.remove(id)
    }

    fn blank_sprites(&self) -> SpriteSet {
        self.catalogue
            .get(TileKind::None)
            .copied()
            .unwrap_or(SpriteSet {
                variants: 1,
                sprite_size: [self.config.tile_size, self.config.tile_size],
            })
    }
}
