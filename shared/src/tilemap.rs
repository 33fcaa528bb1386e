//! Tile grid and layer helpers.
//!
//! # Model
//! - The map is a `width x height` grid of square tiles, `tile_size` pixels on a side.
//! - World units are pixels, origin at the top-left corner of tile `(0, 0)`, y grows downward.
//! - Three layers mirror the usual editor setup: `Base` (drawn below actors), `Collision`
//!   (every non-empty tile is solid) and `Foreground` (drawn above actors).
//! - Named object rectangles (`entrance`, `start`, `exit`) mark scripted locations.
//!
//! # Layout rows
//! Maps are written as one string per tile row:
//!
//! | glyph | base   | collision | foreground | object     |
//! |-------|--------|-----------|------------|------------|
//! | ` `   | -      | -         | -          | -          |
//! | `.`   | floor  | -         | -          | -          |
//! | `#`   | wall   | solid     | -          | -          |
//! | `=`   | ground | solid     | -          | -          |
//! | `~`   | floor  | -         | canopy     | -          |
//! | `E`   | floor  | -         | -          | `entrance` |
//! | `S`   | floor  | -         | -          | `start`    |
//! | `X`   | floor  | -         | -          | `exit`     |
//!
//! Repeated object glyphs grow the object to the bounding box of all its tiles.

use thiserror::Error;

use crate::Vec2;

/// Visual kind of a tile. The renderer picks a colour per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Floor,
    Wall,
    Ground,
    Canopy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Base,
    Collision,
    Foreground,
}

#[derive(Debug, Error, PartialEq)]
pub enum TileGridError {
    #[error("tile map has no tiles")]
    Empty,
    #[error("tile size must be a positive number of pixels, got {0}")]
    InvalidTileSize(f32),
    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        row: usize,
        column: usize,
        glyph: char,
    },
}

/// Axis-aligned named rectangle in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRect {
    pub name: &'static str,
    /// Top-left corner.
    pub min: Vec2,
    pub size: Vec2,
}

impl ObjectRect {
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Inclusive on the min edges, exclusive on the max edges.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    fn grow_to_include(&mut self, other_min: Vec2, other_size: Vec2) {
        let max = self.max().sup(&(other_min + other_size));
        self.min = self.min.inf(&other_min);
        self.size = max - self.min;
    }
}

#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    base: Vec<Option<TileKind>>,
    collision: Vec<Option<TileKind>>,
    foreground: Vec<Option<TileKind>>,
    objects: Vec<ObjectRect>,
}

impl TileGrid {
    /// Parse a map from layout rows (see module docs for the glyph table).
    pub fn from_rows(tile_size: f32, rows: &[&str]) -> Result<Self, TileGridError> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(TileGridError::InvalidTileSize(tile_size));
        }

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(TileGridError::Empty);
        }

        let mut grid = TileGrid {
            width,
            height,
            tile_size,
            base: vec![None; width * height],
            collision: vec![None; width * height],
            foreground: vec![None; width * height],
            objects: Vec::new(),
        };

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TileGridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (column, glyph) in line.chars().enumerate() {
                let idx = row * width + column;
                let object = match glyph {
                    ' ' => None,
                    '.' => {
                        grid.base[idx] = Some(TileKind::Floor);
                        None
                    }
                    '#' => {
                        grid.base[idx] = Some(TileKind::Wall);
                        grid.collision[idx] = Some(TileKind::Wall);
                        None
                    }
                    '=' => {
                        grid.base[idx] = Some(TileKind::Ground);
                        grid.collision[idx] = Some(TileKind::Ground);
                        None
                    }
                    '~' => {
                        grid.base[idx] = Some(TileKind::Floor);
                        grid.foreground[idx] = Some(TileKind::Canopy);
                        None
                    }
                    'E' => Some("entrance"),
                    'S' => Some("start"),
                    'X' => Some("exit"),
                    _ => {
                        return Err(TileGridError::UnknownGlyph { row, column, glyph });
                    }
                };

                if let Some(name) = object {
                    grid.base[idx] = Some(TileKind::Floor);
                    grid.add_object_tile(name, column, row);
                }
            }
        }

        Ok(grid)
    }

    fn add_object_tile(&mut self, name: &'static str, column: usize, row: usize) {
        let min = Vec2::new(column as f32, row as f32) * self.tile_size;
        let size = Vec2::new(self.tile_size, self.tile_size);

        match self.objects.iter_mut().find(|o| o.name == name) {
            Some(existing) => existing.grow_to_include(min, size),
            None => self.objects.push(ObjectRect { name, min, size }),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World size in pixels `(width, height)`.
    #[inline]
    pub fn size_in_pixels(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * self.tile_size
    }

    fn index(&self, tx: i32, ty: i32) -> Option<usize> {
        if tx < 0 || ty < 0 || tx as usize >= self.width || ty as usize >= self.height {
            return None;
        }
        Some(ty as usize * self.width + tx as usize)
    }

    /// Whether tile `(tx, ty)` blocks movement.
    ///
    /// Outside the map the left, right and bottom edges are solid; the sky above row 0 is open.
    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || tx as usize >= self.width {
            return true;
        }
        if ty < 0 {
            return false;
        }
        if ty as usize >= self.height {
            return true;
        }
        self.collision[ty as usize * self.width + tx as usize].is_some()
    }

    /// Tile coordinate containing `point`.
    #[inline]
    pub fn world_to_tile(&self, point: Vec2) -> (i32, i32) {
        (
            (point.x / self.tile_size).floor() as i32,
            (point.y / self.tile_size).floor() as i32,
        )
    }

    /// Top-left corner of tile `(tx, ty)`.
    #[inline]
    pub fn tile_min_corner(&self, tx: i32, ty: i32) -> Vec2 {
        Vec2::new(tx as f32, ty as f32) * self.tile_size
    }

    pub fn tile(&self, layer: LayerKind, tx: i32, ty: i32) -> Option<TileKind> {
        let idx = self.index(tx, ty)?;
        self.layer_slice(layer)[idx]
    }

    fn layer_slice(&self, layer: LayerKind) -> &[Option<TileKind>] {
        match layer {
            LayerKind::Base => &self.base,
            LayerKind::Collision => &self.collision,
            LayerKind::Foreground => &self.foreground,
        }
    }

    /// Non-empty tiles of `layer` as `(tx, ty, kind)`, row-major.
    pub fn layer_tiles(&self, layer: LayerKind) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        let width = self.width;
        self.layer_slice(layer)
            .iter()
            .enumerate()
            .filter_map(move |(idx, tile)| {
                tile.map(|kind| ((idx % width) as i32, (idx / width) as i32, kind))
            })
    }

    pub fn object(&self, name: &str) -> Option<&ObjectRect> {
        self.objects.iter().find(|o| o.name == name)
    }
}
