//! Terrain passability grid

use crate::core::error::{ColonyError, Result};
use crate::core::types::Position;
use serde::{Deserialize, Serialize};

/// Passability class of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    /// Plain ground, free to stand on
    Open,
    /// Passable but undesirable; repositioning avoids it
    Rubble,
    /// Impassable
    Blocked,
}

/// Dense row-major grid of terrain tiles.
///
/// Lookups outside the grid read as Blocked, so edge agents never
/// step off the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
}

impl TerrainGrid {
    /// All-open grid of the given dimensions
    pub fn open(width: i32, height: i32) -> Self {
        let count = (width.max(0) as usize) * (height.max(0) as usize);
        Self { width, height, cells: vec![Terrain::Open; count] }
    }

    /// Build from a flat row-major cell vector
    pub fn from_cells(width: i32, height: i32, cells: Vec<Terrain>) -> Result<Self> {
        let expected = (width.max(0) as usize) * (height.max(0) as usize);
        if cells.len() != expected {
            return Err(ColonyError::TerrainShape { width, height, expected, got: cells.len() });
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn at(&self, pos: Position) -> Terrain {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return Terrain::Blocked;
        }
        self.cells[(pos.y * self.width + pos.x) as usize]
    }

    pub fn set(&mut self, pos: Position, terrain: Terrain) {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return;
        }
        self.cells[(pos.y * self.width + pos.x) as usize] = terrain;
    }
}
