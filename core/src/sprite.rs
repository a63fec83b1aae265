//! Sprite-region selection. The actual drawing lives outside this crate; the
//! core only derives which of the sheet's regions a tile currently shows so a
//! renderer never has to reach into tile internals.

use crate::{GameError, Result, Tile, TileKind};

/// Number of regions in the tile sprite sheet.
pub const SPRITE_REGIONS: u8 = 16;

/// Region of a plain hidden tile, also the placement-time default.
pub(crate) const HIDDEN_SPRITE: u8 = 1;

/// Number regions start right after the marker regions: number `n` maps to
/// region `7 + n`.
const NUMBER_OFFSET: u8 = 7;

/// Maps a tile to its sprite-sheet region.
///
/// Generation guarantees no `Undefined` tile survives, so hitting one here is
/// a consistency bug, not a drawable state.
pub fn sprite_index(tile: &Tile) -> Result<u8> {
    if tile.is_revealed() {
        revealed_index(tile)
    } else {
        Ok(hidden_index(tile))
    }
}

fn hidden_index(tile: &Tile) -> u8 {
    if tile.is_flagged() {
        2
    } else if tile.is_questioned() {
        3
    } else {
        HIDDEN_SPRITE
    }
}

fn revealed_index(tile: &Tile) -> Result<u8> {
    match tile.kind() {
        TileKind::Empty => Ok(if tile.is_flagged() {
            7
        } else if tile.is_questioned() {
            4
        } else if tile.number() != 0 {
            NUMBER_OFFSET + tile.number()
        } else {
            0
        }),
        TileKind::Bomb => Ok(if tile.is_flagged() {
            2
        } else if tile.has_exploded() {
            6
        } else {
            5
        }),
        TileKind::Undefined => Err(GameError::UndefinedKind),
    }
}
