use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// What a cell fundamentally is. `Undefined` only exists while a grid is
/// being generated and never survives a finished generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Undefined,
    Empty,
    Bomb,
}

impl Default for TileKind {
    fn default() -> Self {
        Self::Undefined
    }
}

/// Per-cell state. Coordinates are fixed at placement; everything else is
/// mutated only through [`Board`](crate::Board) operations, the outside world
/// gets read-only accessors.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    x: Coord,
    y: Coord,
    kind: TileKind,
    number: u8,
    revealed: bool,
    flagged: bool,
    questioned: bool,
    exploded: bool,
    can_interact: bool,
    sprite: u8,
}

impl Tile {
    pub(crate) fn placed(x: Coord, y: Coord) -> Self {
        Self {
            x,
            y,
            kind: TileKind::Undefined,
            number: 0,
            revealed: false,
            flagged: false,
            questioned: false,
            exploded: false,
            can_interact: true,
            sprite: crate::sprite::HIDDEN_SPRITE,
        }
    }

    pub const fn x(&self) -> Coord {
        self.x
    }

    pub const fn y(&self) -> Coord {
        self.y
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    pub const fn is_bomb(&self) -> bool {
        matches!(self.kind, TileKind::Bomb)
    }

    /// Count of bomb neighbors, only meaningful for `Empty` tiles.
    pub const fn number(&self) -> u8 {
        self.number
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_questioned(&self) -> bool {
        self.questioned
    }

    pub const fn has_exploded(&self) -> bool {
        self.exploded
    }

    pub const fn can_interact(&self) -> bool {
        self.can_interact
    }

    /// Cached sprite-sheet region, kept current by
    /// [`Board::refresh_sprites`](crate::Board::refresh_sprites).
    pub const fn sprite(&self) -> u8 {
        self.sprite
    }

    pub(crate) fn set_kind(&mut self, kind: TileKind) {
        self.kind = kind;
    }

    pub(crate) fn set_number(&mut self, number: u8) {
        self.number = number;
    }

    pub(crate) fn force_reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_flag(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub(crate) fn set_question(&mut self, questioned: bool) {
        self.questioned = questioned;
    }

    pub(crate) fn mark_exploded(&mut self) {
        self.exploded = true;
    }

    pub(crate) fn lock(&mut self) {
        self.can_interact = false;
    }

    pub(crate) fn set_sprite(&mut self, sprite: u8) {
        self.sprite = sprite;
    }

    /// Resets all play-time state, keeping position, kind and number.
    pub(crate) fn clear_marks(&mut self) {
        self.revealed = false;
        self.flagged = false;
        self.questioned = false;
        self.exploded = false;
        self.can_interact = true;
        self.sprite = crate::sprite::HIDDEN_SPRITE;
    }
}
