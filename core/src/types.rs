/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait AsIndex {
    fn idx(self) -> [usize; 2];
}

impl AsIndex for Coord2 {
    fn idx(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

pub const fn cell_area(w: Coord, h: Coord) -> CellCount {
    (w as CellCount).saturating_mul(h as CellCount)
}

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Iterates the in-bounds Moore neighborhood of `center`, clipping at the
/// grid edges.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    })
}
