use ndarray::Array2;

use crate::*;

pub use random::*;

mod random;

/// Builds a fresh, fully initialized tile grid for a board configuration.
pub trait GridGenerator {
    fn generate(&mut self, config: BoardConfig) -> Array2<Tile>;
}

/// Allocates the placeholder grid every generation starts from: all tiles
/// `Undefined`, unrevealed, interactable.
pub(crate) fn blank_grid((w, h): Coord2) -> Array2<Tile> {
    Array2::from_shape_fn((w as usize, h as usize), |(x, y)| {
        Tile::placed(x as Coord, y as Coord)
    })
}

/// Turns leftover placeholders into empty cells and computes every empty
/// cell's bomb-neighbor count. After this pass no tile is `Undefined`.
pub(crate) fn finalize_grid(grid: &mut Array2<Tile>) {
    let dim = grid.dim();
    let size = (dim.0 as Coord, dim.1 as Coord);

    for tile in grid.iter_mut() {
        if tile.kind() == TileKind::Undefined {
            tile.set_kind(TileKind::Empty);
        }
    }

    for x in 0..size.0 {
        for y in 0..size.1 {
            if grid[(x, y).idx()].is_bomb() {
                continue;
            }
            let count = neighbors((x, y), size)
                .filter(|&pos| grid[pos.idx()].is_bomb())
                .count() as u8;
            grid[(x, y).idx()].set_number(count);
        }
    }
}

/// Builds a grid with bombs at exactly the given coordinates, for scripted
/// boards and tests.
pub fn grid_from_bomb_coords(size: Coord2, bombs: &[Coord2]) -> Result<Array2<Tile>> {
    if size.0 == 0 || size.1 == 0 {
        return Err(GameError::InvalidCoords);
    }

    let mut grid = blank_grid(size);
    for &coords in bombs {
        if coords.0 >= size.0 || coords.1 >= size.1 {
            return Err(GameError::InvalidCoords);
        }
        grid[coords.idx()].set_kind(TileKind::Bomb);
    }
    finalize_grid(&mut grid);
    Ok(grid)
}
