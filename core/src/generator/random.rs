use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::*;

/// Random bomb placement via rejection sampling, deterministic per seed.
///
/// Every call starts a new round so a session can re-roll layouts (new games,
/// safe-first-click retries) without repeating itself. Rejection sampling
/// degrades on near-full boards, but those short-circuit to the all-bombs
/// layout and the densities this crate targets stay far below that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomGridGenerator {
    seed: u64,
    round: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed, round: 0 }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(&mut self, config: BoardConfig) -> Array2<Tile> {
        let mut rng =
            SmallRng::seed_from_u64(self.seed ^ self.round.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.round += 1;

        let total = config.total_cells();
        let mut bombs = config.bombs;
        if bombs > total {
            log::warn!("requested {bombs} bombs but the board only fits {total}");
            bombs = total;
        }

        let mut grid = blank_grid(config.size);

        if bombs == total {
            for tile in grid.iter_mut() {
                tile.set_kind(TileKind::Bomb);
            }
        } else {
            let (w, h) = config.size;
            let mut placed: CellCount = 0;
            while placed < bombs {
                let coords = (rng.random_range(0..w), rng.random_range(0..h));
                if grid[coords.idx()].is_bomb() {
                    continue;
                }
                grid[coords.idx()].set_kind(TileKind::Bomb);
                placed += 1;
            }
        }

        finalize_grid(&mut grid);
        log::debug!(
            "generated {}x{} grid with {} bombs (round {})",
            config.size.0,
            config.size.1,
            bombs,
            self.round
        );
        grid
    }
}
