use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Layout re-rolls attempted before safe-first-click gives up.
const MAX_GENERATION_ATTEMPTS: u32 = 10_000;

/// Lifecycle of one board layout. `Ready` means nothing has been revealed
/// yet, which is what gates the safe-first-click regeneration.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardPhase {
    Ready,
    Active,
    Won,
    Lost,
}

impl BoardPhase {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardPhase {
    fn default() -> Self {
        Self::Ready
    }
}

/// Maps a world-space position to tile coordinates by floored division, so
/// negative positions land one tile to the left/top instead of being
/// truncated onto tile zero. The caller clamps the result before use; the
/// board operations clamp again defensively.
pub fn position_to_tile(position: (i32, i32), tile_size: i32) -> (i32, i32) {
    (
        position.0.div_euclid(tile_size),
        position.1.div_euclid(tile_size),
    )
}

/// The playing field: owns the tile grid and is the only mutator of tile
/// state. A renderer only ever reads tiles back out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Tile>,
    generator: Option<RandomGridGenerator>,
    phase: BoardPhase,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Creates a board with a random layout. The configuration is clamped
    /// before use.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let config = BoardConfig::new(config.size, config.bombs);
        let mut generator = RandomGridGenerator::new(seed);
        let grid = generator.generate(config);
        Self {
            config,
            grid,
            generator: Some(generator),
            phase: BoardPhase::default(),
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    /// Creates a board with bombs at exactly the given coordinates. Scripted
    /// boards keep their layout: safe-first-click re-rolling is disabled.
    pub fn with_bomb_layout(size: Coord2, bombs: &[Coord2]) -> Result<Self> {
        let grid = grid_from_bomb_coords(size, bombs)?;
        let bomb_count = grid.iter().filter(|tile| tile.is_bomb()).count() as CellCount;
        Ok(Self {
            config: BoardConfig::new_unchecked(size, bomb_count),
            grid,
            generator: None,
            phase: BoardPhase::default(),
            revealed_count: 0,
            flagged_count: 0,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn total_bombs(&self) -> CellCount {
        self.config.bombs
    }

    /// Bombs not yet flagged, may go negative when the player over-flags.
    pub fn bombs_left(&self) -> isize {
        (self.config.bombs as isize) - (self.flagged_count as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn tile_at(&self, coords: Coord2) -> &Tile {
        &self.grid[self.clamp_inside(coords).idx()]
    }

    /// Read-only view of every tile, for rendering.
    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.iter()
    }

    /// Clamps a mapped tile position into the board, mirroring
    /// [`position_to_tile`] on the input side.
    pub fn clamp_coords(&self, (x, y): (i32, i32)) -> Coord2 {
        let (w, h) = self.config.size;
        (
            x.clamp(0, w as i32 - 1) as Coord,
            y.clamp(0, h as i32 - 1) as Coord,
        )
    }

    /// Re-rolls the layout (scripted boards keep theirs) and starts a fresh
    /// session on it.
    pub fn reset(&mut self) {
        self.phase = BoardPhase::Ready;
        self.revealed_count = 0;
        self.flagged_count = 0;
        match self.generator.as_mut() {
            Some(generator) => self.grid = generator.generate(self.config),
            None => {
                for tile in self.grid.iter_mut() {
                    tile.clear_marks();
                }
            }
        }
    }

    /// Re-rolls the layout until the target cell opens a zero region, so the
    /// first click can neither lose nor reveal a lone number.
    ///
    /// Unlike the in-play operations this one fails loudly: when the bomb
    /// density leaves no room for a zero-neighbor cell, or the attempt cap is
    /// hit, it returns [`GameError::GenerationExhausted`] instead of looping
    /// forever. Runs synchronously, so a degenerate configuration stalls the
    /// calling frame rather than corrupting state.
    pub fn ensure_safe_first_click(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.clamp_inside(coords);

        if !self.phase.is_ready() {
            return Ok(());
        }
        let Some(generator) = self.generator.as_mut() else {
            return Ok(());
        };

        // A zero-number start needs the click cell and its whole neighborhood
        // free of bombs; a corner click frees the fewest cells (two on a
        // single-row board, four otherwise).
        let corner_block = 1 + neighbors((0, 0), self.config.size).count() as CellCount;
        if self.config.bombs > self.config.total_cells().saturating_sub(corner_block) {
            log::warn!(
                "{} bombs in {} cells leave no possible zero-neighbor start",
                self.config.bombs,
                self.config.total_cells()
            );
            return Err(GameError::GenerationExhausted);
        }

        let mut attempts: u32 = 0;
        loop {
            let tile = &self.grid[coords.idx()];
            if tile.kind() == TileKind::Empty && tile.number() == 0 {
                if attempts > 0 {
                    log::debug!("safe start at {coords:?} found after {attempts} re-rolls");
                }
                return Ok(());
            }
            if attempts >= MAX_GENERATION_ATTEMPTS {
                log::warn!("gave up on a safe start at {coords:?} after {attempts} re-rolls");
                return Err(GameError::GenerationExhausted);
            }
            self.grid = generator.generate(self.config);
            // the fresh grid carries no marks, so any pre-click flags go with it
            self.flagged_count = 0;
            attempts += 1;
        }
    }

    /// Reveals the tile at `coords`.
    ///
    /// The first reveal of a random session runs the safe-first-click loop
    /// before touching the grid. Flagged and already-revealed tiles are
    /// silent no-ops, a bomb loses the game, a zero opens its region.
    pub fn reveal_at(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.clamp_inside(coords);

        if self.phase.is_finished() || !self.grid[coords.idx()].can_interact() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.phase.is_ready() {
            self.ensure_safe_first_click(coords)?;
        }

        let tile = self.grid[coords.idx()];
        if tile.is_flagged() || tile.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = match tile.kind() {
            TileKind::Bomb => {
                self.boom(coords);
                RevealOutcome::HitBomb
            }
            TileKind::Empty if tile.number() == 0 => {
                self.flood_reveal(VecDeque::from([coords]), false)?
            }
            TileKind::Empty => {
                self.reveal_single(coords);
                RevealOutcome::Revealed
            }
            TileKind::Undefined => return Err(GameError::UndefinedKind),
        };

        Ok(self.finish_reveal(outcome))
    }

    /// Toggles the flag on an unrevealed tile. Flags block [`Self::reveal_at`]
    /// until removed.
    pub fn flag_at(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.clamp_inside(coords);

        if self.phase.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let tile = &mut self.grid[coords.idx()];
        if !tile.can_interact() || tile.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }

        if tile.is_flagged() {
            tile.set_flag(false);
            self.flagged_count -= 1;
        } else {
            tile.set_flag(true);
            tile.set_question(false);
            self.flagged_count += 1;
        }
        Ok(MarkOutcome::Changed)
    }

    /// Toggles the cosmetic question mark on an unrevealed tile. Unlike a
    /// flag it never blocks a reveal.
    pub fn question_at(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.clamp_inside(coords);

        if self.phase.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let tile = &mut self.grid[coords.idx()];
        if !tile.can_interact() || tile.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }

        if tile.is_questioned() {
            tile.set_question(false);
        } else {
            tile.set_question(true);
            if tile.is_flagged() {
                tile.set_flag(false);
                self.flagged_count -= 1;
            }
        }
        Ok(MarkOutcome::Changed)
    }

    /// Whether a chord at `coords` would currently reveal anything, for
    /// pressed-state feedback in a frontend.
    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        let coords = self.clamp_inside(coords);
        if self.phase.is_finished() {
            return false;
        }

        let tile = self.grid[coords.idx()];
        tile.is_revealed()
            && !tile.is_bomb()
            && tile.number() != 0
            && self.count_flagged_neighbors(coords) == tile.number()
    }

    /// Reveals all unflagged neighbors of a revealed numbered tile, valid
    /// only when its flagged-neighbor count matches its number. A mismatched
    /// count is a silent no-op; a wrongly placed flag loses the game.
    pub fn chord_at(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.clamp_inside(coords);

        if self.phase.is_finished() || !self.grid[coords.idx()].can_interact() {
            return Ok(RevealOutcome::NoChange);
        }

        let tile = self.grid[coords.idx()];
        if !tile.is_revealed() || tile.is_bomb() || tile.number() == 0 {
            return Ok(RevealOutcome::NoChange);
        }
        if self.count_flagged_neighbors(coords) != tile.number() {
            return Ok(RevealOutcome::NoChange);
        }

        let seeds: VecDeque<Coord2> = neighbors(coords, self.config.size)
            .filter(|&pos| {
                let neighbor = &self.grid[pos.idx()];
                !neighbor.is_revealed() && !neighbor.is_flagged()
            })
            .collect();

        let outcome = self.flood_reveal(seeds, true)?;
        Ok(self.finish_reveal(outcome))
    }

    /// Recomputes the cached sprite region of every tile. Purely derived
    /// data, cheap enough to run every frame.
    pub fn refresh_sprites(&mut self) -> Result<()> {
        for tile in self.grid.iter_mut() {
            let index = sprite_index(tile)?;
            tile.set_sprite(index);
        }
        Ok(())
    }

    /// Work-queue flood fill: opens the connected zero region reachable from
    /// the seeds plus its bordering numbered ring. An explicit queue instead
    /// of recursion keeps the memory bound at board area.
    fn flood_reveal(
        &mut self,
        mut to_visit: VecDeque<Coord2>,
        chord_mode: bool,
    ) -> Result<RevealOutcome> {
        let size = self.config.size;
        let mut outcome = RevealOutcome::NoChange;
        let mut visited = BTreeSet::new();

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let tile = self.grid[coords.idx()];
            if tile.is_revealed() || tile.is_flagged() {
                continue;
            }

            if tile.is_bomb() {
                if chord_mode {
                    log::debug!("chord reveal hit a bomb at {coords:?}");
                    self.boom(coords);
                    return Ok(RevealOutcome::HitBomb);
                }
                // A zero region can never border a bomb, so reaching one here
                // means the generated numbers are wrong.
                return Err(GameError::GridCorrupted);
            }

            self.reveal_single(coords);
            outcome = outcome | RevealOutcome::Revealed;
            log::trace!("flood revealed {coords:?} (number {})", tile.number());

            if tile.number() == 0 {
                to_visit.extend(
                    neighbors(coords, size)
                        .filter(|&pos| !self.grid[pos.idx()].is_revealed())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        Ok(outcome)
    }

    fn reveal_single(&mut self, coords: Coord2) {
        self.grid[coords.idx()].force_reveal();
        self.revealed_count += 1;
    }

    /// Promotes a successful reveal into a win or an active session.
    fn finish_reveal(&mut self, outcome: RevealOutcome) -> RevealOutcome {
        if !matches!(outcome, RevealOutcome::Revealed) {
            return outcome;
        }

        if self.revealed_count == self.config.safe_cells() {
            self.end_won();
            RevealOutcome::Won
        } else {
            if self.phase.is_ready() {
                self.phase = BoardPhase::Active;
            }
            outcome
        }
    }

    /// Loss: the trigger tile explodes, everything is shown, the whole board
    /// stops accepting interaction.
    fn boom(&mut self, trigger: Coord2) {
        self.grid[trigger.idx()].mark_exploded();
        for tile in self.grid.iter_mut() {
            tile.force_reveal();
            tile.lock();
        }
        self.revealed_count = self.config.total_cells();
        self.phase = BoardPhase::Lost;
        log::debug!("bomb at {trigger:?} ended the game");
    }

    /// Win: remaining bombs get flagged for the player and the board locks.
    fn end_won(&mut self) {
        for tile in self.grid.iter_mut() {
            if tile.is_bomb() && !tile.is_flagged() {
                tile.set_flag(true);
                self.flagged_count += 1;
            }
            tile.lock();
        }
        self.phase = BoardPhase::Won;
        log::debug!("all safe tiles revealed, game won");
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.config.size)
            .filter(|&pos| self.grid[pos.idx()].is_flagged())
            .count() as u8
    }

    fn clamp_inside(&self, (x, y): Coord2) -> Coord2 {
        let (w, h) = self.config.size;
        (x.min(w - 1), y.min(h - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(size: Coord2, bombs: &[Coord2]) -> Board {
        Board::with_bomb_layout(size, bombs).unwrap()
    }

    #[test]
    fn position_mapping_floors_negative_positions() {
        assert_eq!(position_to_tile((47, 48), 48), (0, 1));
        assert_eq!(position_to_tile((96, 0), 48), (2, 0));
        assert_eq!(position_to_tile((-1, -49), 48), (-1, -2));
    }

    #[test]
    fn clamp_coords_pins_mapped_positions_to_the_board() {
        let board = scripted((3, 3), &[]);
        assert_eq!(board.clamp_coords((-4, 1)), (0, 1));
        assert_eq!(board.clamp_coords((7, 9)), (2, 2));
    }

    #[test]
    fn zero_reveal_opens_region_and_ring_only() {
        // bombs in opposite corners; (0,2) sits in a zero pocket
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);

        let outcome = board.reveal_at((0, 2)).unwrap();
        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(board.phase(), BoardPhase::Active);

        for coords in [(0, 2), (0, 1), (1, 1), (1, 2)] {
            assert!(board.tile_at(coords).is_revealed(), "{coords:?}");
        }
        for coords in [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)] {
            assert!(!board.tile_at(coords).is_revealed(), "{coords:?}");
        }
    }

    #[test]
    fn numbered_reveal_opens_a_single_tile() {
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(board.reveal_at((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert!(board.tile_at((1, 1)).is_revealed());
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flag_blocks_reveal_until_removed() {
        let mut board = scripted((2, 2), &[(0, 0)]);

        board.flag_at((1, 1)).unwrap();
        assert_eq!(board.reveal_at((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert!(!board.tile_at((1, 1)).is_revealed());

        board.flag_at((1, 1)).unwrap();
        assert_eq!(board.reveal_at((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert!(board.tile_at((1, 1)).is_revealed());
    }

    #[test]
    fn question_marks_are_cosmetic() {
        let mut board = scripted((2, 2), &[(0, 0)]);

        board.question_at((1, 1)).unwrap();
        assert!(board.tile_at((1, 1)).is_questioned());

        // a question mark does not block revealing
        assert_eq!(board.reveal_at((1, 1)).unwrap(), RevealOutcome::Revealed);
    }

    #[test]
    fn questioning_a_flag_replaces_it() {
        let mut board = scripted((2, 2), &[(0, 0)]);

        board.flag_at((0, 1)).unwrap();
        assert_eq!(board.bombs_left(), 0);

        board.question_at((0, 1)).unwrap();
        let tile = board.tile_at((0, 1));
        assert!(tile.is_questioned());
        assert!(!tile.is_flagged());
        assert_eq!(board.bombs_left(), 1);
    }

    #[test]
    fn chord_with_matching_flags_reveals_neighbors() {
        let mut board = scripted((3, 3), &[(0, 1), (2, 1)]);

        board.reveal_at((1, 1)).unwrap();
        assert_eq!(board.tile_at((1, 1)).number(), 2);
        board.flag_at((0, 1)).unwrap();
        board.flag_at((2, 1)).unwrap();

        assert!(board.can_chord_at((1, 1)));
        let outcome = board.chord_at((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert!(board.tile_at((1, 0)).is_revealed());
        assert!(board.tile_at((1, 2)).is_revealed());
    }

    #[test]
    fn chord_with_wrong_flag_count_changes_nothing() {
        let mut board = scripted((3, 3), &[(0, 1), (2, 1)]);

        board.reveal_at((1, 1)).unwrap();
        board.flag_at((0, 1)).unwrap();

        assert!(!board.can_chord_at((1, 1)));
        assert_eq!(board.chord_at((1, 1)).unwrap(), RevealOutcome::NoChange);
        for coords in [(0, 0), (1, 0), (2, 0), (0, 2), (1, 2), (2, 2)] {
            assert!(!board.tile_at(coords).is_revealed(), "{coords:?}");
        }
    }

    #[test]
    fn chord_over_a_misplaced_flag_loses() {
        let mut board = scripted((3, 3), &[(0, 1), (2, 1)]);

        board.reveal_at((1, 1)).unwrap();
        // right count, one flag on a safe tile
        board.flag_at((0, 0)).unwrap();
        board.flag_at((2, 1)).unwrap();

        assert_eq!(board.chord_at((1, 1)).unwrap(), RevealOutcome::HitBomb);
        assert_eq!(board.phase(), BoardPhase::Lost);
        assert!(board.tile_at((0, 1)).has_exploded());
    }

    #[test]
    fn revealing_a_bomb_locks_and_shows_the_whole_board() {
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(board.reveal_at((0, 0)).unwrap(), RevealOutcome::HitBomb);
        assert_eq!(board.phase(), BoardPhase::Lost);
        assert!(board.tile_at((0, 0)).has_exploded());
        assert!(!board.tile_at((2, 2)).has_exploded());
        assert!(board.iter_tiles().all(|t| t.is_revealed() && !t.can_interact()));

        // the dead board ignores everything
        assert_eq!(board.reveal_at((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board.flag_at((1, 1)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(board.chord_at((1, 1)).unwrap(), RevealOutcome::NoChange);
    }

    #[test]
    fn loss_counts_every_tile_as_revealed() {
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);
        board.reveal_at((1, 1)).unwrap();
        board.reveal_at((0, 0)).unwrap();

        assert_eq!(board.revealed_count(), board.config().total_cells());
    }

    #[test]
    fn revealing_every_safe_tile_wins() {
        let mut board = scripted((2, 1), &[(0, 0)]);

        assert_eq!(board.reveal_at((1, 0)).unwrap(), RevealOutcome::Won);
        assert_eq!(board.phase(), BoardPhase::Won);
        // the leftover bomb gets flagged for the player
        assert!(board.tile_at((0, 0)).is_flagged());
        assert_eq!(board.bombs_left(), 0);
        assert_eq!(board.flag_at((0, 0)).unwrap(), MarkOutcome::NoChange);
    }

    #[test]
    fn first_click_always_opens_a_zero_region() {
        for seed in 0..20 {
            let mut board = Board::new(BoardConfig::new((9, 9), 10), seed);
            let outcome = board.reveal_at((4, 4)).unwrap();
            assert!(matches!(
                outcome,
                RevealOutcome::Revealed | RevealOutcome::Won
            ));
            let tile = board.tile_at((4, 4));
            assert_eq!(tile.kind(), TileKind::Empty);
            assert_eq!(tile.number(), 0);
            assert!(tile.is_revealed());
        }
    }

    #[test]
    fn safe_start_rerolls_keep_the_bomb_counter_in_sync() {
        let mut board = Board::new(BoardConfig::new((9, 9), 30), 0);
        board.flag_at((0, 0)).unwrap();

        // the first reveal may re-roll the layout, dropping the flag with it
        board.reveal_at((4, 4)).unwrap();

        let flags = board.iter_tiles().filter(|t| t.is_flagged()).count();
        assert_eq!(board.bombs_left(), 30 - flags as isize);
    }

    #[test]
    fn safe_start_works_on_single_row_boards() {
        // a corner on a 1xN board only blocks two cells, so one bomb in four
        // cells still leaves room for a zero start
        let mut board = Board::new(BoardConfig::new((4, 1), 1), 0);
        board.ensure_safe_first_click((0, 0)).unwrap();

        let tile = board.tile_at((0, 0));
        assert_eq!(tile.kind(), TileKind::Empty);
        assert_eq!(tile.number(), 0);
    }

    #[test]
    fn explicit_safe_start_matches_the_reveal_path() {
        let mut board = Board::new(BoardConfig::new((9, 9), 10), 3);
        board.ensure_safe_first_click((0, 0)).unwrap();
        let tile = board.tile_at((0, 0));
        assert_eq!(tile.kind(), TileKind::Empty);
        assert_eq!(tile.number(), 0);
    }

    #[test]
    fn impossible_safe_start_fails_instead_of_hanging() {
        // a 1x1 board with its single cell mined has no safe cell at all
        let mut board = Board::new(BoardConfig::new((1, 1), 1), 0);
        assert_eq!(
            board.reveal_at((0, 0)),
            Err(GameError::GenerationExhausted)
        );

        let mut dense = Board::new(BoardConfig::new((4, 4), 14), 0);
        assert_eq!(
            dense.ensure_safe_first_click((1, 1)),
            Err(GameError::GenerationExhausted)
        );
    }

    #[test]
    fn scripted_boards_never_reroll() {
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);
        board.ensure_safe_first_click((1, 1)).unwrap();
        // layout untouched even though (1, 1) is a numbered tile
        assert!(board.tile_at((0, 0)).is_bomb());
        assert_eq!(board.tile_at((1, 1)).number(), 2);
    }

    #[test]
    fn interactions_clamp_out_of_range_coords() {
        let mut board = scripted((3, 3), &[(0, 0)]);
        // clamps onto (2, 2), a zero tile away from the bomb
        assert_eq!(board.reveal_at((40, 200)).unwrap(), RevealOutcome::Won);
    }

    #[test]
    fn reset_starts_a_fresh_session() {
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);
        board.reveal_at((0, 0)).unwrap();
        assert_eq!(board.phase(), BoardPhase::Lost);

        board.reset();
        assert_eq!(board.phase(), BoardPhase::Ready);
        assert_eq!(board.revealed_count(), 0);
        assert!(board.iter_tiles().all(|t| !t.is_revealed() && t.can_interact()));
        assert!(board.tile_at((0, 0)).is_bomb());
    }

    #[test]
    fn sprites_reflect_the_lost_board() {
        let mut board = scripted((3, 3), &[(0, 0), (2, 2)]);
        board.flag_at((2, 2)).unwrap();
        board.reveal_at((0, 0)).unwrap();
        board.refresh_sprites().unwrap();

        assert_eq!(board.tile_at((0, 0)).sprite(), 6); // the trigger
        assert_eq!(board.tile_at((2, 2)).sprite(), 2); // flagged bomb
        assert_eq!(board.tile_at((1, 1)).sprite(), 7 + 2); // number two
        assert_eq!(board.tile_at((0, 2)).sprite(), 0); // open zero
    }

    #[test]
    fn snapshot_round_trips_mid_game() {
        let mut board = scripted((3, 3), &[(0, 1), (2, 1)]);
        board.reveal_at((1, 1)).unwrap();
        board.flag_at((0, 1)).unwrap();
        board.question_at((2, 2)).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let mut restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);

        // the restored board keeps playing
        restored.flag_at((2, 1)).unwrap();
        restored.question_at((2, 2)).unwrap();
        assert_eq!(restored.chord_at((1, 1)).unwrap(), RevealOutcome::Won);
    }
}
