use alloc::vec::Vec;

use super::*;

/// Uniform placement: every combination of `mines` cells is equally likely.
///
/// The same seed and config always produce the same grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGenerator {
    seed: u64,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the wall clock, for games that do not need to be replayed.
    pub fn unseeded() -> Self {
        let seed = web_time::SystemTime::now()
            .duration_since(web_time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        log::trace!("Clock seed: {}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // partial Fisher-Yates, the first `mines` slots end up holding the chosen cells
        let mut cell_indices: Vec<CellCount> = (0..total_cells).collect();
        for slot in 0..config.mines() {
            let pick = rng.random_range(slot..total_cells);
            cell_indices.swap(slot as usize, pick as usize);
        }

        let mut mine_mask: Array2<bool> =
            Array2::default([usize::from(config.rows()), usize::from(config.columns())]);
        for &index in &cell_indices[..config.mines() as usize] {
            let position = Position::from_linear(index as usize, config.columns());
            mine_mask[position.to_nd_index()] = true;
        }

        let grid = Grid::from_cells(derive_cells(&mine_mask));
        log::debug!(
            "Generated {}x{} grid with {} mines from seed {}",
            config.rows(),
            config.columns(),
            grid.mine_count(),
            self.seed
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_positions(grid: &Grid) -> Vec<Position> {
        grid.positions()
            .filter(|&position| grid.cell_at(position).unwrap().has_mine())
            .collect()
    }

    #[test]
    fn places_exact_mine_count() {
        for (rows, columns, mines) in [(1, 1, 0), (3, 3, 8), (9, 9, 10), (16, 30, 99), (1, 40, 39)] {
            for seed in 0..5 {
                let config = GameConfig::new(rows, columns, mines).unwrap();
                let grid = RandomGenerator::new(seed).generate(config);

                assert_eq!(mine_positions(&grid).len(), mines as usize);
                assert_eq!(grid.mine_count(), mines);
                assert_eq!(grid.remaining_safe_cells(), config.safe_cells());
            }
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let config = GameConfig::intermediate();

        let first = RandomGenerator::new(42).generate(config);
        let second = RandomGenerator::new(42).generate(config);
        let other = RandomGenerator::new(43).generate(config);

        assert_eq!(first, second);
        assert_ne!(mine_positions(&first), mine_positions(&other));
    }

    #[test]
    fn every_cell_can_hold_the_mine() {
        let config = GameConfig::new(2, 2, 1).unwrap();
        let mut hits = [0u32; 4];

        for seed in 0..400 {
            let grid = RandomGenerator::new(seed).generate(config);
            let [mine] = mine_positions(&grid)[..] else {
                panic!("expected a single mine");
            };
            hits[mine.to_linear(2)] += 1;
        }

        assert!(hits.iter().all(|&count| count > 50), "skewed placement: {hits:?}");
    }
}
