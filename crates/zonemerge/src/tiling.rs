//! Random rectilinear tilings (row runs on a cell grid + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests and benches: sets of
//!   non-overlapping rectangles with plenty of shared edges, holes, and
//!   separate components.
//!
//! Model
//! - Fill a `cols × rows` grid with probability `fill` per cell.
//! - Remove pinches: a 2×2 window holding exactly one diagonal pair gets its
//!   top-right cell filled, repeated until no window is pinched. The union is
//!   then bounded by disjoint simple loops.
//! - Cut every row's filled runs into segments of length `1..=max_run`; each
//!   segment becomes one rectangle. Output order is shuffled.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geom::Rect;

/// Grid and run-length parameters for `draw_tiling`.
#[derive(Clone, Copy, Debug)]
pub struct TilingCfg {
    pub cols: usize,
    pub rows: usize,
    /// Side length of one grid cell. Clamped to at least 1.
    pub cell: i64,
    /// Probability that a cell is filled before pinch removal. Clamped to [0, 1].
    pub fill: f64,
    /// Longest horizontal segment, in cells. Clamped to at least 1.
    pub max_run: usize,
}

impl Default for TilingCfg {
    fn default() -> Self {
        Self {
            cols: 12,
            rows: 12,
            cell: 4,
            fill: 0.6,
            max_run: 4,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn remove_pinches(grid: &mut [Vec<bool>]) {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..rows.saturating_sub(1) {
            for x in 0..cols.saturating_sub(1) {
                let (tl, tr) = (grid[y][x], grid[y][x + 1]);
                let (bl, br) = (grid[y + 1][x], grid[y + 1][x + 1]);
                if (tl && br && !tr && !bl) || (tr && bl && !tl && !br) {
                    let fix = if tr { (y, x) } else { (y, x + 1) };
                    grid[fix.0][fix.1] = true;
                    changed = true;
                }
            }
        }
    }
}

/// Draw a random tiling. Rectangles never overlap and all have positive area.
pub fn draw_tiling(cfg: TilingCfg, tok: ReplayToken) -> Vec<Rect> {
    let mut rng = tok.to_std_rng();
    let cell = cfg.cell.max(1);
    let fill = cfg.fill.clamp(0.0, 1.0);
    let max_run = cfg.max_run.max(1);

    let mut grid: Vec<Vec<bool>> = (0..cfg.rows)
        .map(|_| (0..cfg.cols).map(|_| rng.gen_bool(fill)).collect())
        .collect();
    remove_pinches(&mut grid);

    let mut rects = Vec::new();
    for (y, row) in grid.iter().enumerate() {
        let mut x = 0;
        while x < row.len() {
            if !row[x] {
                x += 1;
                continue;
            }
            let budget = rng.gen_range(1..=max_run);
            let mut len = 0;
            while x + len < row.len() && row[x + len] && len < budget {
                len += 1;
            }
            rects.push(Rect::new(
                x as i64 * cell,
                y as i64 * cell,
                len as i64 * cell,
                cell,
            ));
            x += len;
        }
    }
    rects.shuffle(&mut rng);
    rects
}
