//! Per-cycle stone and droplet placement.

use crate::config::{DropletPlacement, StoneCount};
use crate::foundation::core::{Grid, GridPoint, Rect};
use crate::foundation::math::Rng64;

const LAYOUT_SALT: u64 = 0x5A4E_5354_4F4E_4553;
const MAX_ATTEMPTS_PER_STONE: u32 = 8;

/// A decorative stone spanning `width x height` cells from its top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stone {
    pub cell: GridPoint,
    pub width: u32,
    pub height: u32,
}

impl Stone {
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.cell.x
            && p.x < self.cell.x + self.width
            && p.y >= self.cell.y
            && p.y < self.cell.y + self.height
    }

    /// Whether the stones come within `margin` cells of each other.
    fn near(&self, other: &Stone, margin: u32) -> bool {
        let (ax0, ay0) = (self.cell.x, self.cell.y);
        let (ax1, ay1) = (ax0 + self.width + margin, ay0 + self.height + margin);
        let (bx0, by0) = (other.cell.x, other.cell.y);
        let (bx1, by1) = (bx0 + other.width + margin, by0 + other.height + margin);
        ax0 < bx1 && bx0 < ax1 && ay0 < by1 && by0 < ay1
    }

    /// Pixel bounds of the stone.
    pub fn rect(&self, grid: Grid) -> Rect {
        let a = grid.cell_rect(self.cell);
        let b = grid.cell_rect(GridPoint::new(
            self.cell.x + self.width - 1,
            self.cell.y + self.height - 1,
        ));
        a.union(b)
    }
}

/// Stones and droplet for one animation cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneLayout {
    pub cycle: u64,
    pub droplet: GridPoint,
    pub stones: Vec<Stone>,
}

impl StoneLayout {
    pub fn stone_at(&self, p: GridPoint) -> bool {
        self.stones.iter().any(|s| s.contains(p))
    }
}

/// Layout for `cycle`: a pure function of its arguments, so a cycle shows one layout
/// throughout and changes only at cycle boundaries.
pub fn seeded_layout(
    cycle: u64,
    seed: u64,
    grid: Grid,
    count: StoneCount,
    placement: DropletPlacement,
) -> StoneLayout {
    let mut rng = Rng64::new(cycle ^ seed.rotate_left(32) ^ LAYOUT_SALT);

    let droplet = match placement {
        DropletPlacement::Centered => grid.center(),
        DropletPlacement::Reseeded => {
            let lo = grid.size / 4;
            let hi = (grid.size * 3 / 4).min(grid.size - 1);
            GridPoint::new(rng.range_inclusive(lo, hi), rng.range_inclusive(lo, hi))
        }
    };

    // Keep a clear pool around the droplet so its first rings are not covered.
    let pool = Stone {
        cell: GridPoint::new(droplet.x.saturating_sub(2), droplet.y.saturating_sub(2)),
        width: 5,
        height: 5,
    };

    let (min, max) = count.bounds();
    let target = rng.range_inclusive(min, max);
    let mut stones: Vec<Stone> = Vec::with_capacity(target as usize);
    let mut attempts = 0;
    while (stones.len() as u32) < target && attempts < target * MAX_ATTEMPTS_PER_STONE {
        attempts += 1;
        let width = rng.range_inclusive(1, 2);
        let height = rng.range_inclusive(1, 2);
        if grid.size < width + 2 || grid.size < height + 2 {
            continue;
        }
        let stone = Stone {
            cell: GridPoint::new(
                rng.range_inclusive(1, grid.size - 1 - width),
                rng.range_inclusive(1, grid.size - 1 - height),
            ),
            width,
            height,
        };
        if stone.near(&pool, 0) || stones.iter().any(|s| stone.near(s, 1)) {
            continue;
        }
        stones.push(stone);
    }

    StoneLayout {
        cycle,
        droplet,
        stones,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
