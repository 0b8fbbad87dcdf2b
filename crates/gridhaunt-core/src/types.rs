//! Fundamental grid and simulation types.

use serde::{Deserialize, Serialize};

/// Identity of an agent within its pool. Assigned monotonically, never reused
/// within a session.
pub type AgentId = u32;

/// Integer tile coordinate. x grows to the right, y grows upward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle of cells: `origin` inclusive, `origin + size` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub origin: GridCell,
    pub width: u32,
    pub height: u32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl GridCell {
    /// Neighbor offsets in heuristic enumeration order: up, down, left, right.
    pub const DIRECTIONS: [GridCell; 4] = [
        GridCell::new(0, 1),
        GridCell::new(0, -1),
        GridCell::new(-1, 0),
        GridCell::new(1, 0),
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by `offset`.
    pub fn offset(self, offset: GridCell) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// The four axis-aligned neighbors, in `DIRECTIONS` order.
    pub fn neighbors(self) -> [GridCell; 4] {
        Self::DIRECTIONS.map(|dir| self.offset(dir))
    }

    /// Euclidean distance between cell coordinates.
    pub fn distance_to(&self, other: &GridCell) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl GridBounds {
    pub fn new(origin: GridCell, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Bounds anchored at (0, 0).
    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(GridCell::default(), width, height)
    }

    /// Half-open x range. Saturates at `i32::MAX` for bounds that do not fit.
    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.origin.x..saturating_end(self.origin.x, self.width)
    }

    /// Half-open y range. Saturates at `i32::MAX` for bounds that do not fit.
    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.origin.y..saturating_end(self.origin.y, self.height)
    }

    /// True iff both exclusive ends are representable as `i32`.
    pub fn fits_coordinates(&self) -> bool {
        checked_end(self.origin.x, self.width).is_some()
            && checked_end(self.origin.y, self.height).is_some()
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.x_range().contains(&cell.x) && self.y_range().contains(&cell.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

fn checked_end(start: i32, len: u32) -> Option<i32> {
    i32::try_from(len).ok().and_then(|len| start.checked_add(len))
}

fn saturating_end(start: i32, len: u32) -> i32 {
    checked_end(start, len).unwrap_or(i32::MAX)
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::sized(
            crate::constants::DEFAULT_GRID_SIZE,
            crate::constants::DEFAULT_GRID_SIZE,
        )
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
