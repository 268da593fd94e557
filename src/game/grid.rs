use crate::consts;
use rand::Rng;

/// A position on the playfield, measured in playfield units from the top-left
/// corner.
///
/// Every position produced by spawning or by moving the snake is a multiple of
/// [`GRID_UNIT`][consts::GRID_UNIT] on both axes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct GridPosition {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl GridPosition {
    pub(crate) const fn new(x: i32, y: i32) -> GridPosition {
        GridPosition { x, y }
    }

    /// Return the position `dx` cells to the right of and `dy` cells below
    /// this one
    pub(crate) fn offset(self, dx: i32, dy: i32) -> GridPosition {
        GridPosition {
            x: self.x + dx * consts::GRID_UNIT,
            y: self.y + dy * consts::GRID_UNIT,
        }
    }

    /// Test whether this position lies on the grid
    pub(crate) fn is_aligned(self) -> bool {
        align(self.x, self.y) == self
    }

    /// Test whether two positions are close enough on both axes to count as
    /// touching.  For aligned positions this is the same as equality.
    pub(crate) fn overlaps(self, other: GridPosition) -> bool {
        (self.x - other.x).abs() < consts::COLLISION_TOLERANCE
            && (self.y - other.y).abs() < consts::COLLISION_TOLERANCE
    }

    /// Test whether the position is on the playfield.  Both the far right
    /// and the far bottom edge are still inside.
    pub(crate) fn in_bounds(self) -> bool {
        (0..=consts::PLAYFIELD_WIDTH).contains(&self.x)
            && (0..=consts::PLAYFIELD_HEIGHT).contains(&self.y)
    }

    /// Return the column & row of the cell containing this position, or
    /// `None` if it is off the playfield
    pub(crate) fn cell(self) -> Option<(u16, u16)> {
        if !self.in_bounds() {
            return None;
        }
        let col = u16::try_from(self.x / consts::GRID_UNIT).ok()?;
        let row = u16::try_from(self.y / consts::GRID_UNIT).ok()?;
        Some((col, row))
    }
}

/// Round each axis to the nearest multiple of the grid unit.  Halfway values
/// round towards positive infinity.
pub(crate) fn align(x: i32, y: i32) -> GridPosition {
    GridPosition::new(snap(x), snap(y))
}

fn snap(v: i32) -> i32 {
    v.saturating_add(consts::GRID_UNIT / 2)
        .div_euclid(consts::GRID_UNIT)
        * consts::GRID_UNIT
}

/// Pick a uniformly random grid cell at least `margin_cells` cells away from
/// every edge of the playfield
pub(crate) fn random_cell<R: Rng + ?Sized>(rng: &mut R, margin_cells: i32) -> GridPosition {
    let col = rng.random_range(margin_cells..=consts::GRID_COLUMNS - margin_cells);
    let row = rng.random_range(margin_cells..=consts::GRID_ROWS - margin_cells);
    GridPosition::new(0, 0).offset(col, row)
}
