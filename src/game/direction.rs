use super::grid::GridPosition;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the position one grid cell away from `pos` in this direction.
    /// The result may be off the playfield.
    pub(crate) fn step(self, pos: GridPosition) -> GridPosition {
        match self {
            Direction::Up => pos.offset(0, -1),
            Direction::Down => pos.offset(0, 1),
            Direction::Left => pos.offset(-1, 0),
            Direction::Right => pos.offset(1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, GridPosition::new(400, 300), GridPosition::new(400, 280))]
    #[case(Direction::Down, GridPosition::new(400, 300), GridPosition::new(400, 320))]
    #[case(Direction::Left, GridPosition::new(400, 300), GridPosition::new(380, 300))]
    #[case(Direction::Right, GridPosition::new(400, 300), GridPosition::new(420, 300))]
    #[case(Direction::Up, GridPosition::new(0, 0), GridPosition::new(0, -20))]
    #[case(Direction::Right, GridPosition::new(800, 600), GridPosition::new(820, 600))]
    fn test_step(#[case] d: Direction, #[case] pos: GridPosition, #[case] r: GridPosition) {
        assert_eq!(d.step(pos), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(d.reverse().reverse(), d);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn step_then_reverse_returns(#[case] d: Direction) {
        let pos = GridPosition::new(200, 200);
        assert_eq!(d.reverse().step(d.step(pos)), pos);
    }
}
