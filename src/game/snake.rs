use super::direction::Direction;
use super::grid::GridPosition;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// Positions are in playfield units.  The snake is never shorter than its
/// head.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: GridPosition,

    /// The positions of the cells in the snake's body, with the segment
    /// directly behind the head at the front
    pub(super) body: VecDeque<GridPosition>,
}

impl Snake {
    /// Create a new snake with its head at `head` and `body_len` body
    /// segments trailing straight behind it, as though it had been moving in
    /// `heading`.
    pub(super) fn new(head: GridPosition, heading: Direction, body_len: usize) -> Snake {
        let behind = heading.reverse();
        let body = std::iter::successors(Some(behind.step(head)), |&p| Some(behind.step(p)))
            .take(body_len)
            .collect();
        Snake { head, body }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> GridPosition {
        self.head
    }

    /// Return the positions of the cells in the snake's body, nearest the
    /// head first
    pub(crate) fn body(&self) -> &VecDeque<GridPosition> {
        &self.body
    }

    /// Number of segments, counting the head
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Move the head one cell in `direction`, with every body segment moving
    /// into the place of the segment ahead of it.  Returns the position the
    /// head moved out of.
    ///
    /// The segment count is unchanged and no allocation takes place.
    pub(super) fn advance(&mut self, direction: Direction) -> GridPosition {
        let previous = self.head;
        if self.body.pop_back().is_some() {
            self.body.push_front(previous);
        }
        self.head = direction.step(previous);
        debug_assert!(self.head.is_aligned(), "snake head left the grid");
        previous
    }

    /// Add a segment to the end of the tail at `pos`
    pub(super) fn grow(&mut self, pos: GridPosition) {
        self.body.push_back(pos);
    }

    /// Test whether `pos` touches any body segment (the head excluded)
    pub(super) fn occupies_own_body(&self, pos: GridPosition) -> bool {
        self.body.iter().any(|&seg| seg.overlaps(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn starting_snake() -> Snake {
        Snake::new(GridPosition::new(400, 300), Direction::Right, 3)
    }

    #[test]
    fn new_snake_trails_behind_head() {
        let snake = starting_snake();
        assert_eq!(snake.head(), GridPosition::new(400, 300));
        assert_eq!(
            snake.body(),
            &VecDeque::from([
                GridPosition::new(380, 300),
                GridPosition::new(360, 300),
                GridPosition::new(340, 300),
            ])
        );
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn advance_shifts_segments() {
        let mut snake = starting_snake();
        let previous = snake.advance(Direction::Right);
        assert_eq!(previous, GridPosition::new(400, 300));
        assert_eq!(snake.head(), GridPosition::new(420, 300));
        assert_eq!(
            snake.body(),
            &VecDeque::from([
                GridPosition::new(400, 300),
                GridPosition::new(380, 300),
                GridPosition::new(360, 300),
            ])
        );
    }

    #[test]
    fn advance_keeps_every_segment_behind_its_leader() {
        let mut snake = starting_snake();
        for d in [
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Left,
        ] {
            let before = snake.clone();
            let previous = snake.advance(d);
            assert_eq!(previous, before.head);
            assert_eq!(snake.head, d.step(before.head));
            assert_eq!(snake.body[0], before.head);
            for i in 1..snake.body.len() {
                assert_eq!(snake.body[i], before.body[i - 1]);
            }
            assert_eq!(snake.len(), before.len());
        }
    }

    #[test]
    fn advance_does_not_allocate() {
        let mut snake = starting_snake();
        let capacity = snake.body.capacity();
        for _ in 0..20 {
            snake.advance(Direction::Down);
        }
        assert_eq!(snake.body.capacity(), capacity);
    }

    #[test]
    fn headless_body_advances() {
        let mut snake = Snake::new(GridPosition::new(100, 100), Direction::Up, 0);
        assert_eq!(snake.advance(Direction::Up), GridPosition::new(100, 100));
        assert_eq!(snake.head(), GridPosition::new(100, 80));
        assert!(snake.body().is_empty());
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn grow_appends_tail() {
        let mut snake = starting_snake();
        let previous = snake.advance(Direction::Right);
        snake.grow(previous);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.body().back(), Some(&GridPosition::new(400, 300)));
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 5);
        assert_eq!(
            snake.body(),
            &VecDeque::from([
                GridPosition::new(420, 300),
                GridPosition::new(400, 300),
                GridPosition::new(380, 300),
                GridPosition::new(360, 300),
            ])
        );
    }

    #[test]
    fn occupies_own_body() {
        let snake = starting_snake();
        assert!(snake.occupies_own_body(GridPosition::new(360, 300)));
        assert!(!snake.occupies_own_body(GridPosition::new(400, 300)));
        assert!(!snake.occupies_own_body(GridPosition::new(360, 320)));
    }

    #[test]
    fn running_into_own_body() {
        let mut snake = Snake::new(GridPosition::new(400, 300), Direction::Right, 4);
        for d in [Direction::Up, Direction::Left] {
            snake.advance(d);
            assert!(!snake.occupies_own_body(snake.head()));
        }
        snake.advance(Direction::Down);
        assert_eq!(snake.head(), GridPosition::new(380, 300));
        assert!(snake.occupies_own_body(snake.head()));
    }
}
