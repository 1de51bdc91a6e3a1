use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

pub const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Lays the snake out behind `head`, opposite to `direction`.
    pub fn new(head: Point, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| Point::new(head.x - dx * i, head.y - dy * i))
            .collect();
        Self::from_body(body)
    }

    pub(super) fn from_body(body: VecDeque<Point>) -> Self {
        assert!(!body.is_empty(), "Snake body should never be empty");
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub(super) fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub(super) fn pop_tail(&mut self) -> Point {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
        tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lays_out_behind_head() {
        let snake = Snake::new(Point::new(5, 2), Direction::Right);
        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(5, 2), Point::new(4, 2), Point::new(3, 2)]
        );
        assert_eq!(snake.head(), Point::new(5, 2));
        assert_eq!(snake.tail(), Point::new(3, 2));
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::new(Point::new(5, 2), Direction::Right);
        snake.push_head(Point::new(6, 2));
        assert!(snake.contains(&Point::new(6, 2)));
        assert_eq!(snake.len(), 4);

        let tail = snake.pop_tail();
        assert_eq!(tail, Point::new(3, 2));
        assert!(!snake.contains(&tail));
        assert_eq!(snake.len(), 3);
    }
}
