use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit vector in board coordinates, y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Watermelon,
    Mango,
    Tomato,
    Apple,
    Coconut,
}

impl FoodType {
    pub const ALL: [FoodType; 5] = [
        FoodType::Watermelon,
        FoodType::Mango,
        FoodType::Tomato,
        FoodType::Apple,
        FoodType::Coconut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Watermelon => "watermelon",
            FoodType::Mango => "mango",
            FoodType::Tomato => "tomato",
            FoodType::Apple => "apple",
            FoodType::Coconut => "coconut",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    pub food_type: FoodType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakePart {
    Head,
    Body,
    Tail,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Snake(SnakePart),
    Food(FoodType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    /// A horizontal three segment snake needs at least this many cells per side.
    pub const MIN_SIDE: usize = 3;
    /// Keeps the board allocation bounded.
    pub const MAX_SIDE: usize = 1000;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&self.width)
            && (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateGameError {
    InvalidSize { width: usize, height: usize },
}

impl fmt::Display for CreateGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateGameError::InvalidSize { width, height } => write!(
                f,
                "Field {}x{} is invalid, both sides must be between {} and {}",
                width,
                height,
                FieldSize::MIN_SIDE,
                FieldSize::MAX_SIDE
            ),
        }
    }
}

impl std::error::Error for CreateGameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::from_token("up"), Some(Direction::Up));
        assert_eq!(Direction::from_token("down"), Some(Direction::Down));
        assert_eq!(Direction::from_token("left"), Some(Direction::Left));
        assert_eq!(Direction::from_token("right"), Some(Direction::Right));
        assert_eq!(Direction::from_token("UP"), None);
        assert_eq!(Direction::from_token("diagonal"), None);
        assert_eq!(Direction::from_token(""), None);
    }

    #[test]
    fn test_direction_deltas_match_tokens() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }

    #[test]
    fn test_field_contains() {
        let field = FieldSize::new(5, 4);
        assert!(field.contains(Point::new(0, 0)));
        assert!(field.contains(Point::new(4, 3)));
        assert!(!field.contains(Point::new(5, 0)));
        assert!(!field.contains(Point::new(0, 4)));
        assert!(!field.contains(Point::new(-1, 2)));
    }

    #[test]
    fn test_field_validity() {
        assert!(FieldSize::new(3, 3).is_valid());
        assert!(!FieldSize::new(2, 10).is_valid());
        assert!(!FieldSize::new(10, 2).is_valid());
        assert!(!FieldSize::new(0, 0).is_valid());
        assert!(FieldSize::new(FieldSize::MAX_SIDE, FieldSize::MAX_SIDE).is_valid());
        assert!(!FieldSize::new(FieldSize::MAX_SIDE + 1, 10).is_valid());
        assert!(!FieldSize::new(10, 1 << 20).is_valid());
    }
}
