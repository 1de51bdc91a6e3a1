mod board;
mod game_state;
mod snake;
mod snapshot;
mod types;

pub use board::Board;
pub use game_state::{SnakeGameState, TickOutcome};
pub use snake::{INITIAL_SNAKE_LENGTH, Snake};
pub use snapshot::{CellKind, CellView, GameSnapshot};
pub use types::{
    Cell, CreateGameError, DeathReason, Direction, FieldSize, Food, FoodType, Point, SnakePart,
};
