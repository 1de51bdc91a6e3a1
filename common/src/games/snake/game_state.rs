use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::snake::{INITIAL_SNAKE_LENGTH, Snake};
use super::snapshot::GameSnapshot;
use super::types::{
    Cell, CreateGameError, DeathReason, Direction, FieldSize, Food, FoodType, Point, SnakePart,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over, nothing changed.
    Idle,
    Moved,
    AteFood,
    GameOver(DeathReason),
}

/// Single player, wall bounded snake game.
///
/// The board is kept in sync with the snake and the food after every
/// operation, so readers never have to rebuild it. The state is not
/// synchronized; callers serialize access.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    board: Board,
    snake: Snake,
    direction: Direction,
    food: Option<Food>,
    score: u32,
    game_over: bool,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize, rng: &mut SessionRng) -> Result<Self, CreateGameError> {
        if !field_size.is_valid() {
            return Err(CreateGameError::InvalidSize {
                width: field_size.width,
                height: field_size.height,
            });
        }

        let head = Point::new(
            (field_size.width / 2).max(INITIAL_SNAKE_LENGTH - 1) as i32,
            (field_size.height / 2) as i32,
        );
        let direction = Direction::Right;

        let mut state = Self {
            board: Board::new(field_size),
            snake: Snake::new(head, direction),
            direction,
            food: None,
            score: 0,
            game_over: false,
        };
        state.tag_snake();
        state.generate_food(rng);
        Ok(state)
    }

    /// Returns `true` when the direction was accepted. Reversal onto the
    /// snake's own neck is refused.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        let old_head = self.snake.head();
        let new_head = old_head.step(self.direction);

        if !self.board.field_size().contains(new_head) {
            return self.finish(DeathReason::WallCollision);
        }
        // The tail counts too: it has not moved out of the way yet.
        if self.snake.contains(&new_head) {
            return self.finish(DeathReason::SelfCollision);
        }

        self.snake.push_head(new_head);

        let ate = self.food.is_some_and(|food| food.position == new_head);
        if ate {
            self.score += 1;
            self.food = None;
        } else {
            let tail = self.snake.pop_tail();
            self.board.set(tail, Cell::Empty);
        }

        if self.snake.contains(&old_head) {
            self.board.set(old_head, Cell::Snake(SnakePart::Body));
        }
        self.board.set(self.snake.tail(), Cell::Snake(SnakePart::Tail));
        self.board.set(new_head, Cell::Snake(SnakePart::Head));

        if ate {
            log!(
                "Snake ate food at ({}, {}). Score: {}",
                new_head.x,
                new_head.y,
                self.score
            );
            self.generate_food(rng);
            TickOutcome::AteFood
        } else {
            TickOutcome::Moved
        }
    }

    /// Places food of a random type on a random empty cell, replacing any
    /// food already on the board. A full board keeps whatever food it has.
    pub fn generate_food(&mut self, rng: &mut SessionRng) {
        let food_type = FoodType::ALL[rng.random_range(0..FoodType::ALL.len())];

        let empty_positions = self.board.empty_positions();
        if empty_positions.is_empty() {
            log!("No empty positions left for food");
            return;
        }
        let position = empty_positions[rng.random_range(0..empty_positions.len())];

        if let Some(old) = self.food.take()
            && matches!(self.board.get(old.position), Some(Cell::Food(_)))
        {
            self.board.set(old.position, Cell::Empty);
        }

        self.board.set(position, Cell::Food(food_type));
        self.food = Some(Food {
            position,
            food_type,
        });
        log!(
            "Food ({}) generated at ({}, {})",
            food_type.as_str(),
            position.x,
            position.y
        );
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, self.score, self.game_over)
    }

    pub fn field_size(&self) -> FieldSize {
        self.board.field_size()
    }

    pub fn width(&self) -> usize {
        self.board.field_size().width
    }

    pub fn height(&self) -> usize {
        self.board.field_size().height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.board.get(point)
    }

    fn finish(&mut self, reason: DeathReason) -> TickOutcome {
        self.game_over = true;
        log!(
            "Game over ({:?}) at ({}, {}). Final score: {}",
            reason,
            self.snake.head().x,
            self.snake.head().y,
            self.score
        );
        TickOutcome::GameOver(reason)
    }

    fn tag_snake(&mut self) {
        let segments: Vec<Point> = self.snake.segments().copied().collect();
        for point in &segments {
            self.board.set(*point, Cell::Snake(SnakePart::Body));
        }
        self.board.set(self.snake.tail(), Cell::Snake(SnakePart::Tail));
        self.board.set(self.snake.head(), Cell::Snake(SnakePart::Head));
    }

    #[cfg(test)]
    pub(crate) fn from_layout(
        field_size: FieldSize,
        body: &[Point],
        direction: Direction,
        food: Option<Food>,
    ) -> Self {
        let mut state = Self {
            board: Board::new(field_size),
            snake: Snake::from_body(body.iter().copied().collect()),
            direction,
            food,
            score: 0,
            game_over: false,
        };
        state.tag_snake();
        if let Some(food) = food {
            state.board.set(food.position, Cell::Food(food.food_type));
        }
        state
    }
}
