use std::sync::Arc;
use tokio::sync::Mutex;

use common::games::SessionRng;
use common::games::snake::{
    CreateGameError, Direction, FieldSize, GameSnapshot, SnakeGameState, TickOutcome,
};
use common::log;

struct HostedGame {
    state: SnakeGameState,
    rng: SessionRng,
}

/// The one live game of the process. Every entry point takes the lock for
/// its whole duration, so the tick driver and request handlers never see a
/// half-applied update, and a restart is visible to both at once.
#[derive(Clone)]
pub struct GameHost {
    game: Arc<Mutex<HostedGame>>,
    field_size: FieldSize,
}

impl GameHost {
    pub fn new(field_size: FieldSize, mut rng: SessionRng) -> Result<Self, CreateGameError> {
        let state = SnakeGameState::new(field_size, &mut rng)?;
        Ok(Self {
            game: Arc::new(Mutex::new(HostedGame { state, rng })),
            field_size,
        })
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub async fn set_direction(&self, direction: Direction) -> bool {
        let mut game = self.game.lock().await;
        game.state.set_direction(direction)
    }

    /// Unknown tokens are logged and otherwise ignored.
    pub async fn apply_direction_token(&self, token: &str) -> bool {
        match Direction::from_token(token) {
            Some(direction) => self.set_direction(direction).await,
            None => {
                log!("Ignoring unknown direction '{}'", token);
                false
            }
        }
    }

    pub async fn tick(&self) -> TickOutcome {
        let mut game = self.game.lock().await;
        let HostedGame { state, rng } = &mut *game;
        state.tick(rng)
    }

    /// Replaces the current game with a fresh one of the configured size.
    pub async fn reset(&self) -> Result<(), CreateGameError> {
        let mut game = self.game.lock().await;
        let state = SnakeGameState::new(self.field_size, &mut game.rng)?;
        game.state = state;
        log!(
            "Game restarted ({}x{})",
            self.field_size.width,
            self.field_size.height
        );
        Ok(())
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.game.lock().await.state.snapshot()
    }

    #[cfg(test)]
    pub async fn is_game_over(&self) -> bool {
        self.game.lock().await.state.is_game_over()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use common::games::snake::{CellKind, SnakePart};

    pub(crate) fn head_position(snapshot: &GameSnapshot) -> Option<(usize, usize)> {
        snapshot.board.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|cell| cell.part == Some(SnakePart::Head))
                .map(|x| (x, y))
        })
    }

    fn count_kind(snapshot: &GameSnapshot, kind: CellKind) -> usize {
        snapshot.board.iter().flatten().filter(|c| c.kind == kind).count()
    }

    #[tokio::test]
    async fn test_new_rejects_small_field() {
        let result = GameHost::new(FieldSize::new(2, 2), SessionRng::new(1));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_snapshot_of_fresh_game() {
        let host = GameHost::new(FieldSize::new(40, 20), SessionRng::new(7)).unwrap();
        let snapshot = host.snapshot().await;

        assert_eq!(snapshot.board.len(), 20);
        assert!(snapshot.board.iter().all(|row| row.len() == 40));
        assert_eq!(count_kind(&snapshot, CellKind::Snake), 3);
        assert_eq!(count_kind(&snapshot, CellKind::Food), 1);
        assert_eq!(head_position(&snapshot), Some((20, 10)));
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.game_over);
    }

    #[tokio::test]
    async fn test_direction_tokens_drive_the_snake() {
        let host = GameHost::new(FieldSize::new(40, 20), SessionRng::new(7)).unwrap();

        assert!(host.apply_direction_token("up").await);
        host.tick().await;
        assert_eq!(head_position(&host.snapshot().await), Some((20, 9)));

        assert!(!host.apply_direction_token("down").await);
        assert!(!host.apply_direction_token("sideways").await);
        host.tick().await;
        assert_eq!(head_position(&host.snapshot().await), Some((20, 8)));
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let host = GameHost::new(FieldSize::new(10, 10), SessionRng::new(7)).unwrap();
        let before = host.snapshot().await;
        host.tick().await;
        let after = host.snapshot().await;
        assert_ne!(before, after);
        assert_eq!(head_position(&before), Some((5, 5)));
    }

    #[tokio::test]
    async fn test_reset_after_game_over() {
        let host = GameHost::new(FieldSize::new(5, 5), SessionRng::new(7)).unwrap();
        let mut outcome = TickOutcome::Moved;
        for _ in 0..10 {
            outcome = host.tick().await;
            if host.is_game_over().await {
                break;
            }
        }
        assert!(matches!(outcome, TickOutcome::GameOver(_)));
        assert_eq!(host.tick().await, TickOutcome::Idle);

        host.reset().await.unwrap();
        let snapshot = host.snapshot().await;
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.score, 0);
        assert_eq!(count_kind(&snapshot, CellKind::Snake), 3);
        assert_eq!(head_position(&snapshot), Some((2, 2)));
        assert!(!host.is_game_over().await);
    }

    #[tokio::test]
    async fn test_concurrent_callers_are_serialized() {
        let host = GameHost::new(FieldSize::new(30, 30), SessionRng::new(11)).unwrap();
        let mut tasks = Vec::new();
        for i in 0..16 {
            let host = host.clone();
            tasks.push(tokio::spawn(async move {
                let token = ["up", "left", "down", "right"][i % 4];
                host.apply_direction_token(token).await;
                host.tick().await;
                host.snapshot().await
            }));
        }
        for task in tasks {
            let snapshot = task.await.unwrap();
            let snake_cells = count_kind(&snapshot, CellKind::Snake);
            assert_eq!(snake_cells, 3 + snapshot.score as usize);
            let heads = snapshot
                .board
                .iter()
                .flatten()
                .filter(|c| c.part == Some(SnakePart::Head))
                .count();
            assert_eq!(heads, 1);
        }
    }
}
