use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::Deserialize;

use common::games::snake::GameSnapshot;
use common::{log, log_error};

use crate::web_server::WebServerState;

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: String,
}

pub async fn state_handler(State(state): State<WebServerState>) -> Json<GameSnapshot> {
    Json(state.host.snapshot().await)
}

/// Reads the body as JSON whatever its `Content-Type`, so plain `fetch`
/// calls without headers are accepted too.
pub async fn move_handler(State(state): State<WebServerState>, body: Bytes) -> StatusCode {
    let request: MoveRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log_error!("Rejecting malformed move request: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };
    log!("Handling move request: {}", request.direction);
    state.host.apply_direction_token(&request.direction).await;
    StatusCode::OK
}

pub async fn restart_handler(State(state): State<WebServerState>) -> StatusCode {
    log!("Handling restart request");
    match state.host.reset().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            log_error!("Failed to restart game: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::snake::FieldSize;

    use crate::game_host::GameHost;
    use crate::game_host::tests::head_position;

    fn test_state() -> WebServerState {
        let host = GameHost::new(FieldSize::new(40, 20), SessionRng::new(5)).unwrap();
        WebServerState { host }
    }

    fn move_request(direction: &str) -> Bytes {
        Bytes::from(format!(r#"{{"direction":"{}"}}"#, direction))
    }

    #[tokio::test]
    async fn test_state_handler_returns_snapshot() {
        let state = test_state();
        let Json(snapshot) = state_handler(State(state.clone())).await;
        assert_eq!(snapshot, state.host.snapshot().await);
    }

    #[tokio::test]
    async fn test_move_handler_changes_direction() {
        let state = test_state();
        let status = move_handler(State(state.clone()), move_request("down")).await;
        assert_eq!(status, StatusCode::OK);

        state.host.tick().await;
        assert_eq!(head_position(&state.host.snapshot().await), Some((20, 11)));
    }

    #[tokio::test]
    async fn test_move_handler_ignores_unknown_direction() {
        let state = test_state();
        let status = move_handler(State(state.clone()), move_request("north")).await;
        assert_eq!(status, StatusCode::OK);

        state.host.tick().await;
        assert_eq!(head_position(&state.host.snapshot().await), Some((21, 10)));
    }

    #[tokio::test]
    async fn test_move_handler_rejects_malformed_body() {
        let state = test_state();
        let before = state.host.snapshot().await;
        for body in ["not json", "{}", r#"{"direction":7}"#, ""] {
            let status = move_handler(State(state.clone()), Bytes::from(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        assert_eq!(before, state.host.snapshot().await);

        state.host.tick().await;
        assert_eq!(head_position(&state.host.snapshot().await), Some((21, 10)));
    }

    #[tokio::test]
    async fn test_restart_handler_replaces_game() {
        let state = test_state();
        move_handler(State(state.clone()), move_request("up")).await;
        for _ in 0..15 {
            state.host.tick().await;
        }
        assert!(state.host.is_game_over().await);

        assert_eq!(restart_handler(State(state.clone())).await, StatusCode::OK);
        let snapshot = state.host.snapshot().await;
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.score, 0);
        assert_eq!(head_position(&snapshot), Some((20, 10)));
    }
}
