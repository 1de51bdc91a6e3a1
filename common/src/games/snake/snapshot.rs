use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{Cell, FoodType, SnakePart};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Empty,
    Snake,
    Food,
}

/// One board square as sent to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    #[serde(rename = "type")]
    pub kind: CellKind,
    #[serde(rename = "foodType", default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<FoodType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<SnakePart>,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self {
                kind: CellKind::Empty,
                food_type: None,
                part: None,
            },
            Cell::Snake(part) => Self {
                kind: CellKind::Snake,
                food_type: None,
                part: Some(part),
            },
            Cell::Food(food_type) => Self {
                kind: CellKind::Food,
                food_type: Some(food_type),
                part: None,
            },
        }
    }
}

/// Detached copy of a game, safe to serialize after the lock is released.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<Vec<CellView>>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub(super) fn capture(board: &Board, score: u32, game_over: bool) -> Self {
        let board = board
            .rows()
            .map(|row| row.iter().copied().map(CellView::from).collect())
            .collect();
        Self {
            board,
            score,
            game_over,
        }
    }
}
