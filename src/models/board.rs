use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::not_blank;

/// A named collection of tasks owned by one user.
#[derive(Debug, Clone, FromRow)]
pub struct Board {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
}

/// Input structure for creating a board.
#[derive(Debug, Deserialize, Validate)]
pub struct BoardInput {
    /// Must be non-blank and at most 100 characters.
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: String,
}

/// Public representation of a board; the owner is implied by the token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardResponse {
    pub id: i32,
    pub name: String,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            name: board.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_input_validation() {
        assert!(BoardInput { name: "Work".into() }.validate().is_ok());
        assert!(BoardInput { name: "".into() }.validate().is_err());
        assert!(BoardInput { name: "   ".into() }.validate().is_err());
        assert!(BoardInput { name: "b".repeat(101) }.validate().is_err());
    }

    #[test]
    fn test_board_response_hides_owner() {
        let board = Board {
            id: 3,
            name: "Home".into(),
            user_id: 9,
        };
        let json = serde_json::to_value(BoardResponse::from(board)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "name": "Home" }));
    }
}
