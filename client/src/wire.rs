//! JSON payloads exchanged with the solver endpoint.

use longacat_types::BoardSnapshot;
use serde::{Deserialize, Serialize};

/// Request body: `{ "board": [[0, 1, 2], ...] }` with cell wire codes.
/// The board size is implicit in the matrix dimensions.
#[derive(Debug, Serialize)]
pub(crate) struct SolveRequestBody {
    pub(crate) board: Vec<Vec<u8>>,
}

impl From<&BoardSnapshot> for SolveRequestBody {
    fn from(snapshot: &BoardSnapshot) -> Self {
        Self {
            board: snapshot.to_codes(),
        }
    }
}

/// Response body: `{ "solution": ["...", ...] }`.
///
/// `solution` is optional so that a body missing the field deserializes
/// cleanly and is mapped to a solve failure, rather than surfacing as a
/// parse error with a different message.
#[derive(Debug, Deserialize)]
pub(crate) struct SolveResponseBody {
    #[serde(default)]
    pub(crate) solution: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::{SolveRequestBody, SolveResponseBody};
    use longacat_types::{BoardSnapshot, CellType};

    #[test]
    fn request_body_matches_wire_shape() {
        let mut rows = vec![vec![CellType::Empty; 3]; 3];
        rows[0][1] = CellType::Wall;
        rows[2][2] = CellType::Cat;
        let body = SolveRequestBody::from(&BoardSnapshot::new(rows));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "board": [[0, 1, 0], [0, 0, 0], [0, 0, 2]] })
        );
    }

    #[test]
    fn response_with_solution_parses_in_order() {
        let body: SolveResponseBody =
            serde_json::from_str(r#"{ "solution": ["up", "up", "left"] }"#).unwrap();
        assert_eq!(
            body.solution,
            Some(vec!["up".into(), "up".into(), "left".into()])
        );
    }

    #[test]
    fn response_without_solution_parses_to_none() {
        let body: SolveResponseBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.solution, None);
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let body: SolveResponseBody =
            serde_json::from_str(r#"{ "solution": [], "elapsed_ms": 12 }"#).unwrap();
        assert_eq!(body.solution, Some(vec![]));
    }
}
