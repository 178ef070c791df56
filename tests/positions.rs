use serde::Deserialize;

use piece_rules::board::{Board, BoardAdapter, Cell};
use piece_rules::rules::{evaluate, legal_cells, reachable_cells, EvalMode};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    placement: String,
    piece: String,
    reachable: Option<Vec<String>>,
    legal: Vec<String>,
    simple: Option<f64>,
    extended: Option<f64>,
}

fn cells(notation: &[String]) -> Vec<Cell> {
    notation
        .iter()
        .map(|s| s.parse().expect("valid cell in positions.json"))
        .collect()
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn positions_suite() {
    for position in load().positions {
        let mut board = Board::from_placement(&position.placement)
            .unwrap_or_else(|e| panic!("{}: {e}", position.name));
        let cell: Cell = position.piece.parse().expect("valid piece cell");
        let id = board
            .occupant(cell)
            .unwrap_or_else(|| panic!("{}: no piece on {}", position.name, position.piece));
        let before = board.clone();

        if let Some(reachable) = &position.reachable {
            assert_eq!(
                reachable_cells(&board, id),
                cells(reachable),
                "reachable cells for {}",
                position.name
            );
        }

        assert_eq!(
            legal_cells(&mut board, id),
            cells(&position.legal),
            "legal cells for {}",
            position.name
        );
        assert_eq!(board, before, "board changed by {}", position.name);

        if let Some(simple) = position.simple {
            assert_eq!(
                evaluate(&mut board, id, EvalMode::Simple),
                simple,
                "simple score for {}",
                position.name
            );
        }
        if let Some(extended) = position.extended {
            let score = evaluate(&mut board, id, EvalMode::Extended);
            assert!(
                (score - extended).abs() < 1e-6,
                "extended score for {}: expected {extended}, got {score}",
                position.name
            );
        }
    }
}
