use serde::{Deserialize, Serialize};

use crate::*;

/// Detached, serialisable view of a session for the render layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: Score,
    pub phase: EnginePhase,
    pub selection: Option<Coord2>,
    pub won: bool,
}

impl Snapshot {
    pub fn from_engine<S: ShapeSource>(engine: &MatchEngine<S>) -> Self {
        Self {
            grid: engine.grid().clone(),
            score: engine.score(),
            phase: engine.phase(),
            selection: engine.selection(),
            won: engine.has_won(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_copies_session_state() {
        let mut engine = MatchEngine::seeded(GameConfig::default(), 3).unwrap();
        engine.select((4, 4));

        let snapshot = Snapshot::from_engine(&engine);

        assert_eq!(&snapshot.grid, engine.grid());
        assert_eq!(snapshot.selection, Some((4, 4)));
        assert_eq!(snapshot.phase, EnginePhase::Idle);
        assert_eq!(snapshot.cell_at((4, 4)), engine.cell_at((4, 4)));
        assert!(!snapshot.won);
    }

    #[test]
    fn events_serialize_with_variant_tags() {
        let event = CascadeEvent::SwapCommitted {
            first: (2, 0),
            second: (2, 1),
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"SwapCommitted":{"first":[2,0],"second":[2,1]}}"#
        );

        let drop = DropMove {
            column: 3,
            from_row: -2,
            to_row: 0,
            shape: Shape::Trapezium,
        };
        assert_eq!(
            serde_json::to_string(&drop).unwrap(),
            r#"{"column":3,"from_row":-2,"to_row":0,"shape":"Trapezium"}"#
        );
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), r#""Empty""#);
        assert_eq!(
            serde_json::to_string(&Cell::Filled(Shape::Circle)).unwrap(),
            r#"{"Filled":"Circle"}"#
        );
    }
}
