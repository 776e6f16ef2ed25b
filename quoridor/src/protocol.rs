use serde::{Deserialize, Serialize};

use crate::{Coordinate, Match, PlacedWall, WallOrientation, WinCondition};

/// Request from the referee to a seat client.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// A new match starts. The response should be an [`Okay`].
    NewMatch {
        /// The seat index assigned to the receiving client.
        seat: usize,
        board_size: i8,
        walls_per_seat: usize,
    },
    /// It is the receiving seat's turn. The response should be an
    /// [`Action`].
    Turn {
        snapshot: MatchSnapshot,
        /// Every tile the seat's pawn may legally move to, so clients
        /// can drive affordance highlighting without redoing the rules.
        legal_destinations: Vec<Coordinate>,
        /// Why the seat's previous submission for this turn was
        /// rejected. Absent on the first prompt of a turn.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        rejected: Option<String>,
    },
    /// The match ended. The response should be an [`Okay`].
    MatchOver { winner: usize },
    /// The seat client should shut down.
    Bye,
}

/// Dummy struct for use in seat communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// One action submitted by a seat in response to a [`Request::Turn`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Move the seat's pawn to `destination`.
    Move { destination: Coordinate },
    /// Install wall token `token` at `cell`.
    PlaceWall {
        cell: Coordinate,
        orientation: WallOrientation,
        token: usize,
    },
}

/// The full logical state of a match, as exposed to seat clients.
///
/// Logical coordinates only; any world-space projection is the client's
/// concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub board_size: i8,
    /// Walls on the board, in placement order.
    pub walls: Vec<PlacedWall>,
    pub seats: Vec<SeatSnapshot>,
    pub active_seat: usize,
}

/// One seat's public state inside a [`MatchSnapshot`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub name: String,
    pub coordinate: Coordinate,
    pub walls_available: usize,
    pub win_condition: WinCondition,
}

impl MatchSnapshot {
    /// Captures the current state of `game`.
    pub fn capture(game: &Match) -> Self {
        Self {
            board_size: game.board().size(),
            walls: game.board().walls().to_vec(),
            seats: game
                .players()
                .iter()
                .map(|player| SeatSnapshot {
                    name: String::from(player.name()),
                    coordinate: player.coordinate(),
                    walls_available: player.available_walls(),
                    win_condition: player.win_condition(),
                })
                .collect(),
            active_seat: game.active_seat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coord, MatchConfig};

    #[test]
    fn actions_round_trip_through_json() {
        let action = Action::PlaceWall {
            cell: coord!(3, 3),
            orientation: WallOrientation::Horizontal,
            token: 2,
        };
        let json = r#"{"kind":"place_wall","cell":{"x":3,"y":3},"orientation":"horizontal","token":2}"#;
        let serialized = serde_json::to_string(&action).unwrap();
        assert_eq!(serialized, json);
        let deserialized: Action = serde_json::from_str(json).unwrap();
        assert_eq!(deserialized, action);

        let action = Action::Move {
            destination: coord!(4, 1),
        };
        let deserialized: Action =
            serde_json::from_str(&serde_json::to_string(&action).unwrap()).unwrap();
        assert_eq!(deserialized, action);
    }

    #[test]
    fn turn_request_omits_an_absent_rejection() {
        let game = Match::new(MatchConfig::two_player(9)).unwrap();
        let request = Request::Turn {
            snapshot: MatchSnapshot::capture(&game),
            legal_destinations: game.legal_destinations().into_iter().collect(),
            rejected: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""type":"Turn""#));
        assert!(!json.contains("rejected"));
        assert!(matches!(
            serde_json::from_str::<Request>(&json).unwrap(),
            Request::Turn { rejected: None, .. }
        ));
    }

    #[test]
    fn snapshot_reflects_the_match() {
        let game = Match::new(MatchConfig::two_player(9)).unwrap();
        let snapshot = MatchSnapshot::capture(&game);
        assert_eq!(snapshot.board_size, 9);
        assert_eq!(snapshot.active_seat, 0);
        assert_eq!(snapshot.seats.len(), 2);
        assert_eq!(snapshot.seats[0].coordinate, coord!(4, 0));
        assert_eq!(snapshot.seats[1].walls_available, 9);
        assert!(snapshot.walls.is_empty());
    }
}
