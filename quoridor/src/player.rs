use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// The board axis a win condition is measured on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// The line a player has to reach to win: a target value on one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCondition {
    pub axis: Axis,
    pub value: i8,
}

impl WinCondition {
    /// Whether a pawn at `coordinate` satisfies this win condition.
    pub fn satisfied_by(&self, coordinate: Coordinate) -> bool {
        match self.axis {
            Axis::X => coordinate.x == self.value,
            Axis::Y => coordinate.y == self.value,
        }
    }
}

/// The state of a single wall token. The transition is one-way:
/// an installed token never becomes available again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallTokenState {
    Available,
    Installed,
}

/// One wall from a player's inventory, addressed by its index in the
/// owner's token list.
#[derive(Clone, Debug)]
pub struct WallToken {
    state: WallTokenState,
}

impl WallToken {
    fn new() -> Self {
        Self {
            state: WallTokenState::Available,
        }
    }

    pub fn state(&self) -> WallTokenState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        self.state == WallTokenState::Available
    }
}

/// One seat in the match: identity, pawn position, win condition and
/// wall inventory.
///
/// Only the turn controller mutates a player; everything else reads.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    coordinate: Coordinate,
    win_condition: WinCondition,
    walls: Vec<WallToken>,
}

impl Player {
    pub(crate) fn new(
        name: String,
        coordinate: Coordinate,
        win_condition: WinCondition,
        wall_count: usize,
    ) -> Self {
        Self {
            name,
            coordinate,
            win_condition,
            walls: (0..wall_count).map(|_| WallToken::new()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    /// The player's wall tokens, installed ones included.
    pub fn walls(&self) -> &[WallToken] {
        &self.walls
    }

    /// How many wall tokens are still available for placement.
    pub fn available_walls(&self) -> usize {
        self.walls.iter().filter(|w| w.is_available()).count()
    }

    /// Whether `token` indexes one of this player's available tokens.
    pub fn holds_available_wall(&self, token: usize) -> bool {
        self.walls.get(token).is_some_and(WallToken::is_available)
    }

    /// Whether the pawn currently satisfies the win condition.
    pub fn at_win_position(&self) -> bool {
        self.win_condition.satisfied_by(self.coordinate)
    }

    pub(crate) fn move_to(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    pub(crate) fn install_wall(&mut self, token: usize) {
        self.walls[token].state = WallTokenState::Installed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn win_condition_checks_only_its_axis() {
        let on_column = WinCondition {
            axis: Axis::X,
            value: 8,
        };
        assert!(on_column.satisfied_by(coord!(8, 0)));
        assert!(on_column.satisfied_by(coord!(8, 5)));
        assert!(!on_column.satisfied_by(coord!(0, 8)));

        let on_row = WinCondition {
            axis: Axis::Y,
            value: 0,
        };
        assert!(on_row.satisfied_by(coord!(3, 0)));
        assert!(!on_row.satisfied_by(coord!(0, 3)));
    }

    #[test]
    fn installing_a_token_consumes_it() {
        let mut player = Player::new(
            String::from("1P"),
            coord!(4, 0),
            WinCondition {
                axis: Axis::Y,
                value: 8,
            },
            3,
        );
        assert_eq!(player.available_walls(), 3);
        assert!(player.holds_available_wall(1));

        player.install_wall(1);
        assert_eq!(player.available_walls(), 2);
        assert!(!player.holds_available_wall(1));
        assert_eq!(player.walls()[1].state(), WallTokenState::Installed);
        // Out-of-range indices are simply not held.
        assert!(!player.holds_available_wall(3));
    }
}
