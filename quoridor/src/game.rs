use std::collections::BTreeSet;

use crate::{
    coord, movement, Action, ActionError, Board, Coordinate, IllegalMove, Player, SetupError,
    WallOrientation, WinCondition,
};

/// Configuration of one seat.
#[derive(Clone, Debug)]
pub struct SeatConfig {
    pub name: String,
    pub start: Coordinate,
    pub win_condition: WinCondition,
}

/// Configuration of a whole match, validated by [`Match::new`].
#[derive(Clone, Debug)]
pub struct MatchConfig {
    pub board_size: i8,
    pub walls_per_seat: usize,
    pub seats: Vec<SeatConfig>,
}

impl MatchConfig {
    /// The classic two-seat setup: pawns start centered on opposite
    /// edges, each races to the other's edge, and each seat gets as many
    /// walls as the board has tiles per side.
    pub fn two_player(board_size: i8) -> Self {
        use crate::Axis;

        Self {
            board_size,
            walls_per_seat: board_size.max(0) as usize,
            seats: vec![
                SeatConfig {
                    name: String::from("1P"),
                    start: coord!(board_size / 2, 0),
                    win_condition: WinCondition {
                        axis: Axis::Y,
                        value: board_size - 1,
                    },
                },
                SeatConfig {
                    name: String::from("2P"),
                    start: coord!(board_size / 2, board_size - 1),
                    win_condition: WinCondition {
                        axis: Axis::Y,
                        value: 0,
                    },
                },
            ],
        }
    }
}

/// The per-turn selection phase of the turn controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Waiting for the active seat to pick its pawn or a wall token.
    AwaitingInput,
    /// The pawn is picked; waiting for a destination.
    PawnSelected,
    /// A wall token is picked; waiting for a cell and orientation.
    WallSelected { token: usize },
}

impl Selection {
    fn describe(self) -> &'static str {
        match self {
            Selection::AwaitingInput => "awaiting input",
            Selection::PawnSelected => "a pawn is selected",
            Selection::WallSelected { .. } => "a wall is selected",
        }
    }
}

/// Whether the match is still running, and who won if not.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished { winner: usize },
}

/// Summarizes one accepted action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn passed to the next seat.
    Advanced { next_seat: usize },
    /// The move satisfied the mover's win condition; the match is over.
    Won { winner: usize },
}

/// A running match: the board, the seated players and the turn
/// controller that accepts exactly one action per turn.
///
/// All mutation goes through the transition methods; every rejection
/// leaves the match observably unchanged.
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    players: Vec<Player>,
    active: usize,
    selection: Selection,
    status: MatchStatus,
}

impl Match {
    /// Validates the configuration and seats the players.
    ///
    /// The first configured seat opens the match.
    pub fn new(config: MatchConfig) -> Result<Self, SetupError> {
        if config.board_size < 2 {
            return Err(SetupError::BoardTooSmall {
                size: config.board_size,
            });
        }
        if config.seats.len() < 2 {
            return Err(SetupError::NotEnoughSeats {
                count: config.seats.len(),
            });
        }
        let board = Board::new(config.board_size);
        for (seat, seat_config) in config.seats.iter().enumerate() {
            if !board.in_bounds(seat_config.start) {
                return Err(SetupError::StartOutOfBounds {
                    seat,
                    start: seat_config.start,
                });
            }
            let value = seat_config.win_condition.value;
            if value < 0 || value >= config.board_size {
                return Err(SetupError::GoalOutOfBounds { seat, value });
            }
            if seat_config.win_condition.satisfied_by(seat_config.start) {
                return Err(SetupError::StartOnGoal { seat });
            }
            for (earlier, other) in config.seats[..seat].iter().enumerate() {
                if other.start == seat_config.start {
                    return Err(SetupError::StartsOverlap {
                        first: earlier,
                        second: seat,
                        coordinate: seat_config.start,
                    });
                }
            }
        }

        let walls_per_seat = config.walls_per_seat;
        let players = config
            .seats
            .into_iter()
            .map(|seat_config| {
                Player::new(
                    seat_config.name,
                    seat_config.start,
                    seat_config.win_condition,
                    walls_per_seat,
                )
            })
            .collect();
        Ok(Self {
            board,
            players,
            active: 0,
            selection: Selection::AwaitingInput,
            status: MatchStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The seat whose turn it is.
    pub fn active_seat(&self) -> usize {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            MatchStatus::InProgress => None,
            MatchStatus::Finished { winner } => Some(winner),
        }
    }

    /// The pawn coordinates of every seat except `seat`.
    fn other_pawns(&self, seat: usize) -> Vec<Coordinate> {
        self.players
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != seat)
            .map(|(_, player)| player.coordinate())
            .collect()
    }

    /// Every tile the active seat's pawn may move to this turn.
    pub fn legal_destinations(&self) -> BTreeSet<Coordinate> {
        movement::legal_destinations(
            self.players[self.active].coordinate(),
            &self.board,
            &self.other_pawns(self.active),
        )
    }

    /// Whether a wall placement would be accepted right now.
    ///
    /// Purely geometric; token ownership is checked when the placement
    /// is submitted.
    pub fn wall_placement_legal(&self, cell: Coordinate, orientation: WallOrientation) -> bool {
        self.board.check_wall_placement(cell, orientation).is_ok()
    }

    fn describe_state(&self) -> &'static str {
        match self.status {
            MatchStatus::Finished { .. } => "the match is finished",
            MatchStatus::InProgress => self.selection.describe(),
        }
    }

    fn require_awaiting(&self, attempted: &'static str) -> Result<(), ActionError> {
        if self.status != MatchStatus::InProgress || self.selection != Selection::AwaitingInput {
            return Err(ActionError::InvalidStateTransition {
                attempted,
                state: self.describe_state(),
            });
        }
        Ok(())
    }

    /// `AwaitingInput -> PawnSelected`, for the active seat only.
    pub fn select_pawn(&mut self, seat: usize) -> Result<(), ActionError> {
        self.require_awaiting("select a pawn")?;
        if seat != self.active {
            return Err(ActionError::WrongTurn { seat });
        }
        self.selection = Selection::PawnSelected;
        Ok(())
    }

    /// `AwaitingInput -> WallSelected`, for the active seat and one of
    /// its available tokens only.
    pub fn select_wall(&mut self, seat: usize, token: usize) -> Result<(), ActionError> {
        self.require_awaiting("select a wall")?;
        if seat != self.active || !self.players[self.active].holds_available_wall(token) {
            return Err(ActionError::WrongTurn { seat });
        }
        self.selection = Selection::WallSelected { token };
        Ok(())
    }

    /// Drops an in-progress selection and returns to `AwaitingInput`.
    ///
    /// Nothing was committed yet, so neither the board nor any wall
    /// token changes.
    pub fn cancel_selection(&mut self) -> Result<(), ActionError> {
        match (self.status, self.selection) {
            (MatchStatus::InProgress, Selection::PawnSelected)
            | (MatchStatus::InProgress, Selection::WallSelected { .. }) => {
                self.selection = Selection::AwaitingInput;
                Ok(())
            }
            _ => Err(ActionError::InvalidStateTransition {
                attempted: "cancel the selection",
                state: self.describe_state(),
            }),
        }
    }

    /// `PawnSelected -> ActionResolved`: moves the active pawn.
    ///
    /// The destination must be one of [`Self::legal_destinations`];
    /// anything else is rejected with a classified [`IllegalMove`] and
    /// the selection stays in place.
    pub fn choose_destination(
        &mut self,
        destination: Coordinate,
    ) -> Result<TurnOutcome, ActionError> {
        if self.status != MatchStatus::InProgress || self.selection != Selection::PawnSelected {
            return Err(ActionError::InvalidStateTransition {
                attempted: "choose a destination",
                state: self.describe_state(),
            });
        }
        if !self.legal_destinations().contains(&destination) {
            return Err(ActionError::IllegalMove(
                self.classify_illegal_move(destination),
            ));
        }
        self.players[self.active].move_to(destination);
        Ok(self.resolve_action(true))
    }

    /// `WallSelected -> ActionResolved`: commits the wall placement and
    /// installs the selected token.
    pub fn confirm_placement(
        &mut self,
        cell: Coordinate,
        orientation: WallOrientation,
    ) -> Result<TurnOutcome, ActionError> {
        let token = match (self.status, self.selection) {
            (MatchStatus::InProgress, Selection::WallSelected { token }) => token,
            _ => {
                return Err(ActionError::InvalidStateTransition {
                    attempted: "confirm a wall placement",
                    state: self.describe_state(),
                })
            }
        };
        self.board
            .place_wall(cell, orientation)
            .map_err(ActionError::IllegalWall)?;
        self.players[self.active].install_wall(token);
        Ok(self.resolve_action(false))
    }

    /// Submits one complete action for `seat`, driving the selection
    /// transitions internally.
    ///
    /// On rejection any in-progress selection is dropped again, so a
    /// caller that only ever submits whole actions observes the match
    /// advancing by exactly one accepted action per turn.
    pub fn submit(&mut self, seat: usize, action: Action) -> Result<TurnOutcome, ActionError> {
        let outcome = match action {
            Action::Move { destination } => {
                self.select_pawn(seat)?;
                self.choose_destination(destination)
            }
            Action::PlaceWall {
                cell,
                orientation,
                token,
            } => {
                self.select_wall(seat, token)?;
                self.confirm_placement(cell, orientation)
            }
        };
        if outcome.is_err() {
            self.selection = Selection::AwaitingInput;
        }
        outcome
    }

    /// Explains why `destination` is not a legal move right now.
    fn classify_illegal_move(&self, destination: Coordinate) -> IllegalMove {
        let from = self.players[self.active].coordinate();
        if !self.board.in_bounds(destination) {
            IllegalMove::OutOfBounds { destination }
        } else if self
            .board
            .is_occupied(destination, &self.other_pawns(self.active))
        {
            IllegalMove::Occupied { destination }
        } else {
            IllegalMove::EdgeBlocked { from, destination }
        }
    }

    /// Finishes the turn after an accepted action: the win check (moves
    /// only — wall placements cannot satisfy a win condition), then the
    /// round-robin handover.
    fn resolve_action(&mut self, moved: bool) -> TurnOutcome {
        self.selection = Selection::AwaitingInput;
        if moved && self.players[self.active].at_win_position() {
            self.status = MatchStatus::Finished {
                winner: self.active,
            };
            return TurnOutcome::Won {
                winner: self.active,
            };
        }
        self.active = (self.active + 1) % self.players.len();
        TurnOutcome::Advanced {
            next_seat: self.active,
        }
    }
}
