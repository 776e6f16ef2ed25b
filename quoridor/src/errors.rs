use crate::Coordinate;

/// The error type for an attempted pawn move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { destination: Coordinate },
    Occupied { destination: Coordinate },
    EdgeBlocked { from: Coordinate, destination: Coordinate },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { destination } => {
                write!(f, "Destination {} is outside the board", destination)
            }
            IllegalMove::Occupied { destination } => {
                write!(f, "Destination {} is occupied by another pawn", destination)
            }
            IllegalMove::EdgeBlocked { from, destination } => write!(
                f,
                "No open way leads from {} to {} this turn",
                from, destination
            ),
        }
    }
}

/// The error type for an attempted wall placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalWall {
    OutOfWallGrid { cell: Coordinate },
    CellAlreadyUsed { cell: Coordinate },
    EdgeAlreadyBlocked { a: Coordinate, b: Coordinate },
}

impl std::error::Error for IllegalWall {}

impl std::fmt::Display for IllegalWall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalWall::OutOfWallGrid { cell } => {
                write!(f, "Wall cell {} is outside the wall grid", cell)
            }
            IllegalWall::CellAlreadyUsed { cell } => {
                write!(f, "Wall cell {} already holds a wall", cell)
            }
            IllegalWall::EdgeAlreadyBlocked { a, b } => write!(
                f,
                "A wall already blocks the way between {} and {}",
                a, b
            ),
        }
    }
}

/// The error type for one submitted command.
///
/// All of these are recoverable: the command is rejected, the match state
/// is left unchanged, and the caller may submit again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    IllegalMove(IllegalMove),
    IllegalWall(IllegalWall),
    /// The acting seat is not the active player, or does not hold the
    /// selected wall token as available.
    WrongTurn { seat: usize },
    /// The command does not apply in the current selection phase.
    InvalidStateTransition {
        attempted: &'static str,
        state: &'static str,
    },
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::IllegalMove(err) => Some(err),
            ActionError::IllegalWall(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::IllegalMove(err) => write!(f, "Illegal move: {}", err),
            ActionError::IllegalWall(err) => write!(f, "Illegal wall placement: {}", err),
            ActionError::WrongTurn { seat } => write!(
                f,
                "Seat {} is not the active player or does not hold that wall token",
                seat
            ),
            ActionError::InvalidStateTransition { attempted, state } => {
                write!(f, "Cannot {} while {}", attempted, state)
            }
        }
    }
}

impl From<IllegalMove> for ActionError {
    fn from(err: IllegalMove) -> Self {
        ActionError::IllegalMove(err)
    }
}

impl From<IllegalWall> for ActionError {
    fn from(err: IllegalWall) -> Self {
        ActionError::IllegalWall(err)
    }
}

/// The error type for match construction.
///
/// Unlike [`ActionError`], these are fatal: a configuration that trips
/// one of these cannot produce a playable match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    BoardTooSmall { size: i8 },
    NotEnoughSeats { count: usize },
    StartOutOfBounds { seat: usize, start: Coordinate },
    StartsOverlap { first: usize, second: usize, coordinate: Coordinate },
    GoalOutOfBounds { seat: usize, value: i8 },
    StartOnGoal { seat: usize },
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::BoardTooSmall { size } => {
                write!(f, "Board size {} is too small, need at least 2", size)
            }
            SetupError::NotEnoughSeats { count } => {
                write!(f, "A match needs at least two seats, got {}", count)
            }
            SetupError::StartOutOfBounds { seat, start } => {
                write!(f, "Seat {} starts at {}, outside the board", seat, start)
            }
            SetupError::StartsOverlap {
                first,
                second,
                coordinate,
            } => write!(
                f,
                "Seats {} and {} both start at {}",
                first, second, coordinate
            ),
            SetupError::GoalOutOfBounds { seat, value } => {
                write!(f, "Seat {} has goal value {} outside the board", seat, value)
            }
            SetupError::StartOnGoal { seat } => {
                write!(f, "Seat {} would start on its own goal line", seat)
            }
        }
    }
}
