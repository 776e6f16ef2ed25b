use std::collections::BTreeSet;

use crate::{Board, Coordinate};

const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// The two diagonal deltas bracketing `direction`: one step forward
/// combined with one step to either side. Applied to the mover's tile,
/// they land on the tiles perpendicular to the occupied one.
fn diagonals(direction: (i8, i8)) -> [(i8, i8); 2] {
    if direction.0 == 0 {
        [(-1, direction.1), (1, direction.1)]
    } else {
        [(direction.0, -1), (direction.0, 1)]
    }
}

/// Whether a single-tile step from `from` to `to` is walled off or
/// leaves the board. Pawn occupancy is checked separately by the caller.
fn step_blocked(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    !board.in_bounds(to) || board.edge_blocked(from, to)
}

/// Computes every tile the pawn at `from` may move to this turn.
///
/// `other_pawns` holds the coordinates of all other pawns on the board.
/// For each orthogonal direction, the adjacent tile is a destination if
/// it is open. If it holds a pawn, the straight jump over that pawn is a
/// destination if its landing tile is open; when the straight jump is
/// unavailable (wall, board edge, or an occupied landing tile), the two
/// tiles diagonally adjacent over the occupied tile are each considered
/// on their own.
pub fn legal_destinations(
    from: Coordinate,
    board: &Board,
    other_pawns: &[Coordinate],
) -> BTreeSet<Coordinate> {
    let mut destinations = BTreeSet::new();
    for direction in DIRECTIONS {
        let adjacent = from.offset(direction.0, direction.1);
        if step_blocked(board, from, adjacent) {
            continue;
        }
        if !board.is_occupied(adjacent, other_pawns) {
            let _ = destinations.insert(adjacent);
            continue;
        }
        // A pawn sits on the adjacent tile; try to jump it.
        let landing = adjacent.offset(direction.0, direction.1);
        if !step_blocked(board, adjacent, landing) && !board.is_occupied(landing, other_pawns) {
            let _ = destinations.insert(landing);
        } else {
            for delta in diagonals(direction) {
                let diagonal = from.offset(delta.0, delta.1);
                if !step_blocked(board, adjacent, diagonal)
                    && !board.is_occupied(diagonal, other_pawns)
                {
                    let _ = destinations.insert(diagonal);
                }
            }
        }
    }
    destinations
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::WallPlacementInput;
    use crate::{coord, WallOrientation};

    fn destinations(
        from: Coordinate,
        board: &Board,
        other_pawns: &[Coordinate],
    ) -> Vec<Coordinate> {
        legal_destinations(from, board, other_pawns)
            .into_iter()
            .collect()
    }

    quickcheck! {
        fn destinations_are_in_bounds_and_unoccupied(
            input: WallPlacementInput,
            from: Coordinate,
            other: Coordinate
        ) -> bool {
            let mut board = Board::new(9);
            for &(cell, orientation) in &input.placements {
                let _ = board.place_wall(cell, orientation);
            }
            if !board.in_bounds(from) || !board.in_bounds(other) || from == other {
                return true;
            }
            let pawns = [other];
            legal_destinations(from, &board, &pawns)
                .into_iter()
                .all(|d| board.in_bounds(d) && d != other && d != from)
        }
    }

    #[test]
    fn open_center_has_four_destinations() {
        let board = Board::new(9);
        assert_eq!(
            destinations(coord!(4, 4), &board, &[]),
            vec![coord!(3, 4), coord!(4, 3), coord!(4, 5), coord!(5, 4)]
        );
    }

    #[test]
    fn corner_has_two_destinations() {
        let board = Board::new(9);
        assert_eq!(
            destinations(coord!(0, 0), &board, &[]),
            vec![coord!(0, 1), coord!(1, 0)]
        );
    }

    #[test]
    fn wall_removes_the_blocked_direction() {
        let mut board = Board::new(9);
        // Blocks (4, 4)-(4, 5) among others.
        board
            .place_wall(coord!(4, 4), WallOrientation::Horizontal)
            .unwrap();
        assert_eq!(
            destinations(coord!(4, 4), &board, &[]),
            vec![coord!(3, 4), coord!(4, 3), coord!(5, 4)]
        );
    }

    #[test]
    fn adjacent_pawn_allows_the_straight_jump() {
        let board = Board::new(9);
        let dests = destinations(coord!(4, 4), &board, &[coord!(4, 5)]);
        assert!(dests.contains(&coord!(4, 6)));
        // No diagonal alternatives while the straight jump is open.
        assert!(!dests.contains(&coord!(3, 5)));
        assert!(!dests.contains(&coord!(5, 5)));
        assert!(!dests.contains(&coord!(4, 5)));
    }

    #[test]
    fn wall_behind_opponent_enables_both_diagonals() {
        let mut board = Board::new(9);
        // Blocks (4, 5)-(4, 6).
        board
            .place_wall(coord!(4, 5), WallOrientation::Horizontal)
            .unwrap();
        let dests = destinations(coord!(4, 4), &board, &[coord!(4, 5)]);
        assert!(!dests.contains(&coord!(4, 6)));
        assert!(dests.contains(&coord!(3, 5)));
        assert!(dests.contains(&coord!(5, 5)));
    }

    #[test]
    fn board_edge_behind_opponent_enables_both_diagonals() {
        let board = Board::new(9);
        let dests = destinations(coord!(4, 7), &board, &[coord!(4, 8)]);
        assert!(dests.contains(&coord!(3, 8)));
        assert!(dests.contains(&coord!(5, 8)));
    }

    #[test]
    fn occupied_landing_tile_enables_both_diagonals() {
        let board = Board::new(9);
        let dests = destinations(coord!(4, 4), &board, &[coord!(4, 5), coord!(4, 6)]);
        assert!(!dests.contains(&coord!(4, 6)));
        assert!(dests.contains(&coord!(3, 5)));
        assert!(dests.contains(&coord!(5, 5)));
    }

    #[test]
    fn diagonals_are_evaluated_independently() {
        let mut board = Board::new(9);
        // Block the straight jump behind the opponent, and one diagonal.
        board
            .place_wall(coord!(4, 5), WallOrientation::Horizontal)
            .unwrap();
        // Blocks (4, 5)-(5, 5) via the vertical wall right of (4, 5).
        board
            .place_wall(coord!(4, 4), WallOrientation::Vertical)
            .unwrap();
        let dests = destinations(coord!(4, 4), &board, &[coord!(4, 5)]);
        assert!(dests.contains(&coord!(3, 5)));
        assert!(!dests.contains(&coord!(5, 5)));
    }

    #[test]
    fn wall_before_opponent_blocks_the_whole_direction() {
        let mut board = Board::new(9);
        // Blocks (4, 4)-(4, 5): the opponent cannot even be reached.
        board
            .place_wall(coord!(4, 4), WallOrientation::Horizontal)
            .unwrap();
        let dests = destinations(coord!(4, 4), &board, &[coord!(4, 5)]);
        assert!(!dests.contains(&coord!(4, 6)));
        assert!(!dests.contains(&coord!(3, 5)));
        assert!(!dests.contains(&coord!(5, 5)));
    }
}
