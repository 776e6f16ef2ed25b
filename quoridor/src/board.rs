use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::IllegalWall;

/// A tile position on the board.
///
/// Valid positions satisfy `0 <= x < size` and `0 <= y < size`; values
/// outside that range are representable so that candidate destinations
/// can be checked with [`Board::in_bounds`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    /// The coordinate shifted by the given deltas. May leave the board.
    pub fn offset(self, dx: i8, dy: i8) -> Coordinate {
        Coordinate {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shorthand for creating a [`Coordinate`] from two expressions.
#[macro_export]
macro_rules! coord {
    ($x:expr, $y:expr) => {
        $crate::Coordinate { x: $x, y: $y }
    };
}

/// The orientation of a wall segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

/// A wall that has been committed to the board: its anchor cell in the
/// wall grid, plus its orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWall {
    pub cell: Coordinate,
    pub orientation: WallOrientation,
}

/// The board: grid geometry, tile-adjacency blocking and wall-grid
/// occupancy.
///
/// The board does not know about pawns; occupancy queries take the pawn
/// coordinates from the caller. Walls are permanent for the lifetime of
/// the board.
#[derive(Clone, Debug)]
pub struct Board {
    size: i8,
    /// Every wall placed so far, in placement order.
    ///
    /// The `used_cells` and `blocked_edges` fields are derived from this
    /// list.
    walls: Vec<PlacedWall>,
    /// Wall-grid cells that hold a wall, in either orientation.
    used_cells: HashSet<Coordinate>,
    /// Directed pairs of adjacent tiles whose shared edge is blocked.
    /// Each placement inserts both directions, so a single lookup is
    /// symmetric. Absent pairs are unblocked.
    blocked_edges: HashSet<(Coordinate, Coordinate)>,
}

impl Board {
    /// Creates an empty board with `size` x `size` tiles.
    ///
    /// Panics if `size < 2`. Construction from untrusted configuration
    /// goes through [`Match::new`](crate::Match::new), which reports a
    /// [`SetupError`](crate::SetupError) instead.
    pub fn new(size: i8) -> Self {
        assert!(size >= 2, "board size must be at least 2, got {}", size);
        Self {
            size,
            walls: Vec::new(),
            used_cells: HashSet::new(),
            blocked_edges: HashSet::new(),
        }
    }

    /// The number of tiles along one edge of the board.
    pub fn size(&self) -> i8 {
        self.size
    }

    /// Whether the coordinate lies on the board.
    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && coordinate.x < self.size
            && coordinate.y < self.size
    }

    /// Whether the coordinate equals any of the supplied pawn positions.
    pub fn is_occupied(&self, coordinate: Coordinate, occupants: &[Coordinate]) -> bool {
        occupants.contains(&coordinate)
    }

    /// Whether a wall blocks the edge between two adjacent tiles.
    ///
    /// Symmetric in its arguments. Edges that no wall has ever touched
    /// are unblocked.
    pub fn edge_blocked(&self, a: Coordinate, b: Coordinate) -> bool {
        self.blocked_edges.contains(&(a, b))
    }

    /// Whether the cell lies in the `(size - 1) x (size - 1)` wall grid.
    pub fn wall_cell_in_grid(&self, cell: Coordinate) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.size - 1 && cell.y < self.size - 1
    }

    /// The walls committed so far, in placement order.
    pub fn walls(&self) -> &[PlacedWall] {
        &self.walls
    }

    /// The two tile-edge pairs a wall at `cell` would block.
    ///
    /// The anchor cell sits at the top-right corner of the tile with the
    /// same coordinate: a horizontal wall spans the edges above its tile
    /// and above the right neighbor, a vertical wall spans the edges
    /// right of its tile and right of the upper neighbor.
    fn edge_pairs(cell: Coordinate, orientation: WallOrientation) -> [(Coordinate, Coordinate); 2] {
        match orientation {
            WallOrientation::Horizontal => [
                (cell, cell.offset(0, 1)),
                (cell.offset(1, 0), cell.offset(1, 1)),
            ],
            WallOrientation::Vertical => [
                (cell, cell.offset(1, 0)),
                (cell.offset(0, 1), cell.offset(1, 1)),
            ],
        }
    }

    /// Checks whether a wall could be placed at `cell` with the given
    /// orientation.
    ///
    /// This is the full placement legality check: grid bounds, anchor
    /// occupancy (irrespective of orientation) and overlap with already
    /// blocked edges. It does not verify that every player keeps a path
    /// to their goal edge; path preservation is left to a future rules
    /// extension.
    pub fn check_wall_placement(
        &self,
        cell: Coordinate,
        orientation: WallOrientation,
    ) -> Result<(), IllegalWall> {
        if !self.wall_cell_in_grid(cell) {
            return Err(IllegalWall::OutOfWallGrid { cell });
        }
        if self.used_cells.contains(&cell) {
            return Err(IllegalWall::CellAlreadyUsed { cell });
        }
        for (a, b) in Self::edge_pairs(cell, orientation) {
            if self.edge_blocked(a, b) {
                return Err(IllegalWall::EdgeAlreadyBlocked { a, b });
            }
        }
        Ok(())
    }

    /// Places a wall, blocking its two edge pairs permanently.
    ///
    /// Runs [`Self::check_wall_placement`] first; on failure nothing
    /// changes.
    pub fn place_wall(
        &mut self,
        cell: Coordinate,
        orientation: WallOrientation,
    ) -> Result<(), IllegalWall> {
        self.check_wall_placement(cell, orientation)?;
        for (a, b) in Self::edge_pairs(cell, orientation) {
            let _ = self.blocked_edges.insert((a, b));
            let _ = self.blocked_edges.insert((b, a));
        }
        let _ = self.used_cells.insert(cell);
        self.walls.push(PlacedWall { cell, orientation });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::WallPlacementInput;
    use crate::coord;

    fn neighbors(c: Coordinate) -> [Coordinate; 4] {
        [
            c.offset(-1, 0),
            c.offset(0, 1),
            c.offset(1, 0),
            c.offset(0, -1),
        ]
    }

    quickcheck! {
        fn in_bounds_matches_definition(c: Coordinate) -> bool {
            let board = Board::new(9);
            board.in_bounds(c) == (c.x >= 0 && c.y >= 0 && c.x < 9 && c.y < 9)
        }

        fn edge_blocking_is_symmetric(input: WallPlacementInput) -> bool {
            let mut board = Board::new(9);
            for &(cell, orientation) in &input.placements {
                let _ = board.place_wall(cell, orientation);
            }
            for x in 0..9 {
                for y in 0..9 {
                    let a = coord!(x, y);
                    for b in neighbors(a) {
                        if board.edge_blocked(a, b) != board.edge_blocked(b, a) {
                            return false;
                        }
                    }
                }
            }
            true
        }

        fn reused_cell_is_always_rejected(input: WallPlacementInput) -> bool {
            let mut board = Board::new(9);
            for &(cell, orientation) in &input.placements {
                let _ = board.place_wall(cell, orientation);
            }
            let placed: Vec<PlacedWall> = board.walls().to_vec();
            for wall in placed {
                for orientation in [WallOrientation::Horizontal, WallOrientation::Vertical] {
                    let walls_before = board.walls().len();
                    let edges_before = board.blocked_edges.len();
                    match board.place_wall(wall.cell, orientation) {
                        Err(IllegalWall::CellAlreadyUsed { cell }) if cell == wall.cell => {}
                        _ => return false,
                    }
                    if board.walls().len() != walls_before
                        || board.blocked_edges.len() != edges_before
                    {
                        return false;
                    }
                }
            }
            true
        }
    }

    #[test]
    fn horizontal_wall_blocks_both_edge_pairs() {
        let mut board = Board::new(9);
        board
            .place_wall(coord!(3, 3), WallOrientation::Horizontal)
            .unwrap();
        assert!(board.edge_blocked(coord!(3, 3), coord!(3, 4)));
        assert!(board.edge_blocked(coord!(3, 4), coord!(3, 3)));
        assert!(board.edge_blocked(coord!(4, 3), coord!(4, 4)));
        assert!(board.edge_blocked(coord!(4, 4), coord!(4, 3)));
        // The side edges stay open.
        assert!(!board.edge_blocked(coord!(3, 3), coord!(4, 3)));
        assert!(!board.edge_blocked(coord!(3, 4), coord!(4, 4)));
    }

    #[test]
    fn vertical_wall_blocks_both_edge_pairs() {
        let mut board = Board::new(9);
        board
            .place_wall(coord!(3, 3), WallOrientation::Vertical)
            .unwrap();
        assert!(board.edge_blocked(coord!(3, 3), coord!(4, 3)));
        assert!(board.edge_blocked(coord!(3, 4), coord!(4, 4)));
        assert!(!board.edge_blocked(coord!(3, 3), coord!(3, 4)));
        assert!(!board.edge_blocked(coord!(4, 3), coord!(4, 4)));
    }

    #[test]
    fn wall_outside_grid_is_rejected() {
        let mut board = Board::new(9);
        for cell in [coord!(8, 0), coord!(0, 8), coord!(-1, 3), coord!(3, -1)] {
            for orientation in [WallOrientation::Horizontal, WallOrientation::Vertical] {
                assert_eq!(
                    board.place_wall(cell, orientation),
                    Err(IllegalWall::OutOfWallGrid { cell })
                );
            }
        }
        assert!(board.walls().is_empty());
    }

    #[test]
    fn crossing_wall_shares_the_anchor_cell() {
        let mut board = Board::new(9);
        board
            .place_wall(coord!(3, 3), WallOrientation::Horizontal)
            .unwrap();
        assert_eq!(
            board.place_wall(coord!(3, 3), WallOrientation::Vertical),
            Err(IllegalWall::CellAlreadyUsed { cell: coord!(3, 3) })
        );
        assert_eq!(board.walls().len(), 1);
    }

    #[test]
    fn parallel_wall_sharing_an_edge_pair_is_rejected() {
        let mut board = Board::new(9);
        board
            .place_wall(coord!(3, 3), WallOrientation::Horizontal)
            .unwrap();
        // A horizontal wall one tile to the right would re-block the
        // edge above (4, 3).
        assert_eq!(
            board.place_wall(coord!(4, 3), WallOrientation::Horizontal),
            Err(IllegalWall::EdgeAlreadyBlocked {
                a: coord!(4, 3),
                b: coord!(4, 4),
            })
        );

        board
            .place_wall(coord!(5, 5), WallOrientation::Vertical)
            .unwrap();
        assert_eq!(
            board.place_wall(coord!(5, 6), WallOrientation::Vertical),
            Err(IllegalWall::EdgeAlreadyBlocked {
                a: coord!(5, 6),
                b: coord!(6, 6),
            })
        );
    }

    #[test]
    fn failed_placement_leaves_board_unchanged() {
        let mut board = Board::new(9);
        board
            .place_wall(coord!(2, 2), WallOrientation::Vertical)
            .unwrap();
        let walls_before = board.walls().to_vec();

        assert!(board
            .place_wall(coord!(2, 2), WallOrientation::Horizontal)
            .is_err());
        assert!(board
            .place_wall(coord!(2, 3), WallOrientation::Vertical)
            .is_err());
        assert!(board
            .place_wall(coord!(12, 3), WallOrientation::Vertical)
            .is_err());

        assert_eq!(board.walls(), walls_before.as_slice());
        assert!(!board.edge_blocked(coord!(2, 3), coord!(2, 4)));
    }
}
