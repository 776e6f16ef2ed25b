use crate::{coord, Board, Coordinate, Match};

/// Renders the match as text art, with each pawn drawn as its seat
/// number. Intended for logs and debugging; the y axis points up, so
/// the highest row is printed first.
pub fn visualize_match(game: &Match) -> String {
    let pawns: Vec<(char, Coordinate)> = game
        .players()
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let glyph = char::from_digit(seat as u32 + 1, 10).unwrap_or('?');
            (glyph, player.coordinate())
        })
        .collect();
    visualize_board(game.board(), &pawns)
}

/// Renders a board with the given pawn glyphs. Blocked vertical edges
/// are drawn as `│` between tiles, blocked horizontal edges as `─`
/// below the upper of the two tiles.
pub fn visualize_board(board: &Board, pawns: &[(char, Coordinate)]) -> String {
    let size = board.size();
    let mut result = String::new();
    for y in (0..size).rev() {
        let mut line = String::new();
        for x in 0..size {
            let tile = coord!(x, y);
            let glyph = pawns
                .iter()
                .find(|&&(_, coordinate)| coordinate == tile)
                .map(|&(glyph, _)| glyph)
                .unwrap_or('.');
            line.push(glyph);
            if x + 1 < size {
                line.push(if board.edge_blocked(tile, tile.offset(1, 0)) {
                    '│'
                } else {
                    ' '
                });
            }
        }
        result += line.trim_end();
        result.push('\n');
        if y > 0 {
            let mut line = String::new();
            for x in 0..size {
                line.push(if board.edge_blocked(coord!(x, y), coord!(x, y - 1)) {
                    '─'
                } else {
                    ' '
                });
                if x + 1 < size {
                    line.push(' ');
                }
            }
            result += line.trim_end();
            result.push('\n');
        }
    }
    result
}
