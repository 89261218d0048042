//! Level text format: one row per line, `.` floor, `w` wall, `g` goal,
//! `@` player on floor, `o` box on floor. Anything else is a wall.

use log::warn;

use super::{Board, Position, Tile, TileKind};

/// Decoded cell before it is placed on the grid.
fn decode(symbol: char) -> (TileKind, bool, bool) {
    // (kind, player, box)
    match symbol {
        '.' => (TileKind::Floor, false, false),
        'w' => (TileKind::Wall, false, false),
        'g' => (TileKind::Goal, false, false),
        '@' => (TileKind::Floor, true, false),
        'o' => (TileKind::Floor, false, true),
        _ => (TileKind::Wall, false, false),
    }
}

impl Board {
    /// Build a board from level text. Leading blank lines are skipped and the
    /// width comes from the first remaining row; short rows are padded with
    /// walls and long rows are cut. Malformed content is logged, never
    /// rejected.
    pub fn parse(text: &str) -> Board {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        if text.ends_with('\n') {
            lines.pop();
        }
        let blank = lines.iter().take_while(|l| l.is_empty()).count();
        if blank > 0 && blank < lines.len() {
            warn!("skipping {blank} blank line(s) before the first level row");
            lines.drain(..blank);
        }

        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            warn!("level text has an empty first row; loading an empty board");
            return Board::default();
        }
        let height = lines.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut player = None;
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                warn!("level row {row} has {len} cells, expected {width}");
            }
            let mut cells = line.chars();
            for col in 0..width {
                let position = Position::new(row, col);
                let symbol = cells.next().unwrap_or('w');
                let (kind, mut has_player, has_box) = decode(symbol);
                if !matches!(symbol, '.' | 'w' | 'g' | '@' | 'o') {
                    warn!("unknown level symbol {symbol:?} at {row},{col}; using wall");
                }
                if has_player && player.is_some() {
                    warn!("extra player at {row},{col} ignored");
                    has_player = false;
                }
                if has_player {
                    player = Some(position);
                }
                tiles.push(Tile {
                    kind,
                    position,
                    has_player,
                    has_box,
                });
            }
        }

        if player.is_none() {
            warn!("level has no player start");
        }

        Board {
            width,
            height,
            tiles,
            player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_at(b: &Board, row: usize, col: usize) -> TileKind {
        b.tile(Position::new(row, col)).unwrap().kind
    }

    #[test]
    fn decodes_every_symbol() {
        let b = Board::parse(".wg@o\n");
        assert_eq!((b.width(), b.height()), (5, 1));
        let kinds: Vec<_> = b.tiles().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TileKind::Floor,
                TileKind::Wall,
                TileKind::Goal,
                TileKind::Floor,
                TileKind::Floor
            ]
        );
        assert!(b.tile(Position::new(0, 3)).unwrap().has_player);
        assert!(b.tile(Position::new(0, 4)).unwrap().has_box);
        assert_eq!(b.player(), Some(Position::new(0, 3)));
    }

    #[test]
    fn unknown_symbols_become_walls() {
        let b = Board::parse("@#x\n");
        assert_eq!(kind_at(&b, 0, 1), TileKind::Wall);
        assert_eq!(kind_at(&b, 0, 2), TileKind::Wall);
    }

    #[test]
    fn trailing_newline_does_not_add_a_row() {
        assert_eq!(Board::parse("@.\n..\n").height(), 2);
        assert_eq!(Board::parse("@.\n..").height(), 2);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let b = Board::parse("@.\r\n.g\r\n");
        assert_eq!((b.width(), b.height()), (2, 2));
        assert_eq!(kind_at(&b, 1, 1), TileKind::Goal);
    }

    #[test]
    fn ragged_rows_are_padded_or_cut() {
        let b = Board::parse("@..\n.\n....g\n");
        assert_eq!((b.width(), b.height()), (3, 3));
        assert_eq!(kind_at(&b, 1, 0), TileKind::Floor);
        assert_eq!(kind_at(&b, 1, 1), TileKind::Wall);
        assert_eq!(kind_at(&b, 1, 2), TileKind::Wall);
        assert!(b.tiles().all(|t| t.kind != TileKind::Goal));
    }

    #[test]
    fn exactly_one_player_survives() {
        let b = Board::parse("@.@\n.@.\n");
        assert_eq!(b.tiles().filter(|t| t.has_player).count(), 1);
        assert_eq!(b.player(), Some(Position::new(0, 0)));
    }

    #[test]
    fn positions_are_row_col() {
        let b = Board::parse("g@.\nw.o\n...\n");
        for t in b.tiles() {
            assert_eq!(b.tile(t.position), Some(t));
        }
        assert_eq!(kind_at(&b, 1, 0), TileKind::Wall);
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let b = Board::parse("\n\r\n@.g\n");
        assert_eq!((b.width(), b.height()), (3, 1));
        assert_eq!(b.player(), Some(Position::new(0, 0)));
        assert_eq!(kind_at(&b, 0, 2), TileKind::Goal);
    }

    #[test]
    fn empty_text_gives_empty_board() {
        let b = Board::parse("");
        assert_eq!((b.width(), b.height()), (0, 0));
        assert_eq!(b.rows().count(), 0);
    }
}
