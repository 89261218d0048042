//! Puzzle board: typed tiles on a flat row-major grid, push-box movement and
//! the win check. Level text parsing lives in `parse`.

mod parse;

// --- Tiles -----------------------------------------------------------------

/// Static tile kind. Never changes after a level is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Floor,
    Wall,
    Goal,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}

/// Grid coordinate. `row` grows southward, `col` grows eastward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbour one step in `dir`, or `None` when it would leave the first
    /// row/column. Far edges are checked by the board.
    fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub position: Position,
    pub has_player: bool,
    pub has_box: bool,
}

// --- Movement --------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit step as (row, col).
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// What a move attempt did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Wall, edge, or a box that cannot travel. Board untouched.
    Blocked,
    Walked,
    Pushed,
}

// --- Board -----------------------------------------------------------------

/// Loaded level. Rebuilt wholesale on every (re)load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>, // length = width * height
    player: Option<Position>,
}

impl Board {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player(&self) -> Option<Position> {
        self.player
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.height && pos.col < self.width).then(|| pos.row * self.width + pos.col)
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|idx| &self.tiles[idx])
    }

    fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.index(pos).map(|idx| &mut self.tiles[idx])
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks(0) panics, so an empty board yields no rows.
        self.tiles.chunks(self.width.max(1))
    }

    /// Resolve one move with push-box rules. The whole move is rejected when
    /// the target is blocked or a pushed box has nowhere to go.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        let Some(from) = self.player else {
            return MoveOutcome::Blocked;
        };
        let Some(target) = from.step(dir).filter(|p| self.is_walkable(*p)) else {
            return MoveOutcome::Blocked;
        };

        let target_has_box = self.tile(target).is_some_and(|t| t.has_box);
        let outcome = if target_has_box {
            let Some(beyond) = target
                .step(dir)
                .filter(|p| self.is_walkable(*p) && !self.has_box(*p))
            else {
                return MoveOutcome::Blocked;
            };
            self.set_box(target, false);
            self.set_box(beyond, true);
            MoveOutcome::Pushed
        } else {
            MoveOutcome::Walked
        };

        self.set_player(from, false);
        self.set_player(target, true);
        self.player = Some(target);
        outcome
    }

    /// Every goal tile holds a box.
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .filter(|t| t.kind == TileKind::Goal)
            .all(|t| t.has_box)
    }

    fn is_walkable(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|t| t.kind.is_walkable())
    }

    fn has_box(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|t| t.has_box)
    }

    fn set_box(&mut self, pos: Position, value: bool) {
        if let Some(t) = self.tile_mut(pos) {
            t.has_box = value;
        }
    }

    fn set_player(&mut self, pos: Position, value: bool) {
        if let Some(t) = self.tile_mut(pos) {
            t.has_player = value;
        }
    }
}
