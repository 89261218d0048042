//! Level lookup by number and the shipped campaign.

use std::borrow::Cow;

use log::info;

use crate::board::Board;
use crate::error::LoadError;

/// Where level text comes from. Levels are numbered from 1.
pub trait LevelSource {
    /// Text of level `number`, or `None` when it does not exist.
    fn level_text(&self, number: u32) -> Option<Cow<'_, str>>;
}

/// Levels held in memory, level 1 first.
#[derive(Clone, Copy, Debug)]
pub struct StaticLevels(pub &'static [&'static str]);

impl LevelSource for StaticLevels {
    fn level_text(&self, number: u32) -> Option<Cow<'_, str>> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        self.0.get(idx).map(|text| Cow::Borrowed(*text))
    }
}

/// `assets/levels/<n>.txt`, compiled into the binary.
pub static CAMPAIGN: StaticLevels = StaticLevels(&[
    include_str!("../assets/levels/1.txt"),
    include_str!("../assets/levels/2.txt"),
    include_str!("../assets/levels/3.txt"),
    include_str!("../assets/levels/4.txt"),
    include_str!("../assets/levels/5.txt"),
]);

/// Reads `<dir>/<n>.txt` from disk. Any read failure counts as missing.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DirLevels {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirLevels {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LevelSource for DirLevels {
    fn level_text(&self, number: u32) -> Option<Cow<'_, str>> {
        let path = self.dir.join(format!("{number}.txt"));
        std::fs::read_to_string(path).ok().map(Cow::Owned)
    }
}

/// Fetch and parse a level, enforcing the grid ceiling.
pub fn load_level(
    source: &dyn LevelSource,
    number: u32,
    max_grid: usize,
) -> Result<Board, LoadError> {
    let text = source.level_text(number).ok_or(LoadError::NotFound(number))?;
    let board = Board::parse(&text);
    if board.width() > max_grid || board.height() > max_grid {
        return Err(LoadError::TooLarge {
            number,
            width: board.width(),
            height: board.height(),
            max: max_grid,
        });
    }
    info!(
        "loaded level {number} ({}x{})",
        board.width(),
        board.height()
    );
    Ok(board)
}
