//! Translation of raw key and pointer events into per-frame input snapshots.

use crate::app::FrameInput;
use crate::board::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
    Reset,
}

/// Key binding table. `key` is a DOM `KeyboardEvent.key` value.
pub fn command_for_key(key: &str) -> Option<Command> {
    let cmd = match key {
        "w" | "W" | "ArrowUp" => Command::Move(Direction::North),
        "s" | "S" | "ArrowDown" => Command::Move(Direction::South),
        "a" | "A" | "ArrowLeft" => Command::Move(Direction::West),
        "d" | "D" | "ArrowRight" => Command::Move(Direction::East),
        "r" | "R" => Command::Reset,
        "Escape" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Accumulates events between frames. The pointer position persists; every
/// other field is consumed by `take_frame`.
#[derive(Debug, Default)]
pub struct InputState {
    pointer: (i32, i32),
    clicked: bool,
    quit: bool,
    reset: bool,
    moves: Vec<Direction>,
}

impl InputState {
    /// Returns whether the key is bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        match command_for_key(key) {
            Some(Command::Move(dir)) => self.moves.push(dir),
            Some(Command::Reset) => self.reset = true,
            Some(Command::Quit) => self.quit = true,
            None => return false,
        }
        true
    }

    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    /// DOM button index; only the primary (left) button clicks.
    pub fn pointer_pressed(&mut self, button: i16, x: i32, y: i32) {
        self.pointer = (x, y);
        if button == 0 {
            self.clicked = true;
        }
    }

    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            clicked: std::mem::take(&mut self.clicked),
            quit_requested: std::mem::take(&mut self.quit),
            reset_requested: std::mem::take(&mut self.reset),
            moves: std::mem::take(&mut self.moves),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_directions() {
        assert_eq!(command_for_key("w"), Some(Command::Move(Direction::North)));
        assert_eq!(command_for_key("ArrowLeft"), Some(Command::Move(Direction::West)));
        assert_eq!(command_for_key("D"), Some(Command::Move(Direction::East)));
        assert_eq!(command_for_key("s"), Some(Command::Move(Direction::South)));
        assert_eq!(command_for_key("Escape"), Some(Command::Quit));
        assert_eq!(command_for_key("r"), Some(Command::Reset));
        assert_eq!(command_for_key("q"), None);
    }

    #[test]
    fn each_key_press_queues_one_move_in_order() {
        let mut input = InputState::default();
        assert!(input.key_down("d"));
        assert!(input.key_down("d"));
        assert!(input.key_down("w"));
        assert!(!input.key_down("x"));
        let frame = input.take_frame();
        assert_eq!(
            frame.moves,
            vec![Direction::East, Direction::East, Direction::North]
        );
        assert!(input.take_frame().moves.is_empty());
    }

    #[test]
    fn click_is_edge_triggered_and_pointer_sticks() {
        let mut input = InputState::default();
        input.pointer_moved(10, 20);
        input.pointer_pressed(0, 12, 22);
        let first = input.take_frame();
        assert!(first.clicked);
        assert_eq!(first.pointer, (12, 22));
        let second = input.take_frame();
        assert!(!second.clicked);
        assert_eq!(second.pointer, (12, 22));
    }

    #[test]
    fn right_button_does_not_click() {
        let mut input = InputState::default();
        input.pointer_pressed(2, 0, 0);
        assert!(!input.take_frame().clicked);
    }

    #[test]
    fn quit_and_reset_are_one_shot() {
        let mut input = InputState::default();
        input.key_down("Escape");
        input.key_down("r");
        let frame = input.take_frame();
        assert!(frame.quit_requested && frame.reset_requested);
        let frame = input.take_frame();
        assert!(!frame.quit_requested && !frame.reset_requested);
    }
}
