//! Application state machine: Title → Loading → Game, driven once per frame.

use log::{debug, error, info};

use crate::board::{Board, Direction};
use crate::config::GameConfig;
use crate::error::LoadError;
use crate::event::{EventKind, EventQueue};
use crate::levels::{CAMPAIGN, LevelSource, load_level};
use crate::ui::{Button, ButtonAction, hit_test, title_buttons};

/// Everything the input source saw since the previous frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: (i32, i32),
    pub clicked: bool,
    pub quit_requested: bool,
    pub reset_requested: bool,
    pub moves: Vec<Direction>,
}

/// Countdown shown between the title and the first level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingTimer {
    pub total: f32,
    pub elapsed: f32,
}

impl LoadingTimer {
    fn armed(total: f32) -> Self {
        Self {
            total,
            elapsed: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Title,
    Loading(LoadingTimer),
    Game(Board),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Title => "title",
            Mode::Loading(_) => "loading",
            Mode::Game(_) => "game",
        }
    }
}

pub struct App {
    config: GameConfig,
    levels: Box<dyn LevelSource>,
    mode: Mode,
    /// Set on entering a mode; cleared once that mode has initialised.
    reset: bool,
    quit: bool,
    level: u32,
    buttons: Vec<Button>,
    events: EventQueue,
    viewport: (i32, i32),
    clicked: bool,
    fatal: Option<LoadError>,
}

impl App {
    pub fn new(config: GameConfig, levels: Box<dyn LevelSource>) -> Self {
        let events = EventQueue::with_capacity(config.event_capacity);
        let viewport = (config.canvas_width as i32, config.canvas_height as i32);
        Self {
            config,
            levels,
            mode: Mode::Title,
            reset: true,
            quit: false,
            level: 1,
            buttons: Vec::new(),
            events,
            viewport,
            clicked: false,
            fatal: None,
        }
    }

    /// App playing the levels shipped in `assets/levels`.
    pub fn with_campaign(config: GameConfig) -> Self {
        Self::new(config, Box::new(CAMPAIGN))
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the pointer was clicked during the last frame.
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Error that stopped the game, if any.
    pub fn fatal(&self) -> Option<&LoadError> {
        self.fatal.as_ref()
    }

    /// Run one frame: take input, update the current mode, hit-test buttons.
    pub fn frame(&mut self, input: &FrameInput, viewport: (i32, i32), dt: f32) {
        self.viewport = viewport;
        self.clicked = input.clicked;
        if input.quit_requested {
            info!("quit requested");
            self.quit = true;
        }
        if input.reset_requested {
            debug!("reset requested in {} mode", self.mode.name());
            self.reset = true;
        }
        for &dir in &input.moves {
            self.events.push(EventKind::Move(dir));
        }

        if !self.quit && self.update(dt) {
            for action in hit_test(&mut self.buttons, input.pointer, input.clicked) {
                self.press(action);
            }
        }

        // Anything the game mode did not consume belongs to no board.
        self.events.clear();
    }

    /// Returns false when the frame was cut short.
    fn update(&mut self, dt: f32) -> bool {
        match self.mode {
            Mode::Title => {
                self.update_title();
                true
            }
            Mode::Loading(_) => {
                self.update_loading(dt);
                true
            }
            Mode::Game(_) => self.update_game(),
        }
    }

    fn update_title(&mut self) {
        if self.reset {
            self.buttons = title_buttons(self.viewport, &self.config);
            self.reset = false;
        }
    }

    fn update_loading(&mut self, dt: f32) {
        if self.reset {
            self.buttons.clear();
            self.mode = Mode::Loading(LoadingTimer::armed(self.config.loading_seconds));
            self.reset = false;
        }
        let Mode::Loading(timer) = &mut self.mode else {
            return;
        };
        timer.elapsed += dt;
        if timer.elapsed > timer.total {
            self.level = 1;
            self.enter(Mode::Game(Board::default()));
        }
    }

    fn update_game(&mut self) -> bool {
        if self.reset {
            self.buttons.clear();
            match load_level(&*self.levels, self.level, self.config.max_grid) {
                Ok(board) => {
                    self.mode = Mode::Game(board);
                    self.reset = false;
                }
                Err(err) if err.is_fatal() => {
                    error!("cannot continue: {err}");
                    self.fatal = Some(err);
                    self.quit = true;
                    return false;
                }
                Err(err) => {
                    info!("{err}, campaign finished");
                    self.enter(Mode::Title);
                    return false;
                }
            }
        }

        let Mode::Game(board) = &mut self.mode else {
            return true;
        };
        let applied = self.events.drain(|event| match event.kind {
            EventKind::Move(dir) => {
                let outcome = board.apply_move(dir);
                debug!("move {dir:?}: {outcome:?}");
            }
        });
        // An empty board has no goals to cover and is never won.
        if applied > 0 && board.width() > 0 && board.is_solved() {
            info!("level {} solved", self.level);
            self.level += 1;
            self.reset = true;
        }
        true
    }

    fn press(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Play => self.enter(Mode::Loading(LoadingTimer::default())),
            ButtonAction::Quit => {
                info!("quit pressed");
                self.quit = true;
            }
        }
    }

    fn enter(&mut self, mode: Mode) {
        info!("{} -> {}", self.mode.name(), mode.name());
        self.mode = mode;
        self.reset = true;
    }
}
