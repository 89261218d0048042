//! Buttons, their layout on the title screen, and pointer hit-testing.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True when both rects are non-empty and share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply each channel, saturating at 255.
    pub fn scaled(self, factor: f32) -> Self {
        let ch = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self::rgb(ch(self.r), ch(self.g), ch(self.b))
    }

    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonColors {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub text: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        let normal = Color::rgb(50, 50, 50);
        Self {
            normal,
            hovered: normal.scaled(1.5),
            pressed: normal.scaled(0.7),
            text: Color::rgb(255, 255, 255),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub bounds: Rect,
    pub label: &'static str,
    pub colors: ButtonColors,
    pub action: ButtonAction,
    pub hovered: bool,
}

impl Button {
    pub fn new(bounds: Rect, label: &'static str, action: ButtonAction) -> Self {
        Self {
            bounds,
            label,
            colors: ButtonColors::default(),
            action,
            hovered: false,
        }
    }
}

/// Play and Quit stacked under the middle of the viewport.
pub fn title_buttons(viewport: (i32, i32), cfg: &GameConfig) -> Vec<Button> {
    let (vw, vh) = viewport;
    let (w, h) = (cfg.button_width, cfg.button_height);
    let x = vw / 2 - w / 2;
    let play_y = vh / 2;
    let quit_y = vh / 2 + (h as f32 * 1.5) as i32;
    vec![
        Button::new(Rect::new(x, play_y, w, h), "Play", ButtonAction::Play),
        Button::new(Rect::new(x, quit_y, w, h), "Quit", ButtonAction::Quit),
    ]
}

/// Refresh hover state from a 1x1 probe at the pointer. When `clicked`, the
/// actions of every hovered button are returned in button order.
pub fn hit_test(buttons: &mut [Button], pointer: (i32, i32), clicked: bool) -> Vec<ButtonAction> {
    let probe = Rect::new(pointer.0, pointer.1, 1, 1);
    let mut fired = Vec::new();
    for button in buttons.iter_mut() {
        button.hovered = probe.intersects(&button.bounds);
        if button.hovered && clicked {
            fired.push(button.action);
        }
    }
    fired
}
