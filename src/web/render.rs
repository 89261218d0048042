//! Canvas renderer. Reads the app state each frame; never writes to it.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::{App, Mode};
use crate::board::{Board, Tile, TileKind};
use crate::ui::{Button, Color, Rect};

const TITLE_FONT: &str = "60px Constantia, Georgia, serif";
const BUTTON_FONT: &str = "24px Constantia, Georgia, serif";
const FONT_COLOR: Color = Color::rgb(255, 255, 255);

const FLOOR: &str = "#c9b48a";
const WALL: &str = "#5b4a3a";
const WALL_MORTAR: &str = "#3b2f25";
const GOAL: &str = "#d84a3a";
const BOX: &str = "#b5742d";
const BOX_EDGE: &str = "#6e4213";
const PLAYER: &str = "#2f6fd8";

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    tile: f64,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, tile_size: u32) -> Self {
        Self {
            canvas,
            ctx,
            tile: tile_size as f64,
        }
    }

    /// Drawable area in pixels, used by the app for layout.
    pub fn viewport(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }

    pub fn draw(&self, app: &App) {
        self.clear();
        match app.mode() {
            Mode::Title => self.draw_title(app),
            Mode::Loading(_) => self.draw_heading("Loading ..."),
            Mode::Game(board) => self.draw_board(board),
        }
    }

    pub fn clear(&self) {
        let (w, h) = self.viewport();
        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn draw_heading(&self, text: &str) {
        let (w, h) = self.viewport();
        self.centered_text(Rect::new(0, 0, w, h / 2), text, TITLE_FONT, FONT_COLOR);
    }

    fn draw_title(&self, app: &App) {
        self.draw_heading("Sokoban");
        for button in app.buttons() {
            self.draw_button(button, app.clicked());
        }
    }

    fn draw_button(&self, button: &Button, clicked: bool) {
        let Rect { x, y, w, h } = button.bounds;
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        let shadow = w * 0.04;
        self.ctx
            .set_fill_style_str(&button.colors.normal.scaled(0.7).css());
        self.ctx.fill_rect(x + shadow, y + shadow, w, h);

        let face = match (button.hovered, clicked) {
            (true, true) => button.colors.pressed,
            (true, false) => button.colors.hovered,
            _ => button.colors.normal,
        };
        self.ctx.set_fill_style_str(&face.css());
        self.ctx.fill_rect(x, y, w, h);
        self.centered_text(button.bounds, button.label, BUTTON_FONT, button.colors.text);
    }

    fn centered_text(&self, rect: Rect, text: &str, font: &str, color: Color) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&color.css());
        let cx = rect.x as f64 + rect.w as f64 / 2.0;
        let cy = rect.y as f64 + rect.h as f64 / 2.0;
        let _ = self.ctx.fill_text(text, cx, cy);
    }

    /// Board is drawn from a corner inset by a tenth of the viewport.
    fn draw_board(&self, board: &Board) {
        let (w, h) = self.viewport();
        let origin_x = w as f64 * 0.1;
        let origin_y = h as f64 * 0.1;
        for tile in board.tiles() {
            let px = origin_x + tile.position.col as f64 * self.tile;
            let py = origin_y + tile.position.row as f64 * self.tile;
            self.draw_tile(tile, px, py);
        }
    }

    fn draw_tile(&self, tile: &Tile, px: f64, py: f64) {
        let s = self.tile;
        let ctx = &self.ctx;
        match tile.kind {
            TileKind::Wall => {
                ctx.set_fill_style_str(WALL);
                ctx.fill_rect(px, py, s, s);
                ctx.set_stroke_style_str(WALL_MORTAR);
                ctx.set_line_width(2.0);
                line(ctx, px, py + s / 2.0, px + s, py + s / 2.0);
                line(ctx, px + s / 2.0, py, px + s / 2.0, py + s / 2.0);
                line(ctx, px + s / 4.0, py + s / 2.0, px + s / 4.0, py + s);
                ctx.stroke_rect(px + 1.0, py + 1.0, s - 2.0, s - 2.0);
            }
            TileKind::Floor | TileKind::Goal => {
                ctx.set_fill_style_str(FLOOR);
                ctx.fill_rect(px, py, s, s);
                if tile.kind == TileKind::Goal {
                    ctx.set_fill_style_str(GOAL);
                    circle(ctx, px + s / 2.0, py + s / 2.0, s * 0.15);
                }
            }
        }

        if tile.has_box {
            let inset = s * 0.1;
            let (bx, by, bs) = (px + inset, py + inset, s - 2.0 * inset);
            ctx.set_fill_style_str(BOX);
            ctx.fill_rect(bx, by, bs, bs);
            ctx.set_stroke_style_str(if tile.kind == TileKind::Goal { GOAL } else { BOX_EDGE });
            ctx.set_line_width(3.0);
            ctx.stroke_rect(bx, by, bs, bs);
            line(ctx, bx, by, bx + bs, by + bs);
            line(ctx, bx + bs, by, bx, by + bs);
        }

        if tile.has_player {
            ctx.set_fill_style_str(PLAYER);
            circle(ctx, px + s / 2.0, py + s / 2.0, s * 0.32);
        }
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

fn circle(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, r: f64) {
    ctx.begin_path();
    if ctx.arc(cx, cy, r, 0.0, std::f64::consts::TAU).is_ok() {
        ctx.fill();
    }
}
