//! Browser shell: canvas setup, DOM input listeners and the animation-frame
//! loop driving [`App::frame`].

mod render;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::app::App;
use crate::config::GameConfig;
use crate::error::StartupError;
use crate::input::InputState;
use crate::logging;

use render::Renderer;

const CANVAS_ID: &str = "sokoban-canvas";

/// Live game plus the bits of platform state the loop needs.
struct Shell {
    app: App,
    renderer: Renderer,
    last_ts: Option<f64>,
}

impl Shell {
    /// One animation frame. Returns false once the game has quit.
    fn tick(&mut self, ts: f64) -> bool {
        let dt = self.last_ts.map_or(0.0, |last| ((ts - last) / 1000.0) as f32);
        self.last_ts = Some(ts);

        let input = INPUT.with(|cell| cell.borrow_mut().take_frame());
        self.app.frame(&input, self.renderer.viewport(), dt);

        if self.app.should_quit() {
            self.teardown();
            return false;
        }
        self.renderer.draw(&self.app);
        true
    }

    fn teardown(&self) {
        self.renderer.clear();
        if let Some(err) = self.app.fatal() {
            alert(&format!("Sokoban stopped: {err}"));
        }
        info!("game loop stopped at level {}", self.app.level());
    }
}

thread_local! {
    static GAME: RefCell<Option<Shell>> = const { RefCell::new(None) };
    static INPUT: RefCell<InputState> = RefCell::new(InputState::default());
    static LISTENING: Cell<bool> = const { Cell::new(false) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Bring up the canvas and start the loop. A second call while a game is
/// running is ignored.
pub fn start(config: GameConfig) -> Result<(), StartupError> {
    logging::init(config.log_level);
    if GAME.with(|cell| cell.borrow().is_some()) {
        warn!("game already running");
        return Ok(());
    }

    let result = launch(config);
    if let Err(err) = &result {
        error!("startup failed: {err}");
        alert(&format!("Sokoban could not start: {err}"));
    }
    result
}

fn launch(config: GameConfig) -> Result<(), StartupError> {
    let win = window().ok_or(StartupError::NoWindow)?;
    let doc = win.document().ok_or(StartupError::NoDocument)?;
    let canvas = canvas(&doc, &config)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(StartupError::NoContext)?
        .dyn_into()
        .map_err(|_| StartupError::NoContext)?;

    if !LISTENING.with(Cell::get) {
        listen(&doc, &canvas)?;
        LISTENING.with(|l| l.set(true));
    }

    let renderer = Renderer::new(canvas, ctx, config.tile_size);
    let shell = Shell {
        app: App::with_campaign(config),
        renderer,
        last_ts: None,
    };
    GAME.with(|cell| cell.replace(Some(shell)));
    info!("sokoban started");

    start_loop();
    Ok(())
}

/// Create / reuse the game canvas.
fn canvas(doc: &Document, config: &GameConfig) -> Result<HtmlCanvasElement, StartupError> {
    let not_canvas = |_| StartupError::Dom(format!("#{CANVAS_ID} is not a canvas"));
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into().map_err(not_canvas)?
    } else {
        let c: HtmlCanvasElement = doc
            .create_element("canvas")?
            .dyn_into()
            .map_err(not_canvas)?;
        c.set_id(CANVAS_ID);
        c.set_attribute(
            "style",
            "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); background:#000;",
        )?;
        doc.body().ok_or(StartupError::NoBody)?.append_child(&c)?;
        c
    };
    canvas.set_width(config.canvas_width);
    canvas.set_height(config.canvas_height);
    Ok(canvas)
}

fn listen(doc: &Document, canvas: &HtmlCanvasElement) -> Result<(), StartupError> {
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let bound = INPUT.with(|cell| cell.borrow_mut().key_down(&evt.key()));
            if bound {
                // Keep arrow keys from scrolling the page.
                evt.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer coordinates are canvas-local (offset_x/offset_y).
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            INPUT.with(|cell| cell.borrow_mut().pointer_moved(evt.offset_x(), evt.offset_y()));
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            INPUT.with(|cell| {
                cell.borrow_mut()
                    .pointer_pressed(evt.button(), evt.offset_x(), evt.offset_y())
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let running = GAME.with(|cell| {
            let mut slot = cell.borrow_mut();
            let running = slot.as_mut().is_some_and(|shell| shell.tick(ts));
            if !running {
                slot.take();
            }
            running
        });
        if running {
            request_frame(&f);
        } else {
            // Drop our handle so the closure is freed once it returns.
            let _ = f.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), callback.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
