//! Browser wiring: locates the page elements, owns the running `Game`, drives
//! it from `requestAnimationFrame` and applies lifecycle UI effects (score text,
//! button label, game-over dialog).
//!
//! All state sits in one thread-local cell. Frame, key and click callbacks run
//! on the page's single thread and each borrows the cell for one synchronous
//! pass.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlDialogElement, HtmlElement,
    KeyboardEvent, window,
};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, GameEvent};
use crate::input::Direction;
use crate::render::render;

struct App {
    game: Game,
    ctx: CanvasRenderingContext2d,
    score_el: HtmlElement,
    start_button: HtmlElement,
    dialog: HtmlDialogElement,
    /// Id of the pending animation frame while the loop is live.
    frame_id: Option<i32>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static FRAME_CALLBACK: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

fn query<T: JsCast>(doc: &Document, selector: &str) -> Result<T, GameError> {
    doc.query_selector(selector)?
        .ok_or_else(|| GameError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| GameError::WrongElementType(selector.to_string()))
}

/// Size the canvas, hook up listeners and paint the idle board. The game starts
/// when the start button is clicked.
pub fn mount(config: GameConfig) -> Result<(), GameError> {
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;
    if APP.with(|cell| cell.borrow().is_some()) {
        return Err(GameError::AlreadyMounted);
    }
    let game = Game::new(config)?;
    let dom = game.config().dom.clone();

    let canvas: HtmlCanvasElement = query(&doc, &dom.canvas)?;
    let (width, height) = game.config().canvas_size();
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;
    let block = game.config().block_size as f64;
    ctx.scale(block, block)?;

    let score_el: HtmlElement = query(&doc, &dom.score)?;
    let start_button: HtmlElement = query(&doc, &dom.start_button)?;
    let dialog: HtmlDialogElement = query(&doc, &dom.dialog)?;
    start_button.set_text_content(Some(&dom.start_label));
    let button = start_button.clone();

    let mut app = App { game, ctx, score_el, start_button, dialog, frame_id: None };
    render(&app.game, &mut app.ctx);
    app.score_el.set_text_content(Some(&app.game.score().to_string()));

    APP.with(|cell| *cell.borrow_mut() = Some(app));
    install_frame_callback();

    // Keyboard: arrows move the player
    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let Some(dir) = Direction::from_key(&evt.key()) else {
                return;
            };
            evt.prevent_default();
            APP.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    app.game.move_player(dir);
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Start / restart button
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Err(err) = start_or_restart() {
                log::error!("failed to start game: {err}");
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    log::info!("mounted {}x{} board", width, height);
    Ok(())
}

/// Reset the game and (re)start the frame loop. A loop that is already live is
/// cancelled first so two loops never run together.
pub fn start_or_restart() -> Result<(), GameError> {
    let win = window().ok_or(GameError::NoWindow)?;
    APP.with(|cell| {
        let mut guard = cell.borrow_mut();
        let app = guard.as_mut().ok_or(GameError::NotMounted)?;
        if let Some(id) = app.frame_id.take() {
            win.cancel_animation_frame(id)?;
        }
        if let Err(err) = app.dialog.remove_attribute("open") {
            log::warn!("could not close game over dialog: {err:?}");
        }
        app.game.start();
        app.start_button
            .set_text_content(Some(&app.game.config().dom.restart_label));
        app.score_el.set_text_content(Some(&app.game.score().to_string()));
        app.frame_id = Some(request_frame(&win)?);
        Ok(())
    })
}

fn install_frame_callback() {
    FRAME_CALLBACK.with(|cb| {
        if cb.borrow().is_some() {
            return;
        }
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            if let Err(err) = on_frame(ts) {
                log::error!("frame failed: {err}");
            }
        }) as Box<dyn FnMut(f64)>);
        *cb.borrow_mut() = Some(closure);
    });
}

fn request_frame(win: &web_sys::Window) -> Result<i32, GameError> {
    FRAME_CALLBACK.with(|cb| {
        let cb = cb.borrow();
        let closure = cb.as_ref().ok_or(GameError::NotMounted)?;
        Ok(win.request_animation_frame(closure.as_ref().unchecked_ref())?)
    })
}

/// One frame: simulate, draw, then apply UI effects. The next frame is only
/// requested while the game keeps running.
fn on_frame(ts: f64) -> Result<(), GameError> {
    let win = window().ok_or(GameError::NoWindow)?;
    APP.with(|cell| {
        let mut guard = cell.borrow_mut();
        let Some(app) = guard.as_mut() else {
            return Ok(());
        };
        app.frame_id = None;

        let events = app.game.step(ts);
        render(&app.game, &mut app.ctx);
        app.score_el.set_text_content(Some(&app.game.score().to_string()));

        let mut over = false;
        for event in &events {
            if let GameEvent::GameOver { score } = event {
                over = true;
                log::info!("showing game over dialog (score {score})");
                app.start_button
                    .set_text_content(Some(&app.game.config().dom.start_label));
                // non-modal, like `dialog.show()`, so the start button stays usable
                if let Err(err) = app.dialog.set_attribute("open", "") {
                    log::warn!("could not show game over dialog: {err:?}");
                }
            }
        }

        if !over {
            app.frame_id = Some(request_frame(&win)?);
        }
        Ok(())
    })
}

/// Whether a frame is scheduled, i.e. the loop is live.
pub fn loop_active() -> bool {
    APP.with(|cell| cell.borrow().as_ref().is_some_and(|app| app.frame_id.is_some()))
}

/// Current score of the mounted game, if any.
pub fn current_score() -> Option<u32> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.game.score()))
}
