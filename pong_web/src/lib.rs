//! Browser front end for the Pong core
//!
//! Draws with the canvas 2D API, follows the mouse for the left paddle and
//! runs one tick per `requestAnimationFrame`.
//! Only builds for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod clock;
mod driver;
mod input;
mod logger;
mod renderer;

use clock::PerformanceClock;
use driver::Driver;
use input::PointerListener;
use log::LevelFilter;
use pong_core::{Config, GameRng, GameState};
use renderer::CanvasRenderer;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Running game bound to one canvas
#[wasm_bindgen]
pub struct PongApp {
    pointer: PointerListener,
    driver: Driver,
}

#[wasm_bindgen]
impl PongApp {
    /// Stop scheduling frames and stop listening to the mouse
    pub fn stop(&self) {
        self.shutdown();
        log::info!("game stopped");
    }
}

impl PongApp {
    fn shutdown(&self) {
        self.driver.stop();
        self.pointer.detach();
    }
}

// Freed from JS without `stop()`: the frame loop only holds itself, and the
// listener closure is about to be dropped.
impl Drop for PongApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Start a game sized to the canvas' pixel dimensions
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<PongApp, JsValue> {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = Config {
        arena_width: canvas.width() as f32,
        arena_height: canvas.height() as f32,
        ..Config::new()
    };
    let clock = PerformanceClock::new()?;
    let game = GameState::new(config, Box::new(clock), GameRng::from_entropy())
        .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e)))?;

    let renderer = CanvasRenderer::new(&canvas)?;
    let pointer = PointerListener::attach(&canvas, game.input())?;
    let driver = Driver::start(game, renderer)?;

    Ok(PongApp { pointer, driver })
}
