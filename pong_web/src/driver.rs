//! `requestAnimationFrame` loop: one update and one render per display refresh

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pong_core::{GameState, Renderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

pub struct Driver {
    pub(crate) callback: FrameCallback,
    pub(crate) frame_id: Rc<Cell<Option<i32>>>,
}

impl Driver {
    /// Schedule the first frame. Each frame schedules the next.
    pub fn start<R>(mut game: GameState, mut renderer: R) -> Result<Self, JsValue>
    where
        R: Renderer + 'static,
    {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_id = frame_id.clone();
        *callback.borrow_mut() = Some(Closure::new(move || {
            game.frame(&mut renderer);

            let scheduled = match next.borrow().as_ref() {
                Some(cb) => request_animation_frame(cb),
                None => return, // stopped
            };
            match scheduled {
                Ok(id) => next_id.set(Some(id)),
                Err(e) => {
                    log::error!("failed to schedule frame, stopping: {:?}", e);
                    next_id.set(None);
                }
            }
        }));

        let id = match callback.borrow().as_ref() {
            Some(cb) => request_animation_frame(cb)?,
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        frame_id.set(Some(id));

        Ok(Self { callback, frame_id })
    }

    /// Cancel the pending frame and release the loop
    pub fn stop(&self) {
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("failed to cancel frame {}: {:?}", id, e);
                }
            }
        }
        // Breaks the closure's reference to itself
        self.callback.borrow_mut().take();
    }
}
