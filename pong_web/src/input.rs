//! Pointer input handling

use pong_core::PointerInput;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

const EVENT: &str = "mousemove";

/// Convert a mouse event's client Y into canvas units.
///
/// The canvas may be scaled by CSS, so the offset is stretched back to the
/// canvas' own pixel height.
pub fn canvas_y(canvas: &HtmlCanvasElement, event: &MouseEvent) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    let scale = if rect.height() > 0.0 {
        canvas.height() as f64 / rect.height()
    } else {
        1.0
    };
    ((event.client_y() as f64 - rect.top()) * scale) as f32
}

/// `mousemove` listener feeding the human paddle
pub struct PointerListener {
    canvas: HtmlCanvasElement,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerListener {
    pub fn attach(canvas: &HtmlCanvasElement, input: PointerInput) -> Result<Self, JsValue> {
        let target = canvas.clone();
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            input.push(canvas_y(&target, &event));
        });

        canvas.add_event_listener_with_callback(EVENT, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            canvas: canvas.clone(),
            callback,
        })
    }

    /// Unregister before the closure is dropped, or the browser would call
    /// into freed memory
    pub fn detach(&self) {
        if let Err(e) = self
            .canvas
            .remove_event_listener_with_callback(EVENT, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", EVENT, e);
        }
    }
}
