//! Canvas 2D renderer

use std::f64::consts::TAU;

use pong_core::{Arena, CircleSnapshot, RectSnapshot, Renderer, Snapshot};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const HUMAN_COLOR: &str = "#4CAF50";
const AI_COLOR: &str = "#E91E63";
const BALL_COLOR: &str = "#fff";
const NET_COLOR: &str = "#fff";

const NET_WIDTH: f64 = 4.0;
const NET_HEIGHT: f64 = 20.0;
const NET_GAP: f64 = 30.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn draw_net(&self, arena: &Arena) {
        let x = arena.width as f64 / 2.0 - NET_WIDTH / 2.0;
        self.ctx.set_fill_style_str(NET_COLOR);
        let mut y = 0.0;
        while y <= arena.height as f64 {
            self.ctx.fill_rect(x, y, NET_WIDTH, NET_HEIGHT);
            y += NET_GAP;
        }
    }

    fn draw_rect(&self, rect: &RectSnapshot, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn draw_circle(&self, circle: &CircleSnapshot, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(circle.x as f64, circle.y as f64, circle.r as f64, 0.0, TAU)?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, arena: &Arena, snapshot: &Snapshot) {
        self.ctx
            .clear_rect(0.0, 0.0, arena.width as f64, arena.height as f64);
        self.draw_net(arena);
        self.draw_rect(&snapshot.human_paddle, HUMAN_COLOR);
        self.draw_rect(&snapshot.ai_paddle, AI_COLOR);
        if let Err(e) = self.draw_circle(&snapshot.ball, BALL_COLOR) {
            log::warn!("failed to draw ball: {:?}", e);
        }
    }
}
