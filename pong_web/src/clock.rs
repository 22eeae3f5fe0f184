use pong_core::Clock;
use wasm_bindgen::JsValue;
use web_sys::Performance;

/// Clock backed by `performance.now()`
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new() -> Result<Self, JsValue> {
        let performance = web_sys::window()
            .and_then(|w| w.performance())
            .ok_or_else(|| JsValue::from_str("performance API unavailable"))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> u64 {
        self.performance.now() as u64
    }
}
