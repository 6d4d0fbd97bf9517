//! Browser timers owned by the component that starts them.
//!
//! Dropping a task clears the underlying interval or timeout, so tying the
//! value to a component's lifetime is enough to avoid leaked timers.

use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn millis(period: Duration) -> i32 {
    period.as_millis().min(i32::MAX as u128) as i32
}

/// Repeating `setInterval` callback.
pub struct IntervalTask {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTask {
    pub fn start(period: Duration, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(tick);
        let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis(period),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for IntervalTask {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// One-shot `setTimeout` callback.
pub struct TimeoutTask {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl TimeoutTask {
    pub fn start(delay: Duration, fire: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(fire);
        let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis(delay),
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for TimeoutTask {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
