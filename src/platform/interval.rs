//! Browser `setInterval` scheduler

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::Scheduler;

/// Fires a JS callback every interval. The callback is installed after the
/// engine exists, since it usually needs a handle back to the game.
#[derive(Default)]
pub struct IntervalScheduler {
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
    interval_ms: Option<u32>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }

    fn clear(&mut self) {
        if let Some(handle) = self.handle.take()
            && let Some(window) = web_sys::window()
        {
            window.clear_interval_with_handle(handle);
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, interval_ms: u32) {
        self.clear();
        self.interval_ms = None;

        let Some(callback) = &self.callback else {
            log::warn!("IntervalScheduler started without a callback");
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.interval_ms = Some(interval_ms);
            }
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    /// A browser interval cannot change period in place: clear and recreate
    fn reschedule(&mut self, interval_ms: u32) {
        self.start(interval_ms);
    }

    fn stop(&mut self) {
        self.clear();
        self.interval_ms = None;
    }

    fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }
}
