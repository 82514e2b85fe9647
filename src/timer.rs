//! Scoped timing that logs elapsed time at `trace` level when dropped.

/// Logs how long it lived when dropped.
pub struct Timer<'a> {
    name: &'a str,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    start: f64,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        Timer {
            name,
            #[cfg(not(target_arch = "wasm32"))]
            start: std::time::Instant::now(),
            #[cfg(target_arch = "wasm32")]
            start: js_sys::Date::now(),
        }
    }

    /// Milliseconds since the timer was created.
    pub fn elapsed_ms(&self) -> f64 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        log::trace!("{}: {:.3}ms", self.name, self.elapsed_ms());
    }
}
