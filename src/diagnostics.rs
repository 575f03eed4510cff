//! Lightweight perf logging. Browser builds use the JS clock since
//! `std::time::Instant` is unavailable on wasm32.

/// Wall-clock timer for coarse request/startup timing.
pub struct PerfTimer {
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    started_at: f64,
}

impl PerfTimer {
    pub fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            started_at: std::time::Instant::now(),
            #[cfg(target_arch = "wasm32")]
            started_at: js_sys::Date::now(),
        }
    }

    fn elapsed_ms(&self) -> u128 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_millis()
        }
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.started_at).max(0.0) as u128
        }
    }

    pub fn log(&self, scope: &str, details: &str) {
        let elapsed_ms = self.elapsed_ms();
        if details.trim().is_empty() {
            eprintln!("[perf] {scope} took {elapsed_ms}ms");
        } else {
            eprintln!("[perf] {scope} took {elapsed_ms}ms | {details}");
        }
    }
}
