//! Wall-clock timing for perf metrics. The browser has no `Instant`, so
//! wasm builds read `Date.now()` (millisecond resolution).

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        let started_at = js_sys::Date::now();
        #[cfg(not(target_arch = "wasm32"))]
        let started_at = std::time::Instant::now();
        Self { started_at }
    }

    /// None when metrics are off, so disabled timing costs nothing
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(Self::now)
    }

    fn ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        let ms = js_sys::Date::now() - self.started_at;
        #[cfg(not(target_arch = "wasm32"))]
        let ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
        ms
    }
}

/// Milliseconds since `timer` started; 0 for a timer that never ran
pub(crate) fn elapsed_ms(timer: Option<PerfTimer>) -> f64 {
    timer.map_or(0.0, |t| t.ms())
}
