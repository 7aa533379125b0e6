//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys`.
//! Native builds (tests, tooling) compile the calls away but still
//! type-check the format arguments.

macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
