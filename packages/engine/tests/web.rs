//! Browser tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use doomfire_engine::FireSim;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn steps_in_the_browser() {
    doomfire_engine::init();
    let mut fire = FireSim::new(80, 50);
    fire.set_intensity(100.0);
    fire.step();
    fire.render();
    assert_eq!(fire.colors_len(), 80 * 50);
}

#[wasm_bindgen_test]
fn rejected_config_is_a_js_error() {
    assert!(FireSim::from_config("{ \"height\": 0 }".to_string()).is_err());
}
