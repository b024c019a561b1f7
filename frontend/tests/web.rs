//! Browser-side checks, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use frontend::config::{ApiConfig, RuntimeKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// The test harness runs in a plain browser context, so the shell marker
// must be absent.
#[wasm_bindgen_test]
fn plain_browser_is_not_the_embedded_shell() {
    assert_eq!(RuntimeKind::detect(), RuntimeKind::Browser);
    assert!(!ApiConfig::from_build_env().is_embedded_shell());
}
