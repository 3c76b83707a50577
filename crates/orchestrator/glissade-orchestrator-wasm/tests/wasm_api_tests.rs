#![cfg(target_arch = "wasm32")]
use glissade_orchestrator_wasm::GlissadePage;
use js_sys::Function;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// A factory producing an inert engine object with raf/scrollTo methods.
fn stub_factory() -> Function {
    Function::new_with_args(
        "config",
        "return { raf: function (t) {}, scrollTo: function (el, opts) {} };",
    )
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let page = GlissadePage::new(JsValue::UNDEFINED, stub_factory());
    assert!(page.is_ok());
    let page = page.unwrap();
    // The harness document is interactive, so setup runs immediately.
    assert!(page.is_initialized());
}

#[wasm_bindgen_test]
fn factory_returning_undefined_is_engine_unavailable() {
    let factory = Function::new_no_args("return undefined;");
    let page = GlissadePage::new(JsValue::NULL, factory);
    assert!(page.is_err());
}

#[wasm_bindgen_test]
fn factory_without_methods_is_engine_unavailable() {
    let factory = Function::new_no_args("return {};");
    let page = GlissadePage::new(JsValue::NULL, factory);
    assert!(page.is_err());
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    let page = GlissadePage::new(JsValue::from_str("not a config"), stub_factory());
    assert!(page.is_err());
}

#[wasm_bindgen_test]
fn empty_document_binds_nothing() {
    let page = GlissadePage::new(JsValue::NULL, stub_factory()).unwrap();
    assert_eq!(page.anchor_count(), 0);
    assert_eq!(page.watched_count(), 0);
}
