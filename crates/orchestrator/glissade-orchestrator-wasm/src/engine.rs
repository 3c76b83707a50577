//! Bridge to the external JS smooth-scroll engine.
//!
//! The factory is called once with the serialized engine config and must
//! return an instance exposing `raf(time)` and `scrollTo(element, opts)`.
//! Anything the factory or the methods throw is swallowed after
//! construction; construction failure itself surfaces as EngineUnavailable.

use js_sys::{Function, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::{JsCast, JsValue};

use glissade_api_core::ElementId;
use glissade_scroll_core::{EngineConfig, EngineProvider, ScrollEngine, ScrollToOptions};

use crate::dom::SharedDom;

struct JsScrollEngine {
    instance: JsValue,
    raf_fn: Function,
    scroll_to_fn: Function,
    dom: SharedDom,
}

impl ScrollEngine for JsScrollEngine {
    fn raf(&mut self, now_ms: f64) {
        let _ = self.raf_fn.call1(&self.instance, &JsValue::from_f64(now_ms));
    }

    fn scroll_to(&mut self, target: ElementId, opts: ScrollToOptions) {
        let Some(el) = self.dom.element(target) else {
            return;
        };
        let js_opts = js_sys::Object::new();
        let _ = Reflect::set(
            &js_opts,
            &JsValue::from_str("offset"),
            &JsValue::from_f64(f64::from(opts.offset_px)),
        );
        let _ = Reflect::set(
            &js_opts,
            &JsValue::from_str("duration"),
            &JsValue::from_f64(f64::from(opts.duration_s)),
        );
        let _ = self.scroll_to_fn.call2(&self.instance, &el, &js_opts);
    }
}

/// Constructs the JS engine instance from the config.
pub struct JsEngineProvider {
    factory: Function,
    dom: SharedDom,
}

impl JsEngineProvider {
    pub fn new(factory: Function, dom: SharedDom) -> Self {
        Self { factory, dom }
    }
}

fn method(instance: &JsValue, name: &str) -> Result<Function, String> {
    Reflect::get(instance, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| format!("engine instance has no {name}() method"))
}

impl EngineProvider for JsEngineProvider {
    fn construct(&mut self, cfg: &EngineConfig) -> Result<Box<dyn ScrollEngine>, String> {
        let cfg_js = swb::to_value(cfg).map_err(|e| format!("config serialize error: {e}"))?;
        let instance = self
            .factory
            .call1(&JsValue::UNDEFINED, &cfg_js)
            .map_err(|e| format!("engine factory threw: {e:?}"))?;
        if instance.is_undefined() || instance.is_null() {
            return Err("engine factory returned null/undefined".to_string());
        }
        let raf_fn = method(&instance, "raf")?;
        let scroll_to_fn = method(&instance, "scrollTo")?;
        Ok(Box::new(JsScrollEngine {
            instance,
            raf_fn,
            scroll_to_fn,
            dom: self.dom.clone(),
        }))
    }
}
