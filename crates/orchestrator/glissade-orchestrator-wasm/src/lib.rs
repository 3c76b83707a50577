//! wasm-bindgen page adapter.
//!
//! Wires the scroll features to the real document: a requestAnimationFrame
//! driver for the engine, preventDefault click listeners for bound anchors,
//! and an IntersectionObserver feeding the reveal observer. Listeners and
//! frame closures are leaked on purpose; everything here lives until the
//! page context is torn down by the host.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use glissade_api_core::{DomHost, ElementId, IntersectionEntry, ReadyState};
use glissade_orchestrator_core::{FeaturesConfig, ScrollFeatures};

mod dom;
mod engine;

pub use dom::SharedDom;
pub use engine::JsEngineProvider;

type Features = ScrollFeatures<SharedDom>;

struct PageInner {
    features: Option<Features>,
}

/// Page-level handle. Constructing it performs the whole setup, deferred to
/// DOMContentLoaded when the document is still loading.
#[wasm_bindgen]
pub struct GlissadePage {
    inner: Rc<RefCell<PageInner>>,
}

#[wasm_bindgen]
impl GlissadePage {
    /// Create and wire the scroll features.
    ///
    /// `config` is a JSON object matching FeaturesConfig, or undefined/null
    /// for defaults. `engine_factory` is called once with the serialized
    /// engine config and must return an instance exposing `raf(time)` and
    /// `scrollTo(element, { offset, duration })`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, engine_factory: Function) -> Result<GlissadePage, JsError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        let cfg: FeaturesConfig = if config.is_undefined() || config.is_null() {
            FeaturesConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let dom = SharedDom::new().map_err(|reason| JsError::new(&reason))?;
        let inner = Rc::new(RefCell::new(PageInner { features: None }));

        if dom.ready_state() == ReadyState::Loading {
            // Same wait the page script does: finish wiring on the
            // content-loaded signal. Failures there can only be logged.
            let deferred_inner = Rc::clone(&inner);
            let deferred_dom = dom.clone();
            let listener = Closure::<dyn FnMut()>::new(move || {
                if let Err(reason) = setup(
                    &deferred_inner,
                    &deferred_dom,
                    cfg.clone(),
                    engine_factory.clone(),
                ) {
                    log::error!("deferred scroll setup failed: {reason}");
                }
            });
            dom.document()
                .add_event_listener_with_callback(
                    "DOMContentLoaded",
                    listener.as_ref().unchecked_ref(),
                )
                .map_err(|e| JsError::new(&format!("listener error: {e:?}")))?;
            listener.forget();
        } else {
            setup(&inner, &dom, cfg, engine_factory).map_err(|reason| JsError::new(&reason))?;
        }

        Ok(GlissadePage { inner })
    }

    /// False only while setup is deferred on a still-loading document.
    pub fn is_initialized(&self) -> bool {
        self.inner.borrow().features.is_some()
    }

    /// Number of anchors bound at setup.
    pub fn anchor_count(&self) -> u32 {
        self.inner
            .borrow()
            .features
            .as_ref()
            .map_or(0, |f| f.nav().bindings().len() as u32)
    }

    /// Number of elements watched for reveal.
    pub fn watched_count(&self) -> u32 {
        self.inner
            .borrow()
            .features
            .as_ref()
            .map_or(0, |f| f.reveal().watched().len() as u32)
    }

    /// Frames fed to the engine so far.
    pub fn frames(&self) -> f64 {
        self.inner
            .borrow()
            .features
            .as_ref()
            .map_or(0.0, |f| f.adapter().frame_loop().frames() as f64)
    }
}

/// Construct the features and attach every host hook.
fn setup(
    inner: &Rc<RefCell<PageInner>>,
    dom: &SharedDom,
    cfg: FeaturesConfig,
    engine_factory: Function,
) -> Result<(), String> {
    let mut provider = JsEngineProvider::new(engine_factory, dom.clone());
    let features = Features::init(cfg, dom.clone(), &mut provider).map_err(|e| e.to_string())?;

    let anchors: Vec<ElementId> = features.nav().bindings().iter().map(|b| b.anchor).collect();
    let watched: Vec<ElementId> = features.reveal().watched().to_vec();
    let threshold = features.reveal().config().threshold;
    let root_margin = features.reveal().config().root_margin();
    inner.borrow_mut().features = Some(features);

    wire_clicks(inner, dom, &anchors)?;
    wire_intersections(inner, dom, &watched, threshold, &root_margin)?;
    start_frame_loop(inner)?;
    Ok(())
}

/// One listener per bound anchor: suppress default navigation, forward the
/// click to the binder.
fn wire_clicks(
    inner: &Rc<RefCell<PageInner>>,
    dom: &SharedDom,
    anchors: &[ElementId],
) -> Result<(), String> {
    for &anchor in anchors {
        let Some(el) = dom.element(anchor) else {
            continue;
        };
        let click_inner = Rc::clone(inner);
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            if let Some(features) = click_inner.borrow_mut().features.as_mut() {
                let _ = features.on_click(anchor);
            }
        });
        el.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| format!("click listener error: {e:?}"))?;
        listener.forget();
    }
    Ok(())
}

fn wire_intersections(
    inner: &Rc<RefCell<PageInner>>,
    dom: &SharedDom,
    watched: &[ElementId],
    threshold: f32,
    root_margin: &str,
) -> Result<(), String> {
    if watched.is_empty() {
        return Ok(());
    }
    let cb_inner = Rc::clone(inner);
    let cb_dom = dom.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|value| {
                    let entry = value
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .ok()?;
                    Some(IntersectionEntry {
                        target: cb_dom.intern(entry.target()),
                        ratio: entry.intersection_ratio() as f32,
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            if let Some(features) = cb_inner.borrow_mut().features.as_mut() {
                features.on_entries(&batch);
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(f64::from(threshold)));
    options.set_root_margin(root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| format!("intersection observer error: {e:?}"))?;
    for &id in watched {
        if let Some(el) = dom.element(id) {
            observer.observe(&el);
        }
    }
    callback.forget();
    Ok(())
}

/// Self-rescheduling requestAnimationFrame chain feeding the engine; runs
/// until page teardown, no cancellation.
fn start_frame_loop(inner: &Rc<RefCell<PageInner>>) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_holder = Rc::clone(&holder);
    let tick_inner = Rc::clone(inner);
    let tick_window = window.clone();
    *holder.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        if let Some(features) = tick_inner.borrow_mut().features.as_mut() {
            features.tick(now_ms);
        }
        if let Some(cb) = tick_holder.borrow().as_ref() {
            let _ = tick_window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let Some(cb) = holder.borrow().as_ref() {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| format!("requestAnimationFrame error: {e:?}"))?;
    }
    // The closure chain keeps itself alive through `holder`.
    std::mem::forget(holder);
    Ok(())
}
