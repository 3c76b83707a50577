//! Deterministic hosts for glissade tests.
//!
//! MockDom implements the DomHost trait over an in-memory element list with
//! just enough selector support for the cores (`#id`, `.class`, `tag`, and
//! `a[href^="#"]`). RecordingEngine/RecordingProvider capture every engine
//! call through a shared log so tests can assert on them after the adapter
//! takes ownership. FrameStepper hands out monotonic frame timestamps.

use std::cell::RefCell;
use std::rc::Rc;

use glissade_api_core::{DomHost, ElementId, ElementIdAllocator, ReadyState};
use glissade_scroll_core::{EngineConfig, EngineProvider, ScrollEngine, ScrollToOptions};

#[derive(Debug, Clone)]
struct MockElement {
    id: ElementId,
    tag: String,
    dom_id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
}

/// In-memory document implementing DomHost.
#[derive(Debug)]
pub struct MockDom {
    ready: ReadyState,
    alloc: ElementIdAllocator,
    elements: Vec<MockElement>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    pub fn new() -> Self {
        Self {
            ready: ReadyState::Interactive,
            alloc: ElementIdAllocator::new(),
            elements: Vec::new(),
        }
    }

    pub fn with_ready_state(mut self, ready: ReadyState) -> Self {
        self.ready = ready;
        self
    }

    pub fn set_ready_state(&mut self, ready: ReadyState) {
        self.ready = ready;
    }

    /// Insert an element with the given tag, optional id attribute, classes,
    /// and extra attributes. Returns its handle.
    pub fn add_element(
        &mut self,
        tag: &str,
        dom_id: Option<&str>,
        classes: &[&str],
        attrs: &[(&str, &str)],
    ) -> ElementId {
        let id = self.alloc.alloc();
        self.elements.push(MockElement {
            id,
            tag: tag.to_string(),
            dom_id: dom_id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        id
    }

    /// Shorthand for `<a href="...">`.
    pub fn add_anchor(&mut self, href: &str) -> ElementId {
        self.add_element("a", None, &[], &[("href", href)])
    }

    /// Shorthand for `<div id="..." class="...">`.
    pub fn add_div(&mut self, dom_id: Option<&str>, classes: &[&str]) -> ElementId {
        self.add_element("div", dom_id, classes, &[])
    }

    /// Current class list of an element, for assertions.
    pub fn classes(&self, el: ElementId) -> Vec<String> {
        self.elements
            .iter()
            .find(|e| e.id == el)
            .map(|e| e.classes.clone())
            .unwrap_or_default()
    }

    fn matches(el: &MockElement, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            return el.dom_id.as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return el.classes.iter().any(|c| c == class);
        }
        // tag[attr^="prefix"]
        if let Some((tag, rest)) = selector.split_once('[') {
            let Some(body) = rest.strip_suffix(']') else {
                return false;
            };
            if !tag.is_empty() && el.tag != tag {
                return false;
            }
            if let Some((attr, quoted)) = body.split_once("^=") {
                let prefix = quoted.trim_matches('"');
                return el
                    .attrs
                    .iter()
                    .any(|(k, v)| k == attr && v.starts_with(prefix));
            }
            return false;
        }
        el.tag == selector
    }
}

impl DomHost for MockDom {
    fn ready_state(&self) -> ReadyState {
        self.ready
    }

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|e| Self::matches(e, selector))
            .map(|e| e.id)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| Self::matches(e, selector))
            .map(|e| e.id)
            .collect()
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        let el = self.elements.iter().find(|e| e.id == el)?;
        el.attrs
            .iter()
            .find_map(|(k, v)| if k == name { Some(v.clone()) } else { None })
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(el) = self.elements.iter_mut().find(|e| e.id == el) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.elements
            .iter()
            .find(|e| e.id == el)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }
}

/// One recorded scroll request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCall {
    pub target: ElementId,
    pub opts: ScrollToOptions,
}

/// Everything the engine saw, shared between the boxed engine and the test.
#[derive(Debug, Default)]
pub struct EngineLog {
    pub raf_times: Vec<f64>,
    pub scroll_calls: Vec<ScrollCall>,
}

/// Engine stand-in that records its inputs into a shared log.
pub struct RecordingEngine {
    log: Rc<RefCell<EngineLog>>,
}

impl ScrollEngine for RecordingEngine {
    fn raf(&mut self, now_ms: f64) {
        self.log.borrow_mut().raf_times.push(now_ms);
    }

    fn scroll_to(&mut self, target: ElementId, opts: ScrollToOptions) {
        self.log
            .borrow_mut()
            .scroll_calls
            .push(ScrollCall { target, opts });
    }
}

/// Provider producing RecordingEngines, or failing on demand.
#[derive(Default)]
pub struct RecordingProvider {
    log: Rc<RefCell<EngineLog>>,
    fail_with: Option<String>,
    pub constructed: u32,
    pub last_config: Option<EngineConfig>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every construct() call fail with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Shared handle onto the engine call log.
    pub fn log(&self) -> Rc<RefCell<EngineLog>> {
        Rc::clone(&self.log)
    }
}

impl EngineProvider for RecordingProvider {
    fn construct(&mut self, cfg: &EngineConfig) -> Result<Box<dyn ScrollEngine>, String> {
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        self.constructed += 1;
        self.last_config = Some(cfg.clone());
        Ok(Box::new(RecordingEngine {
            log: Rc::clone(&self.log),
        }))
    }
}

/// Monotonic frame timestamps at a fixed interval, 60 Hz by default.
#[derive(Debug)]
pub struct FrameStepper {
    now_ms: f64,
    step_ms: f64,
}

impl Default for FrameStepper {
    fn default() -> Self {
        Self {
            now_ms: 0.0,
            step_ms: 1000.0 / 60.0,
        }
    }
}

impl FrameStepper {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }

    /// Next frame timestamp.
    pub fn next(&mut self) -> f64 {
        self.now_ms += self.step_ms;
        self.now_ms
    }
}

/// Demo page: a nav anchor to `#section2`, a dangling anchor, the target
/// section, and two reveal candidates.
pub struct DemoPage {
    pub dom: MockDom,
    pub nav_anchor: ElementId,
    pub dangling_anchor: ElementId,
    pub section2: ElementId,
    pub reveal_a: ElementId,
    pub reveal_b: ElementId,
}

pub fn demo_page() -> DemoPage {
    let mut dom = MockDom::new();
    let nav_anchor = dom.add_anchor("#section2");
    let dangling_anchor = dom.add_anchor("#missing");
    let section2 = dom.add_div(Some("section2"), &[]);
    let reveal_a = dom.add_div(None, &["animate-on-scroll"]);
    let reveal_b = dom.add_div(None, &["animate-on-scroll", "card"]);
    DemoPage {
        dom,
        nav_anchor,
        dangling_anchor,
        section2,
        reveal_a,
        reveal_b,
    }
}
