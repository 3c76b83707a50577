//! Real-DOM host over web-sys.
//!
//! Elements crossing the boundary are interned into dense ids; the cores
//! only ever see ids. SharedDom is the cloneable handle threaded through
//! the features, the engine bridge, and the event closures.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use glissade_api_core::{DomHost, ElementId, ReadyState};

pub(crate) struct WebDom {
    document: web_sys::Document,
    elements: Vec<web_sys::Element>,
}

impl WebDom {
    fn new() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "no document object".to_string())?;
        Ok(Self {
            document,
            elements: Vec::new(),
        })
    }

    fn intern(&mut self, el: web_sys::Element) -> ElementId {
        if let Some(idx) = self.elements.iter().position(|e| e == &el) {
            return ElementId(idx as u32);
        }
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(el);
        id
    }

    fn element(&self, id: ElementId) -> Option<web_sys::Element> {
        self.elements.get(id.0 as usize).cloned()
    }

    fn ready_state(&self) -> ReadyState {
        match self.document.ready_state().as_str() {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        }
    }

    fn query(&mut self, selector: &str) -> Option<ElementId> {
        let el = self.document.query_selector(selector).ok().flatten()?;
        Some(self.intern(el))
    }

    fn query_all(&mut self, selector: &str) -> Vec<ElementId> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                out.push(self.intern(el));
            }
        }
        out
    }
}

/// Cloneable handle onto the interning DOM host.
#[derive(Clone)]
pub struct SharedDom(Rc<RefCell<WebDom>>);

impl SharedDom {
    pub fn new() -> Result<Self, String> {
        Ok(Self(Rc::new(RefCell::new(WebDom::new()?))))
    }

    pub(crate) fn document(&self) -> web_sys::Document {
        self.0.borrow().document.clone()
    }

    /// Live element handle for an interned id.
    pub(crate) fn element(&self, id: ElementId) -> Option<web_sys::Element> {
        self.0.borrow().element(id)
    }

    /// Intern an element arriving from a host callback.
    pub(crate) fn intern(&self, el: web_sys::Element) -> ElementId {
        self.0.borrow_mut().intern(el)
    }
}

impl DomHost for SharedDom {
    fn ready_state(&self) -> ReadyState {
        self.0.borrow().ready_state()
    }

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.0.borrow_mut().query(selector)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.0.borrow_mut().query_all(selector)
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        self.0.borrow().element(el)?.get_attribute(name)
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(el) = self.0.borrow().element(el) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.0
            .borrow()
            .element(el)
            .is_some_and(|e| e.class_list().contains(class))
    }
}
