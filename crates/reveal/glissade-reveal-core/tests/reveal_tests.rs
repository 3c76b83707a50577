use glissade_api_core::{DomHost, IntersectionEntry};
use glissade_reveal_core::{RevealConfig, RevealObserver, RevealState};
use glissade_test_fixtures::demo_page;

fn entry(target: glissade_api_core::ElementId, ratio: f32, intersecting: bool) -> IntersectionEntry {
    IntersectionEntry {
        target,
        ratio,
        is_intersecting: intersecting,
    }
}

/// it should watch every element carrying the selector class
#[test]
fn start_selects_marked_elements() {
    let page = demo_page();
    let obs = RevealObserver::start(RevealConfig::default(), &page.dom);
    assert_eq!(obs.watched(), &[page.reveal_a, page.reveal_b]);
}

/// it should reveal at the threshold and add the marker class exactly once
#[test]
fn reveal_at_threshold_is_idempotent() {
    let mut page = demo_page();
    let mut obs = RevealObserver::start(RevealConfig::default(), &page.dom);

    // Below threshold: nothing happens.
    obs.on_entries(&[entry(page.reveal_a, 0.05, true)], &mut page.dom);
    assert_eq!(obs.state(page.reveal_a), RevealState::Unrevealed);
    assert!(!page.dom.has_class(page.reveal_a, "animate-in"));

    // At threshold: revealed.
    obs.on_entries(&[entry(page.reveal_a, 0.1, true)], &mut page.dom);
    assert_eq!(obs.state(page.reveal_a), RevealState::Revealed);
    assert!(page.dom.has_class(page.reveal_a, "animate-in"));

    // Repeated crossings stay a no-op.
    obs.on_entries(&[entry(page.reveal_a, 0.9, true)], &mut page.dom);
    let marks = page
        .dom
        .classes(page.reveal_a)
        .iter()
        .filter(|c| *c == "animate-in")
        .count();
    assert_eq!(marks, 1);
}

/// it should never unmark on subsequent visibility decreases
#[test]
fn revealed_is_terminal() {
    let mut page = demo_page();
    let mut obs = RevealObserver::start(RevealConfig::default(), &page.dom);

    obs.on_entries(&[entry(page.reveal_b, 0.5, true)], &mut page.dom);
    assert_eq!(obs.state(page.reveal_b), RevealState::Revealed);

    // Scrolled back out of view.
    obs.on_entries(&[entry(page.reveal_b, 0.0, false)], &mut page.dom);
    assert_eq!(obs.state(page.reveal_b), RevealState::Revealed);
    assert!(page.dom.has_class(page.reveal_b, "animate-in"));
}

/// it should handle batched entries independently of their order
#[test]
fn batch_entries_are_commutative() {
    let mut page = demo_page();
    let mut obs = RevealObserver::start(RevealConfig::default(), &page.dom);

    obs.on_entries(
        &[
            entry(page.reveal_b, 0.4, true),
            entry(page.reveal_a, 0.02, true),
        ],
        &mut page.dom,
    );
    assert_eq!(obs.state(page.reveal_a), RevealState::Unrevealed);
    assert_eq!(obs.state(page.reveal_b), RevealState::Revealed);
}

/// it should watch an empty set when no element carries the class
#[test]
fn empty_selection_is_fine() {
    let dom = glissade_test_fixtures::MockDom::new();
    let obs = RevealObserver::start(RevealConfig::default(), &dom);
    assert!(obs.watched().is_empty());
}

/// it should expose the configured root margin and selector for real hosts
#[test]
fn config_defaults_and_serde() {
    let cfg = RevealConfig::default();
    assert_eq!(cfg.threshold, 0.1);
    assert_eq!(cfg.root_margin(), "0px 0px -100px 0px");
    assert_eq!(cfg.selector(), ".animate-on-scroll");
    assert_eq!(cfg.marker_class, "animate-in");

    let s = serde_json::to_string(&cfg).unwrap();
    let cfg2: RevealConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(cfg, cfg2);
}
