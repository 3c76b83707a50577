//! Drive the scroll features against the mock host and print what the
//! engine saw. Run with `cargo run -p glissade-orchestrator-core --example
//! step_frames`.

use anyhow::Result;

use glissade_api_core::IntersectionEntry;
use glissade_orchestrator_core::{FeaturesConfig, ScrollFeatures};
use glissade_test_fixtures::{demo_page, FrameStepper, RecordingProvider};

fn main() -> Result<()> {
    let page = demo_page();
    let mut provider = RecordingProvider::new();
    let log = provider.log();

    let mut features = ScrollFeatures::init(FeaturesConfig::default(), page.dom, &mut provider)?;
    println!(
        "bound {} anchors, watching {} reveal targets",
        features.nav().bindings().len(),
        features.reveal().watched().len()
    );

    let mut frames = FrameStepper::default();
    for _ in 0..10 {
        features.tick(frames.next());
    }

    let outcome = features.on_click(page.nav_anchor);
    println!("click on #section2 anchor -> {outcome:?}");

    features.on_entries(&[IntersectionEntry {
        target: page.reveal_a,
        ratio: 0.3,
        is_intersecting: true,
    }]);
    println!(
        "reveal_a state -> {:?}",
        features.reveal().state(page.reveal_a)
    );

    let log = log.borrow();
    println!(
        "engine saw {} frames and {} scroll request(s)",
        log.raf_times.len(),
        log.scroll_calls.len()
    );
    Ok(())
}
