//! Clap button usage
//!
//! Composes the widget from its display children, mirrors the observed
//! count into host state, and drives a scripted run of claps with
//! fixed-step animation frames.
//!
//! Run with: cargo run -p ovation_widget --example usage

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use ovation_widget::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Host-local mirror of the clap count, fed by the observer
    let clapped = Rc::new(Cell::new(0u32));
    let mirror = clapped.clone();

    let mut clap = ClapButton::new()
        .child(clap_icon)
        .child(clap_count)
        .child(clap_total)
        .on_clap(move |state| mirror.set(state.count));

    let tree = clap.mount()?;
    tracing::info!(
        "mounted: total starts at {}",
        tree.find_by_class("total")
            .and_then(|e| e.text_content())
            .unwrap_or("?")
    );

    // Three claps, half a second of frames after each
    for _ in 0..3 {
        let tree = clap.click()?;
        tracing::info!(
            "clapped: bubble shows {:?}",
            tree.find_by_class("count").and_then(|e| e.text_content())
        );
        for _ in 0..30 {
            clap.tick(16.0);
        }
    }

    // Let the bursts run out
    while clap.is_animating() {
        clap.tick(16.0);
    }

    if clapped.get() > 0 {
        tracing::info!("you have clapped {} times", clapped.get());
    }
    tracing::info!(
        "final state: count={} total={}",
        clap.state().count,
        clap.state().count_total
    );
    Ok(())
}
