// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless curved list: a strip of uniform items bent onto an arc.
//!
//! This example shows how to:
//! - build a validated `TurnConfig`,
//! - drive `TurnLayout` over the in-memory `FixedStrip` host,
//! - react to live configuration changes through the re-layout request.
//!
//! Run:
//! - `RUST_LOG=understory_turn=debug cargo run -p understory_demos --example turn_strip`

use kurbo::Size;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_turn::{FixedStrip, Gravity, Orientation, TurnConfig, TurnLayout};

fn log_children(label: &str, host: &FixedStrip) {
    info!(label, attached = host.children().len(), "strip state");
    for child in host.children() {
        info!(
            index = child.index,
            x = child.frame.x0,
            y = child.frame.y0,
            rotation = child.transform.rotation,
            scale = child.transform.scale,
            alpha = child.transform.alpha,
            "child"
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TurnConfig::builder()
        .radius(1000)
        .peek_distance(150)
        .gravity(Gravity::Start)
        .orientation(Orientation::Vertical)
        .rotate(true)
        .min_scale(0.6)
        .min_alpha(0.3)
        .build()
        .expect("demo configuration is valid");
    let mut turn = TurnLayout::new(config);

    // 31 items, 100×100 each, in a 1000×1000 viewport.
    let mut host = FixedStrip::new(31, Size::new(100.0, 100.0), Size::new(1000.0, 1000.0))
        .with_margin_start(8.0);
    turn.on_layout_children(&mut host);
    log_children("after first layout", &host);

    let scrolled = turn.scroll_vertically_by(&mut host, 250);
    info!(scrolled, "scrolled");
    log_children("after scroll", &host);

    // Flip to the other edge; hosts answer the request with a full pass.
    turn.set_gravity(turn.config().gravity().flipped());
    turn.set_radius(600);
    if turn.take_layout_request() {
        turn.on_layout_children(&mut host);
    }
    log_children("end gravity, radius 600", &host);

    if let Err(err) = turn.set_min_alpha(1.5) {
        warn!(%err, "rejected alpha bound");
    }
}
