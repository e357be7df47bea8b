// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_turn --heading-base-level=0

//! Understory Turn: a curved-list layout.
//!
//! This crate takes a strip of children that an ordinary linear layout has
//! already stacked along one axis and bends it onto the arc of a circle that
//! bulges in from one edge of the viewport. For each child it computes:
//!
//! - a cross-axis position on the arc,
//! - an optional rotation so the child follows the curvature,
//! - a uniform scale and an opacity that fade toward the viewport edges.
//!
//! It does not know about any widget or view system. Hosts implement
//! [`TurnHost`] to expose the viewport, the attached children, and their own
//! linear layout, and call into [`TurnLayout`] from their layout and scroll
//! callbacks.
//!
//! ## Concepts
//!
//! - [`Gravity`]: the viewport edge the arc bulges in from.
//! - [`Orientation`]: the scroll axis.
//! - *Radius*: the arc's radius in pixels.
//! - *Peek distance*: how far past the gravity edge the arc's apex reaches,
//!   clamped to `[0, radius]`.
//! - [`Envelope`]: a `[min, max]` range for scale or alpha. `min` applies at
//!   the viewport edges, `max` at the middle of the scroll axis. Passing
//!   exactly `1.0` for both bounds disables the attenuation.
//! - [`TurnConfig`]: the validated parameter set, built with
//!   [`TurnConfigBuilder`].
//!
//! The arc center is derived once per full layout pass
//! ([`TurnLayout::on_layout_children`]) and reused by scroll passes
//! ([`TurnLayout::scroll_vertically_by`], [`TurnLayout::scroll_horizontally_by`]).
//! Setters on [`TurnLayout`] raise a re-layout request instead of touching the
//! host; see [`TurnLayout::take_layout_request`].
//!
//! ## Minimal example
//!
//! [`FixedStrip`] is a small in-memory host that stacks uniform items:
//!
//! ```rust
//! use kurbo::Size;
//! use understory_turn::{FixedStrip, Gravity, TurnConfig, TurnLayout};
//!
//! let config = TurnConfig::builder()
//!     .radius(1000)
//!     .peek_distance(150)
//!     .gravity(Gravity::Start)
//!     .rotate(true)
//!     .min_alpha(0.5)
//!     .build()
//!     .unwrap();
//! let mut turn = TurnLayout::new(config);
//!
//! // 31 items, 100×100 each, in a 1000×1000 viewport.
//! let mut host = FixedStrip::new(31, Size::new(100.0, 100.0), Size::new(1000.0, 1000.0));
//! turn.on_layout_children(&mut host);
//!
//! // Scroll so that item 5 is centered on the scroll axis.
//! assert_eq!(turn.scroll_vertically_by(&mut host, 50), 50);
//! let centered = host.child_for_item(5).unwrap();
//! assert_eq!(centered.frame.x0, 150.0);
//! assert_eq!(centered.transform.alpha, 1.0);
//!
//! // Live changes are picked up on the next full pass.
//! turn.set_peek_distance(300);
//! assert!(turn.take_layout_request());
//! turn.on_layout_children(&mut host);
//! assert_eq!(host.child_for_item(5).unwrap().frame.x0, 300.0);
//! ```
//!
//! ## Degenerate geometry
//!
//! A zero radius, a peek equal to the radius, or children beyond the arc's
//! reach never produce NaN: offsets clamp to the chord endpoint
//! (`peek - radius`) and rotations saturate at ±90°. Missing children and a
//! zero-sized viewport are silent no-ops.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;

mod attenuation;
mod center;
mod config;
mod host;
mod layout;
mod offset;
mod rotation;
mod strip;
mod types;

pub use attenuation::{Envelope, scrolled_factor};
pub use center::derive_center;
pub use config::{ConfigError, ConfigField, TurnConfig, TurnConfigBuilder};
pub use host::{ChildGeometry, TurnHost};
pub use layout::TurnLayout;
pub use offset::{place_child, resolve_offset};
pub use rotation::{resolve_rotation, rotation_direction};
pub use strip::{FixedStrip, StripChild};
pub use types::{ChildTransform, Gravity, Orientation};
