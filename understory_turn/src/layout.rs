// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout orchestrator: full layout and scroll passes over a [`TurnHost`].

use kurbo::{Point, Rect, Size};

use crate::attenuation::scrolled_factor;
use crate::center::derive_center;
use crate::geometry::{along, extent_along, midpoint_along};
use crate::offset::{place_child, resolve_offset};
use crate::rotation::resolve_rotation;
use crate::{
    ChildGeometry, ChildTransform, ConfigError, Gravity, Orientation, TurnConfig, TurnHost,
};

/// Places a host's children on the arc described by a [`TurnConfig`].
///
/// This type:
/// - owns the configuration,
/// - caches the arc center derived on the last full layout pass,
/// - tracks whether a configuration change is waiting for a re-layout.
///
/// Setters never touch the host. They raise a re-layout request that the host
/// observes through [`needs_layout`](Self::needs_layout) or
/// [`take_layout_request`](Self::take_layout_request) and answers by calling
/// [`on_layout_children`](Self::on_layout_children).
#[derive(Clone, Debug)]
pub struct TurnLayout {
    config: TurnConfig,
    center: Point,
    needs_layout: bool,
}

impl Default for TurnLayout {
    fn default() -> Self {
        Self::new(TurnConfig::default())
    }
}

impl TurnLayout {
    /// Creates a layout for `config`. A fresh layout always needs a first pass.
    #[must_use]
    pub fn new(config: TurnConfig) -> Self {
        Self {
            config,
            center: Point::ZERO,
            needs_layout: true,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Returns the arc center derived on the last full layout pass.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Returns `true` if a configuration change is waiting for a full layout pass.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Returns and clears the pending re-layout request.
    pub fn take_layout_request(&mut self) -> bool {
        core::mem::replace(&mut self.needs_layout, false)
    }

    /// Whether the host should route vertical scrolls here.
    #[must_use]
    pub fn can_scroll_vertically(&self) -> bool {
        self.config.orientation() == Orientation::Vertical
    }

    /// Whether the host should route horizontal scrolls here.
    #[must_use]
    pub fn can_scroll_horizontally(&self) -> bool {
        self.config.orientation() == Orientation::Horizontal
    }

    fn request_layout(&mut self, reason: &'static str) {
        tracing::debug!(reason, "turn layout requested a re-layout");
        self.needs_layout = true;
    }

    /// Sets the arc radius; negatives clamp to zero and the peek distance follows it down.
    pub fn set_radius(&mut self, radius: i32) {
        self.config.set_radius(radius);
        self.request_layout("radius");
    }

    /// Sets the peek distance, clamped to `[0, radius]`.
    pub fn set_peek_distance(&mut self, peek: i32) {
        self.config.set_peek_distance(peek);
        self.request_layout("peek distance");
    }

    /// Sets the gravity.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.config.set_gravity(gravity);
        self.request_layout("gravity");
    }

    /// Sets the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.set_orientation(orientation);
        self.request_layout("orientation");
    }

    /// Enables or disables rotation.
    pub fn set_rotate(&mut self, rotate: bool) {
        self.config.set_rotate(rotate);
        self.request_layout("rotate");
    }

    /// Sets the scale at the viewport edges. Rejected values leave the layout untouched.
    pub fn set_min_scale(&mut self, min_scale: f32) -> Result<(), ConfigError> {
        self.config.set_min_scale(min_scale)?;
        self.request_layout("min scale");
        Ok(())
    }

    /// Sets the scale at the viewport center. Rejected values leave the layout untouched.
    pub fn set_max_scale(&mut self, max_scale: f32) -> Result<(), ConfigError> {
        self.config.set_max_scale(max_scale)?;
        self.request_layout("max scale");
        Ok(())
    }

    /// Sets the alpha at the viewport edges. Rejected values leave the layout untouched.
    pub fn set_min_alpha(&mut self, min_alpha: f32) -> Result<(), ConfigError> {
        self.config.set_min_alpha(min_alpha)?;
        self.request_layout("min alpha");
        Ok(())
    }

    /// Sets the alpha at the viewport center. Rejected values leave the layout untouched.
    pub fn set_max_alpha(&mut self, max_alpha: f32) -> Result<(), ConfigError> {
        self.config.set_max_alpha(max_alpha)?;
        self.request_layout("max alpha");
        Ok(())
    }

    /// Full layout pass.
    ///
    /// Runs the host's linear layout, re-derives the arc center from the
    /// current viewport, then places and transforms every attached child.
    /// Clears any pending re-layout request.
    pub fn on_layout_children<H: TurnHost + ?Sized>(&mut self, host: &mut H) {
        let orientation = self.config.orientation();
        host.layout_linear(orientation);
        let viewport = host.viewport();
        derive_center(
            self.config.gravity(),
            orientation,
            self.config.radius(),
            self.config.peek_distance(),
            viewport,
            &mut self.center,
        );
        tracing::debug!(
            x = self.center.x,
            y = self.center.y,
            width = viewport.width,
            height = viewport.height,
            "derived arc center"
        );
        self.apply_to_children(host);
        self.needs_layout = false;
    }

    /// Scroll pass along the vertical axis. Returns the pixels actually scrolled.
    ///
    /// Horizontal lists do not scroll vertically and return `0` untouched.
    pub fn scroll_vertically_by<H: TurnHost + ?Sized>(&mut self, host: &mut H, dy: i32) -> i32 {
        self.scroll_by(host, Orientation::Vertical, dy)
    }

    /// Scroll pass along the horizontal axis. Returns the pixels actually scrolled.
    ///
    /// Vertical lists do not scroll horizontally and return `0` untouched.
    pub fn scroll_horizontally_by<H: TurnHost + ?Sized>(&mut self, host: &mut H, dx: i32) -> i32 {
        self.scroll_by(host, Orientation::Horizontal, dx)
    }

    fn scroll_by<H: TurnHost + ?Sized>(
        &mut self,
        host: &mut H,
        axis: Orientation,
        delta: i32,
    ) -> i32 {
        if axis != self.config.orientation() {
            return 0;
        }
        let applied = host.scroll_linear_by(axis, delta);
        // The center belongs to the viewport, not the scroll position; reuse it.
        self.apply_to_children(host);
        applied
    }

    /// Computes where a child would be placed and how it would be transformed.
    ///
    /// Uses the center from the last full layout pass and does not touch any host.
    #[must_use]
    pub fn resolve_child(&self, viewport: Size, geometry: &ChildGeometry) -> (Rect, ChildTransform) {
        let frame = self.place(viewport, geometry);
        (frame, self.transform_for(viewport, frame))
    }

    fn apply_to_children<H: TurnHost + ?Sized>(&self, host: &mut H) {
        let viewport = host.viewport();
        let count = host.child_count();
        let mut placed = 0_usize;
        for index in 0..count {
            let Some(geometry) = host.child_geometry(index) else {
                tracing::trace!(index, "skipping child without recognizable geometry");
                continue;
            };
            let frame = self.place(viewport, &geometry);
            host.layout_child(index, frame);
            // Rotation and attenuation read the child back as the host now reports it.
            let laid_out = host.child_geometry(index).map_or(frame, |g| g.frame);
            host.set_child_transform(index, self.transform_for(viewport, laid_out));
            placed += 1;
        }
        tracing::trace!(count, placed, "applied turn transforms");
    }

    fn place(&self, viewport: Size, geometry: &ChildGeometry) -> Rect {
        let orientation = self.config.orientation();
        let offset = resolve_offset(
            self.config.radius(),
            self.config.peek_distance(),
            midpoint_along(geometry.frame, orientation),
            along(self.center, orientation),
        );
        place_child(
            self.config.gravity(),
            orientation,
            viewport,
            geometry.frame,
            geometry.margin_start,
            offset,
        )
    }

    fn transform_for(&self, viewport: Size, frame: Rect) -> ChildTransform {
        let orientation = self.config.orientation();
        let rotation = if self.config.rotate() {
            resolve_rotation(
                self.config.gravity(),
                orientation,
                self.config.radius(),
                midpoint_along(frame, orientation),
                along(self.center, orientation),
            )
        } else {
            0.0
        };
        let factor = || {
            scrolled_factor(
                along(frame.origin(), orientation),
                extent_along(frame.size(), orientation),
                extent_along(viewport, orientation),
            )
        };
        ChildTransform {
            rotation,
            scale: self.config.scale().resolve(factor),
            alpha: self.config.alpha().resolve(factor),
        }
    }
}
