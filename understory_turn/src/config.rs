// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curvature parameters, their validation, and the builder that produces them.

use core::fmt;

use crate::{Envelope, Gravity, Orientation};

/// Names a configuration value that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// [`TurnConfigBuilder::min_scale`].
    MinScale,
    /// [`TurnConfigBuilder::max_scale`].
    MaxScale,
    /// [`TurnConfigBuilder::min_alpha`].
    MinAlpha,
    /// [`TurnConfigBuilder::max_alpha`].
    MaxAlpha,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinScale => "min_scale",
            Self::MaxScale => "max_scale",
            Self::MinAlpha => "min_alpha",
            Self::MaxAlpha => "max_alpha",
        })
    }
}

/// Errors produced while validating a [`TurnConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A scale or alpha bound violates the envelope rules.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// The offending value.
        field: ConfigField,
        /// What the value violated.
        reason: &'static str,
    },
}

impl ConfigError {
    /// The field that failed validation.
    #[must_use]
    pub const fn field(&self) -> ConfigField {
        match self {
            Self::InvalidConfiguration { field, .. } => *field,
        }
    }
}

const fn invalid(field: ConfigField, reason: &'static str) -> ConfigError {
    ConfigError::InvalidConfiguration { field, reason }
}

/// Checks scale and alpha envelopes.
///
/// NaN bounds are rejected along with out-of-range ones.
fn validate(scale: Envelope, alpha: Envelope) -> Result<(), ConfigError> {
    if alpha.min.is_nan() || alpha.min < 0.0 {
        return Err(invalid(ConfigField::MinAlpha, "cannot be lower than zero"));
    }
    if alpha.max.is_nan() || alpha.max > 1.0 {
        return Err(invalid(ConfigField::MaxAlpha, "cannot be higher than one"));
    }
    if scale.min.is_nan() || scale.min < 0.0 {
        return Err(invalid(ConfigField::MinScale, "cannot be lower than zero"));
    }
    if !scale.max.is_finite() {
        return Err(invalid(ConfigField::MaxScale, "must be finite"));
    }
    if alpha.min > alpha.max {
        return Err(invalid(ConfigField::MinAlpha, "cannot be higher than max_alpha"));
    }
    if scale.min > scale.max {
        return Err(invalid(ConfigField::MinScale, "cannot be higher than max_scale"));
    }
    Ok(())
}

fn clamp_radius(radius: i32) -> u32 {
    radius.max(0).unsigned_abs()
}

fn clamp_peek(peek: i32, radius: u32) -> u32 {
    peek.max(0).unsigned_abs().min(radius)
}

/// A validated set of curvature parameters.
///
/// Invariants held after every mutation:
/// - `peek_distance() <= radius()`,
/// - the scale and alpha envelopes satisfy the rules checked by
///   [`TurnConfigBuilder::build`].
///
/// The default configuration curls toward [`Gravity::Start`] on a
/// [`Orientation::Vertical`] list with a zero radius, no rotation, and unit
/// scale/alpha envelopes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurnConfig {
    gravity: Gravity,
    orientation: Orientation,
    radius: u32,
    peek: u32,
    rotate: bool,
    scale: Envelope,
    alpha: Envelope,
}

impl TurnConfig {
    /// Starts a [`TurnConfigBuilder`] with default values.
    #[must_use]
    pub fn builder() -> TurnConfigBuilder {
        TurnConfigBuilder::new()
    }

    /// The edge toward which items curl.
    #[must_use]
    pub const fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// The primary scroll axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Arc radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// How far the arc's apex protrudes past the gravity edge, in pixels.
    #[must_use]
    pub const fn peek_distance(&self) -> u32 {
        self.peek
    }

    /// Whether children rotate to follow the arc.
    #[must_use]
    pub const fn rotate(&self) -> bool {
        self.rotate
    }

    /// The scale envelope.
    #[must_use]
    pub const fn scale(&self) -> Envelope {
        self.scale
    }

    /// The alpha envelope.
    #[must_use]
    pub const fn alpha(&self) -> Envelope {
        self.alpha
    }

    /// Sets the radius, clamping negatives to zero.
    ///
    /// A radius below the current peek distance lowers the peek distance to match.
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = clamp_radius(radius);
        self.peek = self.peek.min(self.radius);
    }

    /// Sets the peek distance, clamped to `[0, radius]`.
    pub fn set_peek_distance(&mut self, peek: i32) {
        self.peek = clamp_peek(peek, self.radius);
    }

    /// Sets the gravity.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
    }

    /// Sets the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Enables or disables rotation.
    pub fn set_rotate(&mut self, rotate: bool) {
        self.rotate = rotate;
    }

    /// Sets the scale at the viewport edges.
    ///
    /// On error the previous value is kept.
    pub fn set_min_scale(&mut self, min_scale: f32) -> Result<(), ConfigError> {
        self.try_envelopes(Envelope::new(min_scale, self.scale.max), self.alpha)
    }

    /// Sets the scale at the viewport center.
    ///
    /// On error the previous value is kept.
    pub fn set_max_scale(&mut self, max_scale: f32) -> Result<(), ConfigError> {
        self.try_envelopes(Envelope::new(self.scale.min, max_scale), self.alpha)
    }

    /// Sets the alpha at the viewport edges.
    ///
    /// On error the previous value is kept.
    pub fn set_min_alpha(&mut self, min_alpha: f32) -> Result<(), ConfigError> {
        self.try_envelopes(self.scale, Envelope::new(min_alpha, self.alpha.max))
    }

    /// Sets the alpha at the viewport center.
    ///
    /// On error the previous value is kept.
    pub fn set_max_alpha(&mut self, max_alpha: f32) -> Result<(), ConfigError> {
        self.try_envelopes(self.scale, Envelope::new(self.alpha.min, max_alpha))
    }

    fn try_envelopes(&mut self, scale: Envelope, alpha: Envelope) -> Result<(), ConfigError> {
        validate(scale, alpha)?;
        self.scale = scale;
        self.alpha = alpha;
        Ok(())
    }
}

/// Collects curvature parameters and validates them into a [`TurnConfig`].
///
/// Radius and peek are clamped at [`build`](Self::build) time regardless of
/// the order they were supplied in: radius to `>= 0`, peek to `[0, radius]`.
/// Scale and alpha bounds are checked and reported as
/// [`ConfigError::InvalidConfiguration`].
///
/// ```rust
/// use understory_turn::{ConfigField, Gravity, TurnConfig};
///
/// let config = TurnConfig::builder()
///     .radius(800)
///     .peek_distance(900)
///     .gravity(Gravity::End)
///     .min_scale(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(config.peek_distance(), 800);
///
/// let err = TurnConfig::builder()
///     .min_alpha(0.2)
///     .max_alpha(0.1)
///     .build()
///     .unwrap_err();
/// assert_eq!(err.field(), ConfigField::MinAlpha);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnConfigBuilder {
    gravity: Gravity,
    orientation: Orientation,
    radius: i32,
    peek: i32,
    rotate: bool,
    min_scale: f32,
    max_scale: f32,
    min_alpha: f32,
    max_alpha: f32,
}

impl Default for TurnConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gravity: Gravity::Start,
            orientation: Orientation::Vertical,
            radius: 0,
            peek: 0,
            rotate: false,
            min_scale: 1.0,
            max_scale: 1.0,
            min_alpha: 1.0,
            max_alpha: 1.0,
        }
    }

    /// Sets the arc radius in pixels.
    #[must_use]
    pub const fn radius(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the peek distance in pixels.
    #[must_use]
    pub const fn peek_distance(mut self, peek: i32) -> Self {
        self.peek = peek;
        self
    }

    /// Sets the gravity.
    #[must_use]
    pub const fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enables or disables rotation.
    #[must_use]
    pub const fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// Sets the scale applied at the viewport edges.
    #[must_use]
    pub const fn min_scale(mut self, scale: f32) -> Self {
        self.min_scale = scale;
        self
    }

    /// Sets the scale applied at the viewport center.
    #[must_use]
    pub const fn max_scale(mut self, scale: f32) -> Self {
        self.max_scale = scale;
        self
    }

    /// Sets the alpha applied at the viewport edges.
    #[must_use]
    pub const fn min_alpha(mut self, alpha: f32) -> Self {
        self.min_alpha = alpha;
        self
    }

    /// Sets the alpha applied at the viewport center.
    #[must_use]
    pub const fn max_alpha(mut self, alpha: f32) -> Self {
        self.max_alpha = alpha;
        self
    }

    /// Validates the collected values.
    pub fn build(self) -> Result<TurnConfig, ConfigError> {
        let scale = Envelope::new(self.min_scale, self.max_scale);
        let alpha = Envelope::new(self.min_alpha, self.max_alpha);
        validate(scale, alpha)?;
        let radius = clamp_radius(self.radius);
        Ok(TurnConfig {
            gravity: self.gravity,
            orientation: self.orientation,
            radius,
            peek: clamp_peek(self.peek, radius),
            rotate: self.rotate,
            scale,
            alpha,
        })
    }
}
