// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared vocabulary: gravity, orientation, and per-child transforms.

/// The viewport edge toward which items curl inward.
///
/// Together with [`Orientation`] this picks where the implied circle sits:
///
/// ```text
///  Start + Vertical    End + Vertical    Start + Horizontal   End + Horizontal
///  ┏─────────┓         ┏─────────┓       ┏─────────┓          ┏─────────┓
///  ┃ x       ┃         ┃       x ┃       ┃x       x┃          ┃         ┃
///  ┃  x      ┃         ┃      x  ┃       ┃ x     x ┃          ┃         ┃
///  ┃   x     ┃         ┃     x   ┃       ┃   xxx   ┃          ┃         ┃
///  ┃   x     ┃         ┃     x   ┃       ┃         ┃          ┃   xxx   ┃
///  ┃  x      ┃         ┃      x  ┃       ┃         ┃          ┃ x     x ┃
///  ┃ x       ┃         ┃       x ┃       ┃         ┃          ┃x       x┃
///  ┗─────────┛         ┗─────────┛       ┗─────────┛          ┗─────────┛
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gravity {
    /// The leading cross-axis edge (left for vertical lists, top for horizontal ones).
    #[default]
    Start,
    /// The trailing cross-axis edge (right for vertical lists, bottom for horizontal ones).
    End,
}

impl Gravity {
    /// Returns the opposite gravity.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    /// Sign of the center's displacement away from the gravity edge.
    pub(crate) const fn sign(self) -> f64 {
        match self {
            Self::Start => -1.0,
            Self::End => 1.0,
        }
    }

    /// How many viewport extents the gravity edge sits from the origin.
    pub(crate) const fn edge_multiplier(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::End => 1.0,
        }
    }
}

/// The primary scroll axis of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items stack top to bottom and scroll vertically.
    #[default]
    Vertical,
    /// Items stack left to right and scroll horizontally.
    Horizontal,
}

impl Orientation {
    /// Returns the other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// Display attributes computed for a single child.
///
/// Hosts apply these on top of the child's laid-out frame. Rotation is about
/// the child's own center; scale applies to both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildTransform {
    /// Rotation in degrees.
    pub rotation: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl ChildTransform {
    /// The transform that leaves a child untouched.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        scale: 1.0,
        alpha: 1.0,
    };
}

impl Default for ChildTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
