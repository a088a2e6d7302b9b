/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::{Point2D, Rect, SideOffsets2D, Size2D};
use style::values::generics::rect::Rect as Sides;
use style::values::specified::LengthPercentage;
use style_traits::CSSPixel;

pub type LayoutPoint = Point2D<f32, CSSPixel>;
pub type LayoutRect = Rect<f32, CSSPixel>;
pub type LayoutSize = Size2D<f32, CSSPixel>;
pub type LayoutSideOffsets = SideOffsets2D<f32, CSSPixel>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AutoOr<T> {
    LengthPercentage(T),
    Auto,
}

impl AutoOr<LengthPercentage> {
    /// The length this side contributes when growing a box outwards. Only
    /// absolute lengths count, `auto` and percentages contribute nothing.
    pub fn absolute_length(&self) -> f32 {
        match *self {
            AutoOr::LengthPercentage(LengthPercentage::Length(ref length)) => length.px(),
            AutoOr::LengthPercentage(LengthPercentage::Percentage(_)) | AutoOr::Auto => 0.,
        }
    }
}

/// The subset of an element's laid-out box that clip paths are resolved
/// against. `frame` is the border box.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub frame: LayoutRect,
    pub border: LayoutSideOffsets,
    pub padding: LayoutSideOffsets,
    pub margin: Sides<AutoOr<LengthPercentage>>,
}

impl LayoutMetrics {
    /// Metrics for a box with no border, padding or margin.
    pub fn new(frame: LayoutRect) -> Self {
        Self {
            frame,
            border: LayoutSideOffsets::zero(),
            padding: LayoutSideOffsets::zero(),
            margin: Sides::all(AutoOr::LengthPercentage(LengthPercentage::zero())),
        }
    }

    pub fn margin_outsets(&self) -> LayoutSideOffsets {
        LayoutSideOffsets::new(
            self.margin.top.absolute_length(),
            self.margin.right.absolute_length(),
            self.margin.bottom.absolute_length(),
            self.margin.left.absolute_length(),
        )
    }

    pub fn border_and_padding(&self) -> LayoutSideOffsets {
        LayoutSideOffsets::new(
            self.border.top + self.padding.top,
            self.border.right + self.padding.right,
            self.border.bottom + self.padding.bottom,
            self.border.left + self.padding.left,
        )
    }
}

/// Moves each edge of `rect` inwards by the matching offset.
///
/// Unlike `Rect::inner_rect` this never asserts: offsets larger than the
/// rect leave it with a negative size.
pub fn deflate(rect: &LayoutRect, offsets: &LayoutSideOffsets) -> LayoutRect {
    LayoutRect::new(
        LayoutPoint::new(rect.origin.x + offsets.left, rect.origin.y + offsets.top),
        LayoutSize::new(
            rect.size.width - offsets.left - offsets.right,
            rect.size.height - offsets.top - offsets.bottom,
        ),
    )
}

/// Moves each edge of `rect` outwards by the matching offset.
pub fn inflate(rect: &LayoutRect, offsets: &LayoutSideOffsets) -> LayoutRect {
    deflate(
        rect,
        &LayoutSideOffsets::new(-offsets.top, -offsets.right, -offsets.bottom, -offsets.left),
    )
}

/// The horizontal (`width`) and vertical (`height`) radius of each corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderRadius {
    pub top_left: LayoutSize,
    pub top_right: LayoutSize,
    pub bottom_right: LayoutSize,
    pub bottom_left: LayoutSize,
}

impl BorderRadius {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn uniform(radius: f32) -> Self {
        let radius = LayoutSize::new(radius, radius);
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_zero(&self) -> bool {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .all(|corner| corner.width <= 0. || corner.height <= 0.)
    }

    /// Grows or shrinks each corner by the offsets of its two adjacent
    /// sides, never going below zero. `sign` is `1.` to grow and `-1.` to
    /// shrink.
    pub fn adjusted_by(&self, offsets: &LayoutSideOffsets, sign: f32) -> Self {
        let adjust = |corner: LayoutSize, horizontal: f32, vertical: f32| {
            LayoutSize::new(
                (corner.width + sign * horizontal).max(0.),
                (corner.height + sign * vertical).max(0.),
            )
        };
        Self {
            top_left: adjust(self.top_left, offsets.left, offsets.top),
            top_right: adjust(self.top_right, offsets.right, offsets.top),
            bottom_right: adjust(self.bottom_right, offsets.right, offsets.bottom),
            bottom_left: adjust(self.bottom_left, offsets.left, offsets.bottom),
        }
    }

    /// Normalize radii that add up to > 100%.
    /// <https://www.w3.org/TR/css-backgrounds-3/#corner-overlap>
    /// > Let f = min(L_i/S_i), where i ∈ {top, right, bottom, left},
    /// > S_i is the sum of the two corresponding radii of the corners on side i,
    /// > and L_top = L_bottom = the width of the box,
    /// > and L_left = L_right = the height of the box.
    /// > If f < 1, then all corner radii are reduced by multiplying them by f.
    pub fn normalize(&mut self, size: &LayoutSize) {
        let f = (size.width / (self.top_left.width + self.top_right.width))
            .min(size.width / (self.bottom_left.width + self.bottom_right.width))
            .min(size.height / (self.top_left.height + self.bottom_left.height))
            .min(size.height / (self.top_right.height + self.bottom_right.height));
        if f < 1.0 {
            self.top_left = self.top_left * f;
            self.top_right = self.top_right * f;
            self.bottom_right = self.bottom_right * f;
            self.bottom_left = self.bottom_left * f;
        }
    }
}
