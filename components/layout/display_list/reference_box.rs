/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The reference box a `clip-path` is resolved against.
//!
//! <https://drafts.fxtf.org/css-masking-1/#typedef-geometry-box>

use style::values::generics::basic_shape::GeometryBox;

use crate::geom::{BorderRadius, LayoutMetrics, LayoutRect, deflate, inflate};

/// The rectangle that percentages in a shape resolve against.
///
/// SVG boxes (`fill-box`, `stroke-box` and `view-box`) have no meaning for
/// CSS boxes and use the border box. Nothing is clamped: a border wider than
/// the frame gives a padding box with a negative size.
pub fn reference_rect(geometry_box: GeometryBox, metrics: &LayoutMetrics) -> LayoutRect {
    match geometry_box {
        GeometryBox::BorderBox |
        GeometryBox::FillBox |
        GeometryBox::StrokeBox |
        GeometryBox::ViewBox => metrics.frame,
        GeometryBox::PaddingBox => deflate(&metrics.frame, &metrics.border),
        GeometryBox::ContentBox => deflate(&metrics.frame, &metrics.border_and_padding()),
        GeometryBox::MarginBox => inflate(&metrics.frame, &metrics.margin_outsets()),
    }
}

/// Adjusts the element's border-box corner radii to the edges of
/// `geometry_box`. Each corner moves with its two adjacent sides.
pub fn adjust_radii(
    geometry_box: GeometryBox,
    border_radius: &BorderRadius,
    metrics: &LayoutMetrics,
) -> BorderRadius {
    match geometry_box {
        GeometryBox::BorderBox |
        GeometryBox::FillBox |
        GeometryBox::StrokeBox |
        GeometryBox::ViewBox => *border_radius,
        GeometryBox::PaddingBox => border_radius.adjusted_by(&metrics.border, -1.),
        GeometryBox::ContentBox => {
            border_radius.adjusted_by(&metrics.border_and_padding(), -1.)
        },
        GeometryBox::MarginBox => border_radius.adjusted_by(&metrics.margin_outsets(), 1.),
    }
}
