/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Turns a parsed `clip-path` into path instructions for a drawing backend.
//!
//! <https://drafts.fxtf.org/css-masking-1/#the-clip-path>

use std::f32::consts::{FRAC_PI_2, PI};

use log::{trace, warn};
use style::values::generics::basic_shape::{FillRule, GeometryBox};
use style::values::specified::{
    BasicShape, Circle, ClipPath, Ellipse, InsetRect, LengthPercentage, Polygon, ShapeRect, Xywh,
};

use super::path::{PathSegment, PathSink};
use super::reference_box::{adjust_radii, reference_rect};
use crate::geom::{BorderRadius, LayoutMetrics, LayoutPoint, LayoutRect, LayoutSize};

/// The resolved outline of a clip path. No segments means that nothing of
/// the element is visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipPathGeometry {
    pub segments: Vec<PathSegment>,
    pub fill_rule: FillRule,
}

impl ClipPathGeometry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn with_segments(segments: Vec<PathSegment>) -> Self {
        Self {
            segments,
            fill_rule: FillRule::default(),
        }
    }

    /// Replays the segments into a `kurbo` path.
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        path.add_segments(&self.segments);
        path
    }
}

/// Resolves `clip_path` against the box described by `metrics`.
///
/// `border_radius` holds the element's border-box corner radii. Without a
/// geometry box the border box is used. Without a shape the clip is the
/// reference box itself, with the corner radii moved to its edges. Callers
/// check [`ClipPath::is_none`] first, since an empty value clips nothing.
pub fn resolve_clip_path(
    clip_path: &ClipPath,
    metrics: &LayoutMetrics,
    border_radius: &BorderRadius,
) -> ClipPathGeometry {
    let geometry_box = clip_path.geometry_box.unwrap_or(GeometryBox::BorderBox);
    let reference = reference_rect(geometry_box, metrics);

    match clip_path.shape {
        Some(ref shape) => build_shape_path(shape, &reference),
        None => {
            if is_degenerate(&reference) {
                trace!("Empty {} for clip-path", geometry_box.as_str());
                return ClipPathGeometry::empty();
            }
            let mut radii = adjust_radii(geometry_box, border_radius, metrics);
            radii.normalize(&reference.size);
            ClipPathGeometry::with_segments(rounded_rect(&reference, &radii))
        },
    }
}

/// Builds the outline of `shape`, with percentages resolved against
/// `reference`.
pub fn build_shape_path(shape: &BasicShape, reference: &LayoutRect) -> ClipPathGeometry {
    match *shape {
        BasicShape::Circle(ref circle) => circle_path(circle, reference),
        BasicShape::Ellipse(ref ellipse) => ellipse_path(ellipse, reference),
        BasicShape::Inset(ref inset) => inset_path(inset, reference),
        BasicShape::Rect(ref rect) => shape_rect_path(rect, reference),
        BasicShape::Xywh(ref xywh) => xywh_path(xywh, reference),
        BasicShape::Polygon(ref polygon) => polygon_path(polygon, reference),
        // Path data is never parsed, so there is nothing to draw.
        BasicShape::Path(_) => ClipPathGeometry::empty(),
    }
}

fn is_degenerate(rect: &LayoutRect) -> bool {
    !(rect.size.width > 0. && rect.size.height > 0.)
}

fn resolve_center(
    cx: &Option<LengthPercentage>,
    cy: &Option<LengthPercentage>,
    reference: &LayoutRect,
) -> LayoutPoint {
    let x = cx.map_or(reference.size.width / 2., |cx| cx.resolve(reference.size.width));
    let y = cy.map_or(reference.size.height / 2., |cy| {
        cy.resolve(reference.size.height)
    });
    LayoutPoint::new(reference.origin.x + x, reference.origin.y + y)
}

/// The distance from `center` to the closer of the two edges.
fn closest_side(center: f32, min_edge: f32, max_edge: f32) -> f32 {
    (min_edge - center).abs().min((max_edge - center).abs())
}

fn oval(center: LayoutPoint, radii: LayoutSize) -> ClipPathGeometry {
    if !(radii.width > 0. && radii.height > 0.) {
        trace!("Empty clip-path oval with radii {:?}", radii);
        return ClipPathGeometry::empty();
    }
    ClipPathGeometry::with_segments(vec![
        PathSegment::Ellipse {
            center,
            radii,
            rotation: 0.,
            start_angle: 0.,
            end_angle: 2. * PI,
            anticlockwise: false,
        },
        PathSegment::ClosePath,
    ])
}

fn circle_path(circle: &Circle, reference: &LayoutRect) -> ClipPathGeometry {
    let center = resolve_center(&circle.cx, &circle.cy, reference);
    let radius = match circle.radius {
        // <https://drafts.csswg.org/css-shapes/#funcdef-basic-shape-circle>
        Some(radius) => {
            let diagonal = reference.size.width.hypot(reference.size.height);
            radius.resolve(diagonal / 2f32.sqrt())
        },
        None => closest_side(center.x, reference.min_x(), reference.max_x())
            .min(closest_side(center.y, reference.min_y(), reference.max_y())),
    };
    oval(center, LayoutSize::new(radius, radius))
}

fn ellipse_path(ellipse: &Ellipse, reference: &LayoutRect) -> ClipPathGeometry {
    let center = resolve_center(&ellipse.cx, &ellipse.cy, reference);
    let (rx, ry) = ellipse.radii();
    let rx = match rx {
        Some(rx) => rx.resolve(reference.size.width),
        None => closest_side(center.x, reference.min_x(), reference.max_x()),
    };
    let ry = match ry {
        Some(ry) => ry.resolve(reference.size.height),
        None => closest_side(center.y, reference.min_y(), reference.max_y()),
    };
    oval(center, LayoutSize::new(rx, ry))
}

fn inset_path(inset: &InsetRect, reference: &LayoutRect) -> ClipPathGeometry {
    let (width, height) = (reference.size.width, reference.size.height);
    let top = inset.rect.top.resolve(height);
    let right = inset.rect.right.resolve(width);
    let bottom = inset.rect.bottom.resolve(height);
    let left = inset.rect.left.resolve(width);
    let shape = LayoutRect::new(
        LayoutPoint::new(reference.origin.x + left, reference.origin.y + top),
        LayoutSize::new(width - left - right, height - top - bottom),
    );
    rounded_shape(shape, &inset.round)
}

fn shape_rect_path(rect: &ShapeRect, reference: &LayoutRect) -> ClipPathGeometry {
    let (width, height) = (reference.size.width, reference.size.height);
    // Every edge is measured from the top or left edge of the reference box.
    let top = rect.rect.top.resolve(height);
    let right = rect.rect.right.resolve(width);
    let bottom = rect.rect.bottom.resolve(height);
    let left = rect.rect.left.resolve(width);
    let shape = LayoutRect::new(
        LayoutPoint::new(reference.origin.x + left, reference.origin.y + top),
        LayoutSize::new(right - left, bottom - top),
    );
    rounded_shape(shape, &rect.round)
}

fn xywh_path(xywh: &Xywh, reference: &LayoutRect) -> ClipPathGeometry {
    let (width, height) = (reference.size.width, reference.size.height);
    let shape = LayoutRect::new(
        LayoutPoint::new(
            reference.origin.x + xywh.x.resolve(width),
            reference.origin.y + xywh.y.resolve(height),
        ),
        LayoutSize::new(xywh.width.resolve(width), xywh.height.resolve(height)),
    );
    rounded_shape(shape, &xywh.round)
}

/// A rectangle with a uniform corner radius, where a percentage radius
/// resolves against the shorter side of the rectangle.
fn rounded_shape(shape: LayoutRect, round: &Option<LengthPercentage>) -> ClipPathGeometry {
    if is_degenerate(&shape) {
        trace!("Empty clip-path rectangle {:?}", shape);
        return ClipPathGeometry::empty();
    }
    let mut radii = match *round {
        Some(round) => {
            BorderRadius::uniform(round.resolve(shape.size.width.min(shape.size.height)))
        },
        None => BorderRadius::zero(),
    };
    radii.normalize(&shape.size);
    ClipPathGeometry::with_segments(rounded_rect(&shape, &radii))
}

fn polygon_path(polygon: &Polygon, reference: &LayoutRect) -> ClipPathGeometry {
    debug_assert!(polygon.coordinates.len() >= Polygon::MIN_COORDINATES);
    if polygon.coordinates.len() < Polygon::MIN_COORDINATES {
        warn!(
            "Ignoring polygon() with {} points",
            polygon.coordinates.len()
        );
        return ClipPathGeometry::empty();
    }

    let mut segments = Vec::with_capacity(polygon.coordinates.len() + 1);
    for (index, coordinate) in polygon.coordinates.iter().enumerate() {
        let point = LayoutPoint::new(
            reference.origin.x + coordinate.0.resolve(reference.size.width),
            reference.origin.y + coordinate.1.resolve(reference.size.height),
        );
        segments.push(match index {
            0 => PathSegment::MoveTo(point),
            _ => PathSegment::LineTo(point),
        });
    }
    segments.push(PathSegment::ClosePath);

    ClipPathGeometry {
        segments,
        fill_rule: polygon.fill.unwrap_or_default(),
    }
}

fn quarter_arc(center: LayoutPoint, radii: LayoutSize, start_angle: f32) -> PathSegment {
    PathSegment::Ellipse {
        center,
        radii,
        rotation: 0.,
        start_angle,
        end_angle: start_angle + FRAC_PI_2,
        anticlockwise: false,
    }
}

fn has_radius(corner: LayoutSize) -> bool {
    corner.width > 0. && corner.height > 0.
}

/// The outline of `rect`, clockwise from the top left corner. Corners with
/// a zero radius on either axis are square.
fn rounded_rect(rect: &LayoutRect, radii: &BorderRadius) -> Vec<PathSegment> {
    let (left, top) = (rect.min_x(), rect.min_y());
    let (right, bottom) = (rect.max_x(), rect.max_y());

    if radii.is_zero() {
        return vec![
            PathSegment::MoveTo(LayoutPoint::new(left, top)),
            PathSegment::LineTo(LayoutPoint::new(right, top)),
            PathSegment::LineTo(LayoutPoint::new(right, bottom)),
            PathSegment::LineTo(LayoutPoint::new(left, bottom)),
            PathSegment::ClosePath,
        ];
    }

    let mut segments = Vec::with_capacity(10);
    let corner = |segments: &mut Vec<PathSegment>,
                  radius: LayoutSize,
                  point: LayoutPoint,
                  center: LayoutPoint,
                  start_angle: f32| {
        if has_radius(radius) {
            segments.push(quarter_arc(center, radius, start_angle));
        } else {
            segments.push(PathSegment::LineTo(point));
        }
    };

    let top_left = if has_radius(radii.top_left) {
        radii.top_left
    } else {
        LayoutSize::zero()
    };
    segments.push(PathSegment::MoveTo(LayoutPoint::new(left + top_left.width, top)));
    corner(
        &mut segments,
        radii.top_right,
        LayoutPoint::new(right, top),
        LayoutPoint::new(right - radii.top_right.width, top + radii.top_right.height),
        -FRAC_PI_2,
    );
    corner(
        &mut segments,
        radii.bottom_right,
        LayoutPoint::new(right, bottom),
        LayoutPoint::new(
            right - radii.bottom_right.width,
            bottom - radii.bottom_right.height,
        ),
        0.,
    );
    corner(
        &mut segments,
        radii.bottom_left,
        LayoutPoint::new(left, bottom),
        LayoutPoint::new(left + radii.bottom_left.width, bottom - radii.bottom_left.height),
        FRAC_PI_2,
    );
    corner(
        &mut segments,
        radii.top_left,
        LayoutPoint::new(left, top),
        LayoutPoint::new(left + radii.top_left.width, top + radii.top_left.height),
        PI,
    );
    segments.push(PathSegment::ClosePath);
    segments
}
