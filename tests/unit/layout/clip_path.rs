/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::f32::consts::PI;

use euclid::approxeq::ApproxEq;
use euclid::{Point2D, Rect, Size2D};
use kurbo::Shape;
use layout::display_list::clip_path::build_shape_path;
use layout::geom::{LayoutPoint, LayoutRect, LayoutSize};
use layout::{BorderRadius, ClipPathGeometry, LayoutMetrics, PathSegment, resolve_clip_path};
use serde_json::json;
use servo_config::Preferences;
use style::clip_path::parse_clip_path_property;
use style::error_reporting::NullReporter;
use style::values::generics::basic_shape::FillRule;
use style::values::specified::{BasicShape, ClipPath, Ellipse, LengthPercentage, Path};

fn clip(css: &str) -> ClipPath {
    ClipPath::parse_str(css, &NullReporter).unwrap()
}

fn resolve(css: &str, frame: LayoutRect) -> ClipPathGeometry {
    resolve_clip_path(&clip(css), &LayoutMetrics::new(frame), &BorderRadius::zero())
}

fn frame(x: f32, y: f32, width: f32, height: f32) -> LayoutRect {
    Rect::new(Point2D::new(x, y), Size2D::new(width, height))
}

/// The center and radii of a full oval.
fn oval(geometry: &ClipPathGeometry) -> (LayoutPoint, LayoutSize) {
    assert_eq!(geometry.segments.len(), 2, "{:?}", geometry.segments);
    assert_eq!(geometry.segments[1], PathSegment::ClosePath);
    match geometry.segments[0] {
        PathSegment::Ellipse {
            center,
            radii,
            start_angle,
            end_angle,
            anticlockwise,
            ..
        } => {
            assert_eq!((start_angle, end_angle, anticlockwise), (0., 2. * PI, false));
            (center, radii)
        },
        ref segment => panic!("expected an ellipse, got {:?}", segment),
    }
}

#[test]
fn circle() {
    let _ = env_logger::try_init();
    let (center, radii) = oval(&resolve("circle(10px at 20px 30px)", frame(10., 20., 100., 50.)));
    assert_eq!(center, Point2D::new(30., 50.));
    assert_eq!(radii, Size2D::new(10., 10.));

    // Defaults to the middle of the box, and the closest side.
    let (center, radii) = oval(&resolve("circle()", frame(0., 0., 100., 50.)));
    assert_eq!(center, Point2D::new(50., 25.));
    assert_eq!(radii, Size2D::new(25., 25.));

    // Percentages are of the box diagonal over sqrt(2).
    let (_, radii) = oval(&resolve("circle(50%)", frame(0., 0., 100., 100.)));
    assert!(radii.width.approx_eq_eps(&50., &1e-3), "{:?}", radii);
}

#[test]
fn ellipse() {
    let (center, radii) = oval(&resolve("ellipse()", frame(0., 0., 100., 50.)));
    assert_eq!(center, Point2D::new(50., 25.));
    assert_eq!(radii, Size2D::new(50., 25.));

    let (center, radii) = oval(&resolve("ellipse(10% 50% at 0px 0px)", frame(5., 5., 100., 50.)));
    assert_eq!(center, Point2D::new(5., 5.));
    assert_eq!(radii, Size2D::new(10., 25.));
}

#[test]
fn lone_ellipse_radius_applies_to_both_axes() {
    let shape = BasicShape::Ellipse(Ellipse {
        rx: None,
        ry: Some(LengthPercentage::px(10.)),
        cx: None,
        cy: None,
    });
    let (_, radii) = oval(&build_shape_path(&shape, &frame(0., 0., 100., 50.)));
    assert_eq!(radii, Size2D::new(10., 10.));
}

#[test]
fn zero_radius_is_empty() {
    assert!(resolve("circle(0px)", frame(0., 0., 10., 10.)).is_empty());
    assert!(resolve("circle(at 0px 0px)", frame(0., 0., 10., 10.)).is_empty());
    assert!(resolve("ellipse(10px 0px)", frame(0., 0., 10., 10.)).is_empty());
}

#[test]
fn inset() {
    let geometry = resolve("inset(10px 20% 5px 0px)", frame(10., 20., 100., 50.));
    assert_eq!(
        geometry.segments,
        vec![
            PathSegment::MoveTo(Point2D::new(10., 30.)),
            PathSegment::LineTo(Point2D::new(90., 30.)),
            PathSegment::LineTo(Point2D::new(90., 65.)),
            PathSegment::LineTo(Point2D::new(10., 65.)),
            PathSegment::ClosePath,
        ]
    );
    assert_eq!(geometry.fill_rule, FillRule::Nonzero);
}

#[test]
fn rect_edges_are_from_the_top_left() {
    let geometry = resolve("rect(10px 90% 40px 10%)", frame(0., 0., 100., 50.));
    assert_eq!(
        geometry.segments,
        vec![
            PathSegment::MoveTo(Point2D::new(10., 10.)),
            PathSegment::LineTo(Point2D::new(90., 10.)),
            PathSegment::LineTo(Point2D::new(90., 40.)),
            PathSegment::LineTo(Point2D::new(10., 40.)),
            PathSegment::ClosePath,
        ]
    );
    // `auto` edges are the edges of the box.
    assert_eq!(
        resolve("rect(auto auto auto auto)", frame(3., 4., 10., 20.)),
        resolve("inset(0)", frame(3., 4., 10., 20.))
    );
}

#[test]
fn xywh_with_round() {
    let geometry = resolve("xywh(10px 5px 100px 40px round 50%)", frame(10., 10., 200., 100.));
    // The radius is half of the shorter side of the shape itself.
    assert_eq!(geometry.segments.len(), 6);
    assert_eq!(geometry.segments[0], PathSegment::MoveTo(Point2D::new(40., 15.)));
    match geometry.segments[3] {
        PathSegment::Ellipse { center, radii, .. } => {
            assert_eq!(center, Point2D::new(40., 35.));
            assert_eq!(radii, Size2D::new(20., 20.));
        },
        ref segment => panic!("expected the bottom left corner, got {:?}", segment),
    }
}

#[test]
fn degenerate_rectangles_are_empty() {
    let frame = frame(0., 0., 100., 50.);
    assert!(resolve("inset(0px 60% 0px 60%)", frame).is_empty());
    assert!(resolve("inset(30px 0px)", frame).is_empty());
    assert!(resolve("rect(10px 5px 40px 10px)", frame).is_empty());
    assert!(resolve("xywh(0px 0px 0px 10px)", frame).is_empty());
    assert!(resolve("xywh(0px 0px 10px 0px round 5px)", frame).is_empty());
}

#[test]
fn polygon_is_offset_by_the_box_origin() {
    let geometry = resolve(
        "polygon(evenodd, 0px 0px, 100% 0px, 50% 100%)",
        frame(10., 20., 100., 50.),
    );
    assert_eq!(
        geometry.segments,
        vec![
            PathSegment::MoveTo(Point2D::new(10., 20.)),
            PathSegment::LineTo(Point2D::new(110., 20.)),
            PathSegment::LineTo(Point2D::new(60., 70.)),
            PathSegment::ClosePath,
        ]
    );
    assert_eq!(geometry.fill_rule, FillRule::Evenodd);

    let geometry = resolve("polygon(0px 0px, 1px 0px, 1px 1px)", frame(0., 0., 10., 10.));
    assert_eq!(geometry.fill_rule, FillRule::Nonzero);
}

#[test]
fn path_data_is_never_drawn() {
    let shape = BasicShape::Path(Path {
        path_data: "M 0 0 L 10 10 Z".to_owned(),
    });
    assert!(build_shape_path(&shape, &frame(0., 0., 10., 10.)).is_empty());
}

#[test]
fn kurbo_backend() {
    let path = resolve("inset(5px)", frame(0., 0., 200., 100.)).to_bez_path();
    assert_eq!(path.elements().len(), 5);
    assert_eq!(path.bounding_box(), kurbo::Rect::new(5., 5., 195., 95.));

    let path = resolve("circle(10px)", frame(0., 0., 100., 100.)).to_bez_path();
    let bounds = path.bounding_box();
    assert!((bounds.x0 - 40.).abs() < 0.5, "{:?}", bounds);
    assert!((bounds.x1 - 60.).abs() < 0.5, "{:?}", bounds);
    assert!((bounds.y0 - 40.).abs() < 0.5, "{:?}", bounds);
    assert!((bounds.y1 - 60.).abs() < 0.5, "{:?}", bounds);

    let path = resolve("inset(0 round 10px)", frame(0., 0., 100., 100.)).to_bez_path();
    let bounds = path.bounding_box();
    assert!((bounds.width() - 100.).abs() < 0.5, "{:?}", bounds);
    assert!((bounds.height() - 100.).abs() < 0.5, "{:?}", bounds);
}

#[test]
fn end_to_end_from_property_values() {
    let metrics = LayoutMetrics::new(frame(0., 0., 100., 100.));
    let native = Preferences::default();
    let structured = Preferences {
        native_css_parsing_enabled: false,
    };

    let from_css = parse_clip_path_property(&json!("inset(10%) content-box"), &native).unwrap();
    let from_raw = parse_clip_path_property(
        &json!({ "shape": { "type": "inset", "top": "10%", "right": "10%", "bottom": "10%", "left": "10%" }, "geometryBox": "content-box" }),
        &structured,
    )
    .unwrap();
    assert_eq!(from_css, from_raw);
    assert_eq!(
        resolve_clip_path(&from_css, &metrics, &BorderRadius::zero()),
        resolve_clip_path(&from_raw, &metrics, &BorderRadius::zero())
    );
    assert!(!resolve_clip_path(&from_css, &metrics, &BorderRadius::zero()).is_empty());
}
