/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::{Point2D, Rect, SideOffsets2D, Size2D};
use layout::display_list::reference_box::{adjust_radii, reference_rect};
use layout::geom::{LayoutPoint, LayoutRect, LayoutSideOffsets, LayoutSize};
use layout::{AutoOr, BorderRadius, LayoutMetrics, PathSegment, resolve_clip_path};
use style::error_reporting::NullReporter;
use style::values::generics::basic_shape::GeometryBox;
use style::values::generics::rect::Rect as Sides;
use style::values::specified::{ClipPath, LengthPercentage};

fn clip(css: &str) -> ClipPath {
    ClipPath::parse_str(css, &NullReporter).unwrap()
}

fn metrics(frame: LayoutRect, border: f32) -> LayoutMetrics {
    LayoutMetrics {
        border: SideOffsets2D::new_all_same(border),
        ..LayoutMetrics::new(frame)
    }
}

fn rect_segments(x: f32, y: f32, width: f32, height: f32) -> Vec<PathSegment> {
    vec![
        PathSegment::MoveTo(Point2D::new(x, y)),
        PathSegment::LineTo(Point2D::new(x + width, y)),
        PathSegment::LineTo(Point2D::new(x + width, y + height)),
        PathSegment::LineTo(Point2D::new(x, y + height)),
        PathSegment::ClosePath,
    ]
}

#[test]
fn padding_box_is_inset_by_the_border() {
    let metrics = metrics(Rect::new(Point2D::zero(), Size2D::new(200., 100.)), 5.);

    assert_eq!(
        reference_rect(GeometryBox::PaddingBox, &metrics),
        LayoutRect::new(LayoutPoint::new(5., 5.), LayoutSize::new(190., 90.))
    );

    // Radii shrink by the border width, and stop at zero.
    assert_eq!(
        adjust_radii(GeometryBox::PaddingBox, &BorderRadius::uniform(8.), &metrics),
        BorderRadius::uniform(3.)
    );
    assert_eq!(
        adjust_radii(GeometryBox::PaddingBox, &BorderRadius::uniform(3.), &metrics),
        BorderRadius::zero()
    );

    let geometry = resolve_clip_path(&clip("padding-box"), &metrics, &BorderRadius::uniform(3.));
    assert_eq!(geometry.segments, rect_segments(5., 5., 190., 90.));
}

#[test]
fn content_box_is_inset_by_border_and_padding() {
    let metrics = LayoutMetrics {
        padding: SideOffsets2D::new(1., 2., 3., 4.),
        ..metrics(Rect::new(Point2D::new(10., 10.), Size2D::new(100., 50.)), 2.)
    };
    assert_eq!(
        reference_rect(GeometryBox::ContentBox, &metrics),
        LayoutRect::new(LayoutPoint::new(16., 13.), LayoutSize::new(90., 42.))
    );
    let geometry = resolve_clip_path(&clip("content-box"), &metrics, &BorderRadius::zero());
    assert_eq!(geometry.segments, rect_segments(16., 13., 90., 42.));
}

#[test]
fn margin_box_grows_box_and_radii() {
    let metrics = LayoutMetrics {
        margin: Sides::all(AutoOr::LengthPercentage(LengthPercentage::px(10.))),
        ..LayoutMetrics::new(Rect::new(Point2D::new(10., 10.), Size2D::new(100., 100.)))
    };
    assert_eq!(
        reference_rect(GeometryBox::MarginBox, &metrics),
        LayoutRect::new(LayoutPoint::new(0., 0.), LayoutSize::new(120., 120.))
    );
    assert_eq!(
        adjust_radii(GeometryBox::MarginBox, &BorderRadius::uniform(5.), &metrics),
        BorderRadius::uniform(15.)
    );

    let geometry = resolve_clip_path(&clip("margin-box"), &metrics, &BorderRadius::uniform(5.));
    // A move, four corner arcs and a close.
    assert_eq!(geometry.segments.len(), 6);
    assert_eq!(geometry.segments[0], PathSegment::MoveTo(Point2D::new(15., 0.)));
    match geometry.segments[1] {
        PathSegment::Ellipse { center, radii, .. } => {
            assert_eq!(center, Point2D::new(105., 15.));
            assert_eq!(radii, Size2D::new(15., 15.));
        },
        ref segment => panic!("expected the top right corner, got {:?}", segment),
    }
}

#[test]
fn relative_margins_contribute_nothing() {
    let metrics = LayoutMetrics {
        margin: Sides::new(
            AutoOr::Auto,
            AutoOr::LengthPercentage(LengthPercentage::percent(10.)),
            AutoOr::LengthPercentage(LengthPercentage::px(4.)),
            AutoOr::Auto,
        ),
        ..LayoutMetrics::new(Rect::new(Point2D::zero(), Size2D::new(50., 50.)))
    };
    assert_eq!(
        reference_rect(GeometryBox::MarginBox, &metrics),
        LayoutRect::new(LayoutPoint::zero(), LayoutSize::new(50., 54.))
    );
}

#[test]
fn svg_boxes_use_the_border_box() {
    let metrics = metrics(Rect::new(Point2D::new(1., 2.), Size2D::new(30., 40.)), 3.);
    for geometry_box in [
        GeometryBox::BorderBox,
        GeometryBox::FillBox,
        GeometryBox::StrokeBox,
        GeometryBox::ViewBox,
    ] {
        assert_eq!(reference_rect(geometry_box, &metrics), metrics.frame);
        assert_eq!(
            adjust_radii(geometry_box, &BorderRadius::uniform(4.), &metrics),
            BorderRadius::uniform(4.)
        );
    }
}

#[test]
fn shape_without_box_uses_the_border_box() {
    let metrics = metrics(Rect::new(Point2D::new(10., 20.), Size2D::new(100., 50.)), 5.);
    assert_eq!(
        resolve_clip_path(&clip("inset(0)"), &metrics, &BorderRadius::zero()).segments,
        rect_segments(10., 20., 100., 50.)
    );
    assert_eq!(
        resolve_clip_path(&clip("inset(0) padding-box"), &metrics, &BorderRadius::zero()).segments,
        rect_segments(15., 25., 90., 40.)
    );
}

#[test]
fn oversized_border_gives_an_empty_path() {
    let metrics = LayoutMetrics {
        border: LayoutSideOffsets::new(0., 60., 0., 60.),
        ..LayoutMetrics::new(Rect::new(Point2D::zero(), Size2D::new(100., 50.)))
    };
    // The box itself is passed through with a negative width.
    assert_eq!(
        reference_rect(GeometryBox::PaddingBox, &metrics).size,
        LayoutSize::new(-20., 50.)
    );
    assert!(resolve_clip_path(&clip("padding-box"), &metrics, &BorderRadius::zero()).is_empty());
}
