/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style::parser::Parse;
use style::values::generics::basic_shape::GeometryBox;
use style::values::specified::{BasicShape, Circle, ClipPath, LengthPercentage};
use style_traits::ToCss;

use super::{parse, parse_input};

fn circle_50px() -> Option<BasicShape> {
    Some(BasicShape::Circle(Circle {
        radius: Some(LengthPercentage::px(50.)),
        cx: None,
        cy: None,
    }))
}

#[test]
fn test_geometry_box_alone() {
    for (css, geometry_box) in [
        ("margin-box", GeometryBox::MarginBox),
        ("border-box", GeometryBox::BorderBox),
        ("padding-box", GeometryBox::PaddingBox),
        ("content-box", GeometryBox::ContentBox),
        ("fill-box", GeometryBox::FillBox),
        ("stroke-box", GeometryBox::StrokeBox),
        ("view-box", GeometryBox::ViewBox),
    ] {
        assert_eq!(
            parse(ClipPath::parse, css).unwrap(),
            ClipPath {
                shape: None,
                geometry_box: Some(geometry_box),
            }
        );
        assert_roundtrip!(ClipPath::parse, css);
    }
}

#[test]
fn test_shape_and_box_in_either_order() {
    assert_eq!(
        parse(ClipPath::parse, "circle(50px) padding-box").unwrap(),
        ClipPath {
            shape: circle_50px(),
            geometry_box: Some(GeometryBox::PaddingBox),
        }
    );
    assert_eq!(
        parse(ClipPath::parse, "content-box circle(50px)").unwrap(),
        ClipPath {
            shape: circle_50px(),
            geometry_box: Some(GeometryBox::ContentBox),
        }
    );
    assert_roundtrip!(ClipPath::parse, "circle(50px) padding-box");
    assert_roundtrip!(
        ClipPath::parse,
        "content-box circle(50px)",
        "circle(50px) content-box"
    );
    assert_roundtrip!(ClipPath::parse, "circle(50px)");
}

#[test]
fn test_none_and_empty() {
    assert_eq!(parse(ClipPath::parse, "none").unwrap(), ClipPath::none());
    assert_eq!(parse(ClipPath::parse, "NONE").unwrap(), ClipPath::none());
    assert_eq!(parse(ClipPath::parse, "").unwrap(), ClipPath::none());
    assert_eq!(parse(ClipPath::parse, "   ").unwrap(), ClipPath::none());
    assert!(ClipPath::none().is_none());
    assert_roundtrip!(ClipPath::parse, "none");
}

#[test]
fn test_invalid() {
    assert!(parse(ClipPath::parse, "invalid-box").is_err());
    assert!(parse(ClipPath::parse, "inset(10px 20px 30px 40px 50px)").is_err());
    assert!(parse(ClipPath::parse, "circle(invalid)").is_err());
    assert!(parse(ClipPath::parse, "border-box padding-box").is_err());
    assert!(parse(ClipPath::parse, "border-box circle(50px) padding-box").is_err());
    assert!(parse(ClipPath::parse, "circle(50px) circle(10px)").is_err());
    assert!(parse(ClipPath::parse, "circle(50px) garbage").is_err());
    assert!(parse(ClipPath::parse, "none circle(50px)").is_err());
    assert!(parse(ClipPath::parse, "path(\"M 0 0\") border-box").is_err());
    assert!(parse(ClipPath::parse, "url(#clip)").is_err());
}

#[test]
fn test_case_and_whitespace() {
    assert_eq!(
        parse(ClipPath::parse, "  Circle( 50PX )   PADDING-BOX ").unwrap(),
        parse(ClipPath::parse, "circle(50px) padding-box").unwrap()
    );
    assert_eq!(
        parse(ClipPath::parse, "InSeT(10Px)").unwrap(),
        parse(ClipPath::parse, "inset(10px)").unwrap()
    );
    assert_eq!(
        parse(ClipPath::parse, "  inset(  10px   20px   )  ").unwrap(),
        parse(ClipPath::parse, "inset(10px 20px)").unwrap()
    );
}
