/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Conversion of `clip-path` values to and from the structured form hosts
//! use when the value was already split up before reaching us:
//!
//! ```json
//! { "shape": { "type": "circle", "r": 50, "cx": "25%" }, "geometryBox": "padding-box" }
//! ```
//!
//! Numbers are pixel lengths, and strings hold a single CSS length or
//! percentage. No other CSS syntax is involved.

use std::fmt;

use log::debug;
use serde_json::{Map, Value};
use style_traits::{ParsingMode, ToCss};

use crate::parser::{ParserContext, parse_entirely};
use crate::values::generics::basic_shape::{FillRule, GeometryBox};
use crate::values::generics::rect::Rect;
use crate::values::specified::basic_shape::{
    BasicShape, Circle, Ellipse, InsetRect, Polygon, PolygonCoord, ShapeRect, Xywh,
};
use crate::values::specified::clip_path::ClipPath;
use crate::values::specified::length::LengthPercentage;

/// Why a structured `clip-path` value was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValueError {
    /// The value, or its `shape`, was not a mapping.
    NotAnObject,
    /// The shape has no string `type`.
    MissingShapeType,
    /// The shape `type` is not one of the known shapes.
    UnknownShapeType(String),
    /// The named field could not be read as a length or percentage.
    InvalidField(&'static str),
    /// A polygon had fewer than three valid points.
    InvalidPolygon,
}

impl fmt::Display for RawValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RawValueError::NotAnObject => f.write_str("expected an object"),
            RawValueError::MissingShapeType => f.write_str("shape has no type"),
            RawValueError::UnknownShapeType(ref name) => write!(f, "unknown shape type {:?}", name),
            RawValueError::InvalidField(name) => write!(f, "invalid value for {:?}", name),
            RawValueError::InvalidPolygon => f.write_str("polygon needs at least three points"),
        }
    }
}

impl std::error::Error for RawValueError {}

fn length_percentage_from_value(
    value: &Value,
    name: &'static str,
) -> Result<Option<LengthPercentage>, RawValueError> {
    match *value {
        Value::Null => Ok(None),
        Value::Number(ref number) => number
            .as_f64()
            .map(|px| px as f32)
            .filter(|px| px.is_finite())
            .map(|px| Some(LengthPercentage::px(px)))
            .ok_or(RawValueError::InvalidField(name)),
        Value::String(ref css) => {
            let context = ParserContext::new(ParsingMode::ALLOW_UNITLESS_LENGTH, None);
            parse_entirely::<LengthPercentage>(&context, css)
                .map(Some)
                .map_err(|_| RawValueError::InvalidField(name))
        },
        _ => Err(RawValueError::InvalidField(name)),
    }
}

fn length_percentage_to_value(value: &LengthPercentage) -> Value {
    match *value {
        LengthPercentage::Length(ref length) => Value::from(f64::from(length.px())),
        LengthPercentage::Percentage(ref percentage) => Value::from(percentage.to_css_string()),
    }
}

/// Read-only view over the fields of one shape mapping.
struct ShapeFields<'a>(&'a Map<String, Value>);

impl<'a> ShapeFields<'a> {
    fn optional(&self, name: &'static str) -> Result<Option<LengthPercentage>, RawValueError> {
        match self.0.get(name) {
            Some(value) => length_percentage_from_value(value, name),
            None => Ok(None),
        }
    }

    /// Edges that the CSS grammar always fills in default to zero here.
    fn or_zero(&self, name: &'static str) -> Result<LengthPercentage, RawValueError> {
        Ok(self.optional(name)?.unwrap_or_else(LengthPercentage::zero))
    }

    fn rect(&self) -> Result<Rect<LengthPercentage>, RawValueError> {
        Ok(Rect::new(
            self.or_zero("top")?,
            self.or_zero("right")?,
            self.or_zero("bottom")?,
            self.or_zero("left")?,
        ))
    }

    fn points(&self) -> Result<Vec<PolygonCoord>, RawValueError> {
        let points = match self.0.get("points") {
            Some(Value::Array(points)) => points,
            Some(_) => return Err(RawValueError::InvalidField("points")),
            None => return Err(RawValueError::InvalidPolygon),
        };
        let mut coordinates = Vec::with_capacity(points.len());
        for point in points {
            let point = point
                .as_object()
                .ok_or(RawValueError::InvalidField("points"))?;
            let point = ShapeFields(point);
            match (point.optional("x")?, point.optional("y")?) {
                (Some(x), Some(y)) => coordinates.push(PolygonCoord(x, y)),
                _ => return Err(RawValueError::InvalidPolygon),
            }
        }
        if coordinates.len() < Polygon::MIN_COORDINATES {
            return Err(RawValueError::InvalidPolygon);
        }
        Ok(coordinates)
    }

    fn fill_rule(&self) -> Option<FillRule> {
        self.0
            .get("fillRule")
            .and_then(Value::as_str)
            .and_then(FillRule::from_ident)
    }
}

impl BasicShape {
    /// Reads a shape from its structured form.
    pub fn from_raw_value(value: &Value) -> Result<Self, RawValueError> {
        let shape = value.as_object().ok_or(RawValueError::NotAnObject)?;
        let name = shape
            .get("type")
            .and_then(Value::as_str)
            .ok_or(RawValueError::MissingShapeType)?;
        let fields = ShapeFields(shape);
        Ok(match name {
            "circle" => BasicShape::Circle(Circle {
                radius: fields.optional("r")?,
                cx: fields.optional("cx")?,
                cy: fields.optional("cy")?,
            }),
            "ellipse" => {
                let ellipse = Ellipse {
                    rx: fields.optional("rx")?,
                    ry: fields.optional("ry")?,
                    cx: fields.optional("cx")?,
                    cy: fields.optional("cy")?,
                };
                let (rx, ry) = ellipse.radii();
                BasicShape::Ellipse(Ellipse { rx, ry, ..ellipse })
            },
            "inset" => BasicShape::Inset(InsetRect {
                rect: fields.rect()?,
                round: fields.optional("borderRadius")?,
            }),
            "polygon" => BasicShape::Polygon(Polygon {
                fill: fields.fill_rule(),
                coordinates: fields.points()?,
            }),
            "rect" => BasicShape::Rect(ShapeRect {
                rect: fields.rect()?,
                round: fields.optional("borderRadius")?,
            }),
            "xywh" => BasicShape::Xywh(Xywh {
                x: fields.or_zero("x")?,
                y: fields.or_zero("y")?,
                width: fields.or_zero("width")?,
                height: fields.or_zero("height")?,
                round: fields.optional("borderRadius")?,
            }),
            _ => return Err(RawValueError::UnknownShapeType(name.to_owned())),
        })
    }

    /// Writes this shape in its structured form.
    pub fn to_raw_value(&self) -> Value {
        let mut shape = Map::new();
        shape.insert("type".to_owned(), Value::from(self.name()));
        let mut insert = |name: &str, value: &Option<LengthPercentage>| {
            if let Some(ref value) = *value {
                shape.insert(name.to_owned(), length_percentage_to_value(value));
            }
        };
        match *self {
            BasicShape::Circle(ref circle) => {
                insert("r", &circle.radius);
                insert("cx", &circle.cx);
                insert("cy", &circle.cy);
            },
            BasicShape::Ellipse(ref ellipse) => {
                insert("rx", &ellipse.rx);
                insert("ry", &ellipse.ry);
                insert("cx", &ellipse.cx);
                insert("cy", &ellipse.cy);
            },
            BasicShape::Inset(InsetRect { ref rect, ref round }) |
            BasicShape::Rect(ShapeRect { ref rect, ref round }) => {
                insert("top", &Some(rect.top));
                insert("right", &Some(rect.right));
                insert("bottom", &Some(rect.bottom));
                insert("left", &Some(rect.left));
                insert("borderRadius", round);
            },
            BasicShape::Xywh(ref xywh) => {
                insert("x", &Some(xywh.x));
                insert("y", &Some(xywh.y));
                insert("width", &Some(xywh.width));
                insert("height", &Some(xywh.height));
                insert("borderRadius", &xywh.round);
            },
            BasicShape::Polygon(ref polygon) => {
                let points = polygon
                    .coordinates
                    .iter()
                    .map(|PolygonCoord(x, y)| {
                        let mut point = Map::new();
                        point.insert("x".to_owned(), length_percentage_to_value(x));
                        point.insert("y".to_owned(), length_percentage_to_value(y));
                        Value::Object(point)
                    })
                    .collect();
                shape.insert("points".to_owned(), Value::Array(points));
                if let Some(fill) = polygon.fill {
                    shape.insert("fillRule".to_owned(), Value::from(fill.as_str()));
                }
            },
            BasicShape::Path(ref path) => {
                shape.insert("pathData".to_owned(), Value::from(path.path_data.clone()));
            },
        }
        Value::Object(shape)
    }
}

impl ClipPath {
    /// Reads a `clip-path` from its structured form. An unknown
    /// `geometryBox` is ignored, an unknown shape `type` is an error.
    pub fn from_raw_value(value: &Value) -> Result<Self, RawValueError> {
        let clip_path = value.as_object().ok_or(RawValueError::NotAnObject)?;
        let shape = match clip_path.get("shape") {
            Some(shape) if shape.is_object() => Some(BasicShape::from_raw_value(shape)?),
            _ => None,
        };
        let geometry_box = clip_path
            .get("geometryBox")
            .and_then(Value::as_str)
            .and_then(|name| {
                let geometry_box = GeometryBox::from_ident(name);
                if geometry_box.is_none() {
                    debug!("Ignoring unknown geometry box {:?}", name);
                }
                geometry_box
            });
        Ok(ClipPath {
            shape,
            geometry_box,
        })
    }

    /// Writes this `clip-path` in its structured form.
    pub fn to_raw_value(&self) -> Value {
        let mut clip_path = Map::new();
        if let Some(ref shape) = self.shape {
            clip_path.insert("shape".to_owned(), shape.to_raw_value());
        }
        if let Some(geometry_box) = self.geometry_box {
            clip_path.insert("geometryBox".to_owned(), Value::from(geometry_box.as_str()));
        }
        Value::Object(clip_path)
    }
}
