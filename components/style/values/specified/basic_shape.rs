/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! CSS handling for the specified value of
//! [`basic-shape`][basic-shape]s
//!
//! [basic-shape]: https://drafts.csswg.org/css-shapes/#typedef-basic-shape

use std::fmt::{self, Write};

use cssparser::Parser;
use style_traits::{CssWriter, ParseError, SequenceWriter, StyleParseErrorKind, ToCss};

use crate::parser::{Parse, ParserContext};
use crate::values::generics::basic_shape::FillRule;
use crate::values::generics::rect::Rect;
use crate::values::specified::length::{LengthPercentage, Percentage};

/// A shape function: a function name and the grammar of its arguments.
pub trait ShapeFunction: Sized {
    /// The function name, in lowercase.
    const NAME: &'static str;

    /// Parses the contents of the function block. The caller checks that the
    /// block is exhausted afterwards.
    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>>;

    /// Parses `arguments` if `name` is this shape's function name.
    ///
    /// Returns `Ok(None)` without consuming anything if the name does not
    /// match, and an error if it matches but the arguments are malformed.
    fn parse_function<'i, 't>(
        context: &ParserContext,
        name: &str,
        arguments: &mut Parser<'i, 't>,
    ) -> Result<Option<Self>, ParseError<'i>> {
        if !name.eq_ignore_ascii_case(Self::NAME) {
            return Ok(None);
        }
        Self::parse_arguments(context, arguments).map(Some)
    }
}

/// The default center coordinate of circles and ellipses.
#[inline]
fn default_center() -> LengthPercentage {
    LengthPercentage::Percentage(Percentage(50.))
}

/// Parses `[at <length-percentage> <length-percentage>]?`.
fn parse_center<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<(Option<LengthPercentage>, Option<LengthPercentage>), ParseError<'i>> {
    if input.try_parse(|i| i.expect_ident_matching("at")).is_err() {
        return Ok((None, None));
    }
    let cx = LengthPercentage::parse(context, input)?;
    let cy = LengthPercentage::parse(context, input)?;
    Ok((Some(cx), Some(cy)))
}

fn write_center<W>(
    cx: &Option<LengthPercentage>,
    cy: &Option<LengthPercentage>,
    needs_space: bool,
    dest: &mut CssWriter<W>,
) -> fmt::Result
where
    W: Write,
{
    if cx.is_none() && cy.is_none() {
        return Ok(());
    }
    if needs_space {
        dest.write_char(' ')?;
    }
    dest.write_str("at ")?;
    cx.unwrap_or_else(default_center).to_css(dest)?;
    dest.write_char(' ')?;
    cy.unwrap_or_else(default_center).to_css(dest)
}

/// Parses `[round <length-percentage>]?`.
fn parse_round<'i, 't>(
    context: &ParserContext,
    input: &mut Parser<'i, 't>,
) -> Result<Option<LengthPercentage>, ParseError<'i>> {
    if input
        .try_parse(|i| i.expect_ident_matching("round"))
        .is_err()
    {
        return Ok(None);
    }
    LengthPercentage::parse_non_negative(context, input).map(Some)
}

fn write_round<W>(round: &Option<LengthPercentage>, dest: &mut CssWriter<W>) -> fmt::Result
where
    W: Write,
{
    if let Some(ref round) = *round {
        dest.write_str(" round ")?;
        round.to_css(dest)?;
    }
    Ok(())
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-circle>
///
/// Absent fields are resolved at paint time: the center defaults to the
/// middle of the reference box and the radius to `closest-side`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    /// The radius, if specified.
    pub radius: Option<LengthPercentage>,
    /// The horizontal center, if specified.
    pub cx: Option<LengthPercentage>,
    /// The vertical center, if specified.
    pub cy: Option<LengthPercentage>,
}

impl ShapeFunction for Circle {
    const NAME: &'static str = "circle";

    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let radius = input
            .try_parse(|i| LengthPercentage::parse_non_negative(context, i))
            .ok();
        let (cx, cy) = parse_center(context, input)?;
        Ok(Circle { radius, cx, cy })
    }
}

impl ToCss for Circle {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("circle(")?;
        self.radius.to_css(dest)?;
        write_center(&self.cx, &self.cy, self.radius.is_some(), dest)?;
        dest.write_char(')')
    }
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-ellipse>
///
/// A single radius applies to both axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ellipse {
    /// The horizontal radius, if specified.
    pub rx: Option<LengthPercentage>,
    /// The vertical radius, if specified.
    pub ry: Option<LengthPercentage>,
    /// The horizontal center, if specified.
    pub cx: Option<LengthPercentage>,
    /// The vertical center, if specified.
    pub cy: Option<LengthPercentage>,
}

impl Ellipse {
    /// The horizontal and vertical radii, with a lone radius applied to both.
    #[inline]
    pub fn radii(&self) -> (Option<LengthPercentage>, Option<LengthPercentage>) {
        (self.rx.or(self.ry), self.ry.or(self.rx))
    }
}

impl ShapeFunction for Ellipse {
    const NAME: &'static str = "ellipse";

    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let rx = input
            .try_parse(|i| LengthPercentage::parse_non_negative(context, i))
            .ok();
        let ry = match rx {
            Some(rx) => Some(
                input
                    .try_parse(|i| LengthPercentage::parse_non_negative(context, i))
                    .unwrap_or(rx),
            ),
            None => None,
        };
        let (cx, cy) = parse_center(context, input)?;
        Ok(Ellipse { rx, ry, cx, cy })
    }
}

impl ToCss for Ellipse {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("ellipse(")?;
        let has_radii = match self.radii() {
            (Some(rx), Some(ry)) => {
                rx.to_css(dest)?;
                dest.write_char(' ')?;
                ry.to_css(dest)?;
                true
            },
            _ => false,
        };
        write_center(&self.cx, &self.cy, has_radii, dest)?;
        dest.write_char(')')
    }
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-inset>
///
/// The edges are offsets inwards from the matching edge of the reference box.
#[derive(Clone, Debug, PartialEq)]
pub struct InsetRect {
    /// The four edge offsets.
    pub rect: Rect<LengthPercentage>,
    /// The corner radius, if any.
    pub round: Option<LengthPercentage>,
}

impl ShapeFunction for InsetRect {
    const NAME: &'static str = "inset";

    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let rect = Rect::parse_with(context, input, LengthPercentage::parse)?;
        let location = input.current_source_location();
        if input
            .try_parse(|i| LengthPercentage::parse(context, i))
            .is_ok()
        {
            return Err(location.new_custom_error(StyleParseErrorKind::TooManyValues));
        }
        let round = parse_round(context, input)?;
        Ok(InsetRect { rect, round })
    }
}

impl ToCss for InsetRect {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("inset(")?;
        self.rect.to_css(dest)?;
        write_round(&self.round, dest)?;
        dest.write_char(')')
    }
}

/// One `<length-percentage> <length-percentage>` vertex of a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonCoord(pub LengthPercentage, pub LengthPercentage);

impl ToCss for PolygonCoord {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        self.0.to_css(dest)?;
        dest.write_char(' ')?;
        self.1.to_css(dest)
    }
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-polygon>
///
/// Always holds at least three vertices once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// The fill rule, if one was written. Layout treats `None` as `nonzero`.
    pub fill: Option<FillRule>,
    /// The vertices, in order.
    pub coordinates: Vec<PolygonCoord>,
}

impl Polygon {
    /// The fewest vertices a polygon may have.
    pub const MIN_COORDINATES: usize = 3;
}

impl ShapeFunction for Polygon {
    const NAME: &'static str = "polygon";

    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let fill = input
            .try_parse(|i| -> Result<_, ParseError> {
                let fill = FillRule::parse(context, i)?;
                i.expect_comma()?;
                Ok(fill)
            })
            .ok();

        let location = input.current_source_location();
        let coordinates = input.parse_comma_separated(|i| {
            let x = LengthPercentage::parse(context, i)?;
            let location = i.current_source_location();
            let y = LengthPercentage::parse(context, i)
                .map_err(|_| location.new_custom_error(StyleParseErrorKind::InvalidPolygon))?;
            Ok(PolygonCoord(x, y))
        })?;
        if coordinates.len() < Self::MIN_COORDINATES {
            return Err(location.new_custom_error(StyleParseErrorKind::InvalidPolygon));
        }

        Ok(Polygon { fill, coordinates })
    }
}

impl ToCss for Polygon {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("polygon(")?;
        if let Some(fill) = self.fill {
            fill.to_css(dest)?;
            dest.write_str(", ")?;
        }
        {
            let mut writer = SequenceWriter::new(dest, ", ");
            for coordinate in &self.coordinates {
                writer.item(coordinate)?;
            }
        }
        dest.write_char(')')
    }
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-basic-shape-rect>
///
/// Unlike `inset()`, every edge is an offset from the top or left edge of
/// the reference box. `auto` is stored as `0%` for top and left and `100%`
/// for right and bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeRect {
    /// The four edge positions.
    pub rect: Rect<LengthPercentage>,
    /// The corner radius, if any.
    pub round: Option<LengthPercentage>,
}

impl ShapeFunction for ShapeRect {
    const NAME: &'static str = "rect";

    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let mut parse_edge = |auto: Percentage| -> Result<LengthPercentage, ParseError<'i>> {
            if input.try_parse(|i| i.expect_ident_matching("auto")).is_ok() {
                return Ok(LengthPercentage::Percentage(auto));
            }
            LengthPercentage::parse(context, input)
        };
        let top = parse_edge(Percentage::zero())?;
        let right = parse_edge(Percentage::hundred())?;
        let bottom = parse_edge(Percentage::hundred())?;
        let left = parse_edge(Percentage::zero())?;
        let round = parse_round(context, input)?;
        Ok(ShapeRect {
            rect: Rect::new(top, right, bottom, left),
            round,
        })
    }
}

impl ToCss for ShapeRect {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("rect(")?;
        {
            let mut writer = SequenceWriter::new(dest, " ");
            writer.item(&self.rect.top)?;
            writer.item(&self.rect.right)?;
            writer.item(&self.rect.bottom)?;
            writer.item(&self.rect.left)?;
        }
        write_round(&self.round, dest)?;
        dest.write_char(')')
    }
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-basic-shape-xywh>
#[derive(Clone, Debug, PartialEq)]
pub struct Xywh {
    /// Horizontal offset from the left edge of the reference box.
    pub x: LengthPercentage,
    /// Vertical offset from the top edge of the reference box.
    pub y: LengthPercentage,
    /// Width of the rectangle.
    pub width: LengthPercentage,
    /// Height of the rectangle.
    pub height: LengthPercentage,
    /// The corner radius, if any.
    pub round: Option<LengthPercentage>,
}

impl ShapeFunction for Xywh {
    const NAME: &'static str = "xywh";

    fn parse_arguments<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let x = LengthPercentage::parse(context, input)?;
        let y = LengthPercentage::parse(context, input)?;
        let width = LengthPercentage::parse_non_negative(context, input)?;
        let height = LengthPercentage::parse_non_negative(context, input)?;
        let round = parse_round(context, input)?;
        Ok(Xywh {
            x,
            y,
            width,
            height,
            round,
        })
    }
}

impl ToCss for Xywh {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("xywh(")?;
        {
            let mut writer = SequenceWriter::new(dest, " ");
            writer.item(&self.x)?;
            writer.item(&self.y)?;
            writer.item(&self.width)?;
            writer.item(&self.height)?;
        }
        write_round(&self.round, dest)?;
        dest.write_char(')')
    }
}

/// <https://drafts.csswg.org/css-shapes/#funcdef-basic-shape-path>
///
/// The function is recognized, but its data is never parsed into a shape:
/// `path()` in a `clip-path` value is always rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    /// The SVG path data, verbatim.
    pub path_data: String,
}

impl ShapeFunction for Path {
    const NAME: &'static str = "path";

    fn parse_arguments<'i, 't>(
        _: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        // TODO: parse the path data once SVG path parsing is shared with layout.
        Err(input.new_custom_error(StyleParseErrorKind::UnsupportedPathData))
    }
}

impl ToCss for Path {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("path(")?;
        self.path_data.to_css(dest)?;
        dest.write_char(')')
    }
}

/// The basic shapes that may appear in a `clip-path`.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum BasicShape {
    Circle(Circle),
    Ellipse(Ellipse),
    Inset(InsetRect),
    Polygon(Polygon),
    Rect(ShapeRect),
    Xywh(Xywh),
    Path(Path),
}

impl BasicShape {
    /// The CSS function name of this shape.
    pub fn name(&self) -> &'static str {
        match *self {
            BasicShape::Circle(_) => Circle::NAME,
            BasicShape::Ellipse(_) => Ellipse::NAME,
            BasicShape::Inset(_) => InsetRect::NAME,
            BasicShape::Polygon(_) => Polygon::NAME,
            BasicShape::Rect(_) => ShapeRect::NAME,
            BasicShape::Xywh(_) => Xywh::NAME,
            BasicShape::Path(_) => Path::NAME,
        }
    }

    /// Tries each shape function in turn against `name`.
    ///
    /// Returns `Ok(None)` if no shape has that name.
    pub fn parse_function_arguments<'i, 't>(
        context: &ParserContext,
        name: &str,
        arguments: &mut Parser<'i, 't>,
    ) -> Result<Option<Self>, ParseError<'i>> {
        if let Some(circle) = Circle::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Circle(circle)));
        }
        if let Some(ellipse) = Ellipse::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Ellipse(ellipse)));
        }
        if let Some(inset) = InsetRect::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Inset(inset)));
        }
        if let Some(polygon) = Polygon::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Polygon(polygon)));
        }
        if let Some(rect) = ShapeRect::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Rect(rect)));
        }
        if let Some(xywh) = Xywh::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Xywh(xywh)));
        }
        if let Some(path) = Path::parse_function(context, name, arguments)? {
            return Ok(Some(BasicShape::Path(path)));
        }
        Ok(None)
    }
}

impl Parse for BasicShape {
    fn parse<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let function = input.expect_function()?.clone();
        input.parse_nested_block(move |i| {
            Self::parse_function_arguments(context, &function, i)?.ok_or_else(|| {
                location.new_custom_error(StyleParseErrorKind::UnexpectedFunction(
                    function.clone(),
                ))
            })
        })
    }
}

impl ToCss for BasicShape {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            BasicShape::Circle(ref circle) => circle.to_css(dest),
            BasicShape::Ellipse(ref ellipse) => ellipse.to_css(dest),
            BasicShape::Inset(ref inset) => inset.to_css(dest),
            BasicShape::Polygon(ref polygon) => polygon.to_css(dest),
            BasicShape::Rect(ref rect) => rect.to_css(dest),
            BasicShape::Xywh(ref xywh) => xywh.to_css(dest),
            BasicShape::Path(ref path) => path.to_css(dest),
        }
    }
}
