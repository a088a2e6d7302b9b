/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The specified value of the [`clip-path`][clip-path] property.
//!
//! [clip-path]: https://drafts.fxtf.org/css-masking-1/#the-clip-path

use std::fmt::{self, Write};

use cssparser::{Parser, ParserInput, Token};
use log::debug;
use style_traits::{CssWriter, ParseError, ParsingMode, StyleParseErrorKind, ToCss};

use crate::error_reporting::{ContextualParseError, ParseErrorReporter};
use crate::parser::{Parse, ParserContext};
use crate::values::generics::basic_shape::GeometryBox;
use crate::values::specified::basic_shape::BasicShape;

/// A parsed `clip-path` value: `none`, a geometry box, a basic shape, or a
/// shape with its geometry box.
///
/// The empty value, with neither field set, is what `none` or an empty
/// declaration parses to. It is not the same as a parse failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipPath {
    /// The shape, if any.
    pub shape: Option<BasicShape>,
    /// The reference box, if one was written.
    pub geometry_box: Option<GeometryBox>,
}

impl ClipPath {
    /// The `none` value.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether neither a shape nor a box was given.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.shape.is_none() && self.geometry_box.is_none()
    }

    /// Parses `css` as a whole `clip-path` value, reporting any error to
    /// `error_reporter` and returning `None` in that case.
    pub fn parse_str(css: &str, error_reporter: &dyn ParseErrorReporter) -> Option<Self> {
        let context = ParserContext::new(ParsingMode::DEFAULT, Some(error_reporter));
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        match parser.parse_entirely(|input| Self::parse(&context, input)) {
            Ok(clip_path) => Some(clip_path),
            Err(error) => {
                debug!("Dropping clip-path {:?}", css);
                context.log_css_error(
                    error.location,
                    ContextualParseError::InvalidClipPath(css, error),
                );
                None
            },
        }
    }
}

fn next_is_function(input: &mut Parser) -> bool {
    let start = input.state();
    let is_function = matches!(input.next(), Ok(&Token::Function(_)));
    input.reset(&start);
    is_function
}

impl Parse for ClipPath {
    /// `none | [ <basic-shape> || <geometry-box> ]`
    fn parse<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        if input.is_exhausted() ||
            input
                .try_parse(|i| i.expect_ident_matching("none"))
                .is_ok()
        {
            return Ok(Self::none());
        }

        let mut geometry_box = input
            .try_parse(|i| GeometryBox::parse(context, i))
            .ok();

        // Once a function name is seen it has to be a valid shape: a bad
        // shape invalidates the whole value instead of being skipped.
        let shape = if next_is_function(input) {
            Some(BasicShape::parse(context, input)?)
        } else {
            None
        };

        let location = input.current_source_location();
        if let Ok(trailing_box) = input.try_parse(|i| GeometryBox::parse(context, i)) {
            if geometry_box.is_some() {
                return Err(location.new_custom_error(StyleParseErrorKind::DuplicateGeometryBox));
            }
            geometry_box = Some(trailing_box);
        }

        if shape.is_none() && geometry_box.is_none() {
            return Err(location.new_custom_error(StyleParseErrorKind::UnspecifiedError));
        }

        if !input.is_exhausted() {
            let location = input.current_source_location();
            return Err(
                location.new_custom_error(StyleParseErrorKind::PropertyDeclarationValueNotExhausted)
            );
        }

        Ok(ClipPath {
            shape,
            geometry_box,
        })
    }
}

impl ToCss for ClipPath {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        match (&self.shape, &self.geometry_box) {
            (Some(shape), Some(geometry_box)) => {
                shape.to_css(dest)?;
                dest.write_char(' ')?;
                geometry_box.to_css(dest)
            },
            (Some(shape), None) => shape.to_css(dest),
            (None, Some(geometry_box)) => geometry_box.to_css(dest),
            (None, None) => dest.write_str("none"),
        }
    }
}
