/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! CSS handling for the keywords that accompany [`basic-shape`][basic-shape]s.
//!
//! [basic-shape]: https://drafts.csswg.org/css-shapes/#typedef-basic-shape

use std::fmt::{self, Write};

use cssparser::{Parser, Token, match_ignore_ascii_case};
use style_traits::{CssWriter, ParseError, ToCss};

use crate::parser::{Parse, ParserContext};

/// <https://drafts.fxtf.org/css-masking-1/#typedef-geometry-box>
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GeometryBox {
    MarginBox,
    BorderBox,
    ContentBox,
    PaddingBox,
    FillBox,
    StrokeBox,
    ViewBox,
}

impl GeometryBox {
    /// Matches a box keyword, ignoring ASCII case.
    pub fn from_ident(ident: &str) -> Option<Self> {
        Some(match_ignore_ascii_case! { ident,
            "margin-box" => GeometryBox::MarginBox,
            "border-box" => GeometryBox::BorderBox,
            "content-box" => GeometryBox::ContentBox,
            "padding-box" => GeometryBox::PaddingBox,
            "fill-box" => GeometryBox::FillBox,
            "stroke-box" => GeometryBox::StrokeBox,
            "view-box" => GeometryBox::ViewBox,
            _ => return None,
        })
    }

    /// The keyword for this box.
    pub fn as_str(&self) -> &'static str {
        match *self {
            GeometryBox::MarginBox => "margin-box",
            GeometryBox::BorderBox => "border-box",
            GeometryBox::ContentBox => "content-box",
            GeometryBox::PaddingBox => "padding-box",
            GeometryBox::FillBox => "fill-box",
            GeometryBox::StrokeBox => "stroke-box",
            GeometryBox::ViewBox => "view-box",
        }
    }
}

impl Parse for GeometryBox {
    fn parse<'i, 't>(
        _: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let ident = input.expect_ident()?;
        GeometryBox::from_ident(ident)
            .ok_or_else(|| location.new_unexpected_token_error(Token::Ident(ident.clone())))
    }
}

impl ToCss for GeometryBox {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(self.as_str())
    }
}

/// <https://drafts.csswg.org/css-shapes/#typedef-fill-rule>
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FillRule {
    #[default]
    Nonzero,
    Evenodd,
}

impl FillRule {
    /// Matches a fill rule keyword, ignoring ASCII case.
    pub fn from_ident(ident: &str) -> Option<Self> {
        Some(match_ignore_ascii_case! { ident,
            "nonzero" => FillRule::Nonzero,
            "evenodd" => FillRule::Evenodd,
            _ => return None,
        })
    }

    /// The keyword for this fill rule.
    pub fn as_str(&self) -> &'static str {
        match *self {
            FillRule::Nonzero => "nonzero",
            FillRule::Evenodd => "evenodd",
        }
    }
}

impl Parse for FillRule {
    fn parse<'i, 't>(
        _: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let ident = input.expect_ident()?;
        FillRule::from_ident(ident)
            .ok_or_else(|| location.new_unexpected_token_error(Token::Ident(ident.clone())))
    }
}

impl ToCss for FillRule {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(self.as_str())
    }
}
