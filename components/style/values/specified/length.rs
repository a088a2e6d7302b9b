/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! [Length values][length].
//!
//! [length]: https://drafts.csswg.org/css-values/#lengths

use std::fmt::{self, Write};

use cssparser::{Parser, Token, match_ignore_ascii_case};
use style_traits::values::{serialize_dimension, serialize_percentage};
use style_traits::{CssWriter, ParseError, StyleParseErrorKind, ToCss};

use crate::parser::{Parse, ParserContext};
use crate::values::CSSFloat;

/// Number of pixels per inch
pub const PX_PER_IN: CSSFloat = 96.;
/// Number of pixels per centimeter
pub const PX_PER_CM: CSSFloat = PX_PER_IN / 2.54;
/// Number of pixels per millimeter
pub const PX_PER_MM: CSSFloat = PX_PER_IN / 25.4;
/// Number of pixels per quarter
pub const PX_PER_Q: CSSFloat = PX_PER_MM / 4.;
/// Number of pixels per point
pub const PX_PER_PT: CSSFloat = PX_PER_IN / 72.;
/// Number of pixels per pica
pub const PX_PER_PC: CSSFloat = PX_PER_PT * 12.;

/// An absolute length, always held in CSS pixels.
///
/// Absolute units other than `px` are converted when parsed, so `1in` and
/// `96px` produce the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Length(CSSFloat);

impl Length {
    /// Returns a length of `px` CSS pixels.
    #[inline]
    pub const fn new(px: CSSFloat) -> Self {
        Length(px)
    }

    /// Returns the length in CSS pixels.
    #[inline]
    pub fn px(&self) -> CSSFloat {
        self.0
    }

    /// Builds a length from a dimension token, if `unit` is an absolute unit.
    pub fn from_dimension(value: CSSFloat, unit: &str) -> Option<Self> {
        let px_per_unit = match_ignore_ascii_case! { unit,
            "px" => 1.,
            "in" => PX_PER_IN,
            "cm" => PX_PER_CM,
            "mm" => PX_PER_MM,
            "q" => PX_PER_Q,
            "pt" => PX_PER_PT,
            "pc" => PX_PER_PC,
            _ => return None,
        };
        Some(Length(value * px_per_unit))
    }
}

impl ToCss for Length {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        serialize_dimension(self.0, "px", dest)
    }
}

/// A percentage, held as written: `25%` is `Percentage(25.)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percentage(pub CSSFloat);

impl Percentage {
    /// `0%`
    #[inline]
    pub const fn zero() -> Self {
        Percentage(0.)
    }

    /// `100%`
    #[inline]
    pub const fn hundred() -> Self {
        Percentage(100.)
    }

    /// Returns this percentage of `basis`.
    #[inline]
    pub fn of(&self, basis: CSSFloat) -> CSSFloat {
        self.0 / 100. * basis
    }
}

impl ToCss for Percentage {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        serialize_percentage(self.0, dest)
    }
}

/// A `<length-percentage>` value. `calc()` is not supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthPercentage {
    /// An absolute length.
    Length(Length),
    /// A percentage of some reference dimension.
    Percentage(Percentage),
}

impl LengthPercentage {
    /// Returns a `0px` value.
    #[inline]
    pub const fn zero() -> Self {
        LengthPercentage::Length(Length::new(0.))
    }

    /// Returns a length of `value` CSS pixels.
    #[inline]
    pub const fn px(value: CSSFloat) -> Self {
        LengthPercentage::Length(Length::new(value))
    }

    /// Returns a percentage, as written.
    #[inline]
    pub const fn percent(value: CSSFloat) -> Self {
        LengthPercentage::Percentage(Percentage(value))
    }

    /// Resolves this value against `basis`, which is only used for percentages.
    #[inline]
    pub fn resolve(&self, basis: CSSFloat) -> CSSFloat {
        match *self {
            LengthPercentage::Length(ref length) => length.px(),
            LengthPercentage::Percentage(ref percentage) => percentage.of(basis),
        }
    }

    /// Whether this value is negative, either as a length or as a percentage.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match *self {
            LengthPercentage::Length(ref length) => length.px() < 0.,
            LengthPercentage::Percentage(ref percentage) => percentage.0 < 0.,
        }
    }

    /// Parses a value that must not be negative.
    pub fn parse_non_negative<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        let location = input.current_source_location();
        let value = Self::parse(context, input)?;
        if value.is_negative() {
            return Err(location.new_custom_error(StyleParseErrorKind::NegativeValue));
        }
        Ok(value)
    }
}

impl Parse for LengthPercentage {
    fn parse<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>> {
        input.skip_whitespace();
        let location = input.current_source_location();
        let start = input.position();
        let token = input.next()?.clone();
        let value = match token {
            Token::Dimension {
                value, ref unit, ..
            } => {
                let value =
                    authored_number(input.slice_from(start), unit.len()).unwrap_or(value);
                match Length::from_dimension(value, unit) {
                    Some(length) => LengthPercentage::Length(length),
                    None => {
                        return Err(location
                            .new_custom_error(StyleParseErrorKind::UnexpectedDimension(unit.clone())));
                    },
                }
            },
            // `unit_value` has been divided by 100 in single precision, so
            // `11.6%` would come back as `11.599999%`.
            Token::Percentage { unit_value, .. } => LengthPercentage::Percentage(Percentage(
                authored_number(input.slice_from(start), 1).unwrap_or(unit_value * 100.),
            )),
            Token::Number { value, .. }
                if value == 0. || context.parsing_mode.allows_unitless_lengths() =>
            {
                LengthPercentage::px(value)
            },
            t => return Err(location.new_unexpected_token_error(t)),
        };
        if !value.resolve(0.).is_finite() || !value.resolve(1.).is_finite() {
            return Err(location.new_custom_error(StyleParseErrorKind::NonFiniteValue));
        }
        Ok(value)
    }
}

/// Reads the number of a numeric token back from its source text, dropping
/// `suffix_len` bytes of unit.
///
/// Serialized numbers are the shortest form that parses to the same `f32`,
/// so reading them this way makes serializing and reparsing exact.
fn authored_number(token_text: &str, suffix_len: usize) -> Option<CSSFloat> {
    let number = token_text.get(..token_text.len().checked_sub(suffix_len)?)?;
    number.parse().ok()
}

impl ToCss for LengthPercentage {
    fn to_css<W>(&self, dest: &mut CssWriter<W>) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            LengthPercentage::Length(ref length) => length.to_css(dest),
            LengthPercentage::Percentage(ref percentage) => percentage.to_css(dest),
        }
    }
}
