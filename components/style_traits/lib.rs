/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! This module contains shared types and traits for use by the style and
//! layout crates. They live here so that layout can reason about pixel units
//! and serialization without depending on the parser.

#![deny(unsafe_code, missing_docs)]

use bitflags::bitflags;
use cssparser::CowRcStr;

pub mod values;

pub use values::{CssWriter, SequenceWriter, ToCss};

/// One CSS "px" in the coordinate system of the "initial viewport":
/// <http://www.w3.org/TR/css-device-adapt/#initial-viewport>
///
/// All shape geometry produced by layout is expressed in this unit, relative
/// to the same origin as the element frame it was resolved against.
#[derive(Clone, Copy, Debug)]
pub enum CSSPixel {}

/// The error type for all CSS parsing routines.
pub type ParseError<'i> = cssparser::ParseError<'i, StyleParseErrorKind<'i>>;

/// Errors that can be encountered while parsing CSS values.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleParseErrorKind<'i> {
    /// A property declaration value had input remaining after successfully parsing.
    PropertyDeclarationValueNotExhausted,
    /// An unexpected dimension token was encountered.
    UnexpectedDimension(CowRcStr<'i>),
    /// A function was encountered that was not expected.
    UnexpectedFunction(CowRcStr<'i>),
    /// A shape function was given more values than its grammar allows.
    TooManyValues,
    /// A `polygon()` had fewer than three vertices, or a vertex without a
    /// second coordinate.
    InvalidPolygon,
    /// `path()` data is recognized, but cannot be turned into a shape yet.
    UnsupportedPathData,
    /// A geometry box keyword was given both before and after the shape.
    DuplicateGeometryBox,
    /// A numeric value was infinite or NaN once converted.
    NonFiniteValue,
    /// A value that must not be negative was negative.
    NegativeValue,
    /// A placeholder for many sources of errors that require more specific variants.
    UnspecifiedError,
}

impl<'i> StyleParseErrorKind<'i> {
    /// A short human readable description, used when reporting errors.
    pub fn description(&self) -> &'static str {
        match *self {
            StyleParseErrorKind::PropertyDeclarationValueNotExhausted => {
                "trailing input after value"
            },
            StyleParseErrorKind::UnexpectedDimension(_) => "unsupported unit",
            StyleParseErrorKind::UnexpectedFunction(_) => "unknown function",
            StyleParseErrorKind::TooManyValues => "too many values",
            StyleParseErrorKind::InvalidPolygon => "polygon needs at least three coordinate pairs",
            StyleParseErrorKind::UnsupportedPathData => "path() is not supported",
            StyleParseErrorKind::DuplicateGeometryBox => "geometry box specified twice",
            StyleParseErrorKind::NonFiniteValue => "value out of range",
            StyleParseErrorKind::NegativeValue => "negative value not allowed",
            StyleParseErrorKind::UnspecifiedError => "invalid value",
        }
    }
}

bitflags! {
    /// The mode to use when parsing values.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[repr(C)]
    pub struct ParsingMode: u8 {
        /// In CSS, lengths must have units, except for zero values, where the unit can be omitted.
        /// <https://www.w3.org/TR/css3-values/#lengths>
        const DEFAULT = 0;
        /// Unitless numbers are accepted as pixel lengths. Used for values
        /// that were produced by a host rather than written as CSS.
        const ALLOW_UNITLESS_LENGTH = 1 << 0;
    }
}

impl ParsingMode {
    /// Whether the parsing mode allows unitless lengths for non-zero values to be interpreted as px.
    #[inline]
    pub fn allows_unitless_lengths(&self) -> bool {
        self.intersects(ParsingMode::ALLOW_UNITLESS_LENGTH)
    }
}
