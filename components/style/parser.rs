/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The context within which CSS code is parsed.

use cssparser::{Parser, ParserInput, SourceLocation};
use style_traits::{ParseError, ParsingMode};

use crate::error_reporting::{ContextualParseError, ParseErrorReporter};

/// The data that the parser needs from outside in order to parse a value.
pub struct ParserContext<'a> {
    /// The mode to use when parsing.
    pub parsing_mode: ParsingMode,
    /// The active error reporter, or none if error reporting is disabled.
    error_reporter: Option<&'a dyn ParseErrorReporter>,
}

impl<'a> ParserContext<'a> {
    /// Create a parser context.
    #[inline]
    pub fn new(
        parsing_mode: ParsingMode,
        error_reporter: Option<&'a dyn ParseErrorReporter>,
    ) -> Self {
        Self {
            parsing_mode,
            error_reporter,
        }
    }

    /// Record a CSS parse error with this context’s error reporting.
    pub fn log_css_error(&self, location: SourceLocation, error: ContextualParseError) {
        let error_reporter = match self.error_reporter {
            Some(r) => r,
            None => return,
        };

        error_reporter.report_error(location, error)
    }
}

/// A trait to abstract parsing of a specified value given a `ParserContext` and
/// CSS input.
pub trait Parse: Sized {
    /// Parse a value of this type.
    ///
    /// Returns an error on failure.
    fn parse<'i, 't>(
        context: &ParserContext,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self, ParseError<'i>>;
}

/// Parses the whole of `input` as a `T`. Whitespace around the value is
/// skipped, anything else left over is an error.
pub fn parse_entirely<'i, T>(
    context: &ParserContext,
    input: &'i str,
) -> Result<T, ParseError<'i>>
where
    T: Parse,
{
    let mut input = ParserInput::new(input);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(|input| T::parse(context, input))
}
