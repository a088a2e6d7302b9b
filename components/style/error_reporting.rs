/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Types used to report parsing errors.

#![deny(missing_docs)]

use std::fmt;

use cssparser::{BasicParseErrorKind, ParseErrorKind, SourceLocation, Token};
use log::{info, log_enabled};
use style_traits::{ParseError, StyleParseErrorKind};

/// Errors that can be encountered while parsing a `clip-path` value.
#[derive(Debug)]
pub enum ContextualParseError<'a> {
    /// A `clip-path` value could not be parsed, and was dropped.
    InvalidClipPath(&'a str, ParseError<'a>),
}

impl<'a> fmt::Display for ContextualParseError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn token_to_str(t: &Token, f: &mut fmt::Formatter) -> fmt::Result {
            match *t {
                Token::Ident(ref i) => write!(f, "identifier {}", i),
                Token::Function(ref name) => write!(f, "function {}", name),
                Token::Comma => write!(f, "comma"),
                Token::CloseParenthesis => write!(f, "unmatched close parenthesis"),
                ref t => write!(f, "token '{}'", cssparser::ToCss::to_css_string(t)),
            }
        }

        fn parse_error_to_str(err: &ParseError, f: &mut fmt::Formatter) -> fmt::Result {
            match err.kind {
                ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(ref t)) => {
                    write!(f, "found unexpected ")?;
                    token_to_str(t, f)
                },
                ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
                    write!(f, "unexpected end of input")
                },
                ParseErrorKind::Basic(_) => write!(f, "invalid value"),
                ParseErrorKind::Custom(StyleParseErrorKind::UnexpectedFunction(ref name)) => {
                    write!(f, "unknown function {}()", name)
                },
                ParseErrorKind::Custom(StyleParseErrorKind::UnexpectedDimension(ref unit)) => {
                    write!(f, "unsupported unit '{}'", unit)
                },
                ParseErrorKind::Custom(ref kind) => f.write_str(kind.description()),
            }
        }

        match *self {
            ContextualParseError::InvalidClipPath(value, ref err) => {
                write!(f, "Invalid clip-path value '{}', ", value)?;
                parse_error_to_str(err, f)
            },
        }
    }
}

/// A generic trait for an error reporter.
pub trait ParseErrorReporter: Sync + Send {
    /// Called when the style engine detects an error.
    ///
    /// Returns the source location the error was reported from, and the error.
    fn report_error(&self, location: SourceLocation, error: ContextualParseError);
}

/// An error reporter that uses [the `log` crate](https://github.com/rust-lang-nursery/log)
/// at `info` level.
///
/// This logging is silent by default, and can be enabled with a `RUST_LOG=style=info`
/// environment variable.
/// (See [`env_logger`](https://rust-lang-nursery.github.io/log/env_logger/).)
pub struct RustLogReporter;

impl ParseErrorReporter for RustLogReporter {
    fn report_error(&self, location: SourceLocation, error: ContextualParseError) {
        if log_enabled!(log::Level::Info) {
            info!("{}:{} {}", location.line, location.column, error)
        }
    }
}

/// Error reporter which silently forgets errors
pub struct NullReporter;

impl ParseErrorReporter for NullReporter {
    fn report_error(&self, _: SourceLocation, _: ContextualParseError) {
        // do nothing
    }
}
