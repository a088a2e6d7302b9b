/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The entry point hosts use to turn a `clip-path` property value into a
//! [`ClipPath`].

use log::debug;
use serde_json::Value;
use servo_config::Preferences;

use crate::error_reporting::{ParseErrorReporter, RustLogReporter};
pub use crate::values::specified::ClipPath;

/// Parses a `clip-path` property value.
///
/// With native CSS parsing enabled the value must be a string of CSS text,
/// otherwise it must be the structured mapping read by
/// [`ClipPath::from_raw_value`]. Anything else, and any malformed value,
/// gives `None`, meaning no clip should be applied.
pub fn parse_clip_path_property(value: &Value, prefs: &Preferences) -> Option<ClipPath> {
    parse_clip_path_property_with_reporter(value, prefs, &RustLogReporter)
}

/// Like [`parse_clip_path_property`], but with a caller supplied reporter for
/// CSS syntax errors.
pub fn parse_clip_path_property_with_reporter(
    value: &Value,
    prefs: &Preferences,
    error_reporter: &dyn ParseErrorReporter,
) -> Option<ClipPath> {
    if prefs.native_css_parsing_enabled {
        match *value {
            Value::String(ref css) => ClipPath::parse_str(css, error_reporter),
            _ => {
                debug!("Expected clip-path text, got {}", value);
                None
            },
        }
    } else {
        ClipPath::from_raw_value(value)
            .map_err(|error| debug!("Dropping structured clip-path {}: {}", value, error))
            .ok()
    }
}
