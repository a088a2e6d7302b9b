/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::sync::{LazyLock, RwLock};

use log::warn;
use serde::{Deserialize, Serialize};

static PREFERENCES: LazyLock<RwLock<Preferences>> =
    LazyLock::new(|| RwLock::new(Preferences::default()));

/// A snapshot of the current process-wide preferences.
///
/// Parsing code never reads this itself. Hosts that do not thread their own
/// [`Preferences`] through can pass the result to the entry points.
#[inline]
pub fn get() -> Preferences {
    PREFERENCES
        .read()
        .map(|prefs| prefs.clone())
        .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
}

/// Replaces the process-wide preferences.
pub fn set(preferences: Preferences) {
    match PREFERENCES.write() {
        Ok(mut prefs) => *prefs = preferences,
        Err(poisoned) => *poisoned.into_inner() = preferences,
    }
}

/// Switches between the two clip-path input representations.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Preferences {
    /// When true, `clip-path` values arrive as CSS text and are parsed here.
    /// When false, they arrive already split into a structured mapping.
    pub native_css_parsing_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            native_css_parsing_enabled: true,
        }
    }
}

impl Preferences {
    /// Reads preferences from a JSON object. Unknown keys are ignored and
    /// missing keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self, PrefError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(PrefError::Json)?;
        if !value.is_object() {
            return Err(PrefError::NotAnObject);
        }
        serde_json::from_value(value).map_err(|error| {
            warn!("Ignoring malformed preferences: {}", error);
            PrefError::Json(error)
        })
    }
}

/// Why a preferences file could not be read.
#[derive(Debug)]
pub enum PrefError {
    NotAnObject,
    Json(serde_json::Error),
}

impl fmt::Display for PrefError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefError::NotAnObject => f.write_str("preferences must be a JSON object"),
            PrefError::Json(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for PrefError {}
