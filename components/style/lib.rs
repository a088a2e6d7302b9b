/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Parsing and serialization of the CSS `clip-path` property.
//!
//! A value is parsed into a [`ClipPath`](values::specified::ClipPath), an
//! optional basic shape plus an optional geometry box. Values come either as
//! CSS text or, for hosts that pre-process styles, as a structured mapping
//! (see [`raw_value`]). [`clip_path::parse_clip_path_property`] picks between
//! the two based on the preferences it is given.
//!
//! Turning a parsed value into geometry is the job of the layout crate.

#![deny(unsafe_code)]

pub mod clip_path;
pub mod error_reporting;
pub mod parser;
pub mod raw_value;
pub mod values;
