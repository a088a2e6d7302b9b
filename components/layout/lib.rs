/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Resolution of parsed `clip-path` values against an element's box into
//! path geometry for a drawing backend.

#![deny(unsafe_code)]

pub mod display_list;
pub mod geom;

pub use display_list::clip_path::{ClipPathGeometry, resolve_clip_path};
pub use display_list::path::{PathSegment, PathSink};
pub use geom::{AutoOr, BorderRadius, LayoutMetrics};
