/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Specified values.

pub use self::basic_shape::{
    BasicShape, Circle, Ellipse, InsetRect, Path, Polygon, PolygonCoord, ShapeRect, Xywh,
};
pub use self::clip_path::ClipPath;
pub use self::length::{Length, LengthPercentage, Percentage};
pub use super::generics::basic_shape::{FillRule, GeometryBox};

pub mod basic_shape;
pub mod clip_path;
pub mod length;
