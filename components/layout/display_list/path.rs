/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Backend-agnostic path instructions, and the trait a drawing backend
//! implements to consume them.

use euclid::Angle;

use crate::geom::{LayoutPoint, LayoutSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(LayoutPoint),
    LineTo(LayoutPoint),
    /// An elliptical arc. Like canvas `ellipse()`, a straight line joins the
    /// current point to the start of the arc.
    Ellipse {
        center: LayoutPoint,
        radii: LayoutSize,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    ClosePath,
}

/// Returns the signed angle swept going from `start_angle` to `end_angle`.
pub fn sweep_angle(start_angle: f32, end_angle: f32, anticlockwise: bool) -> f32 {
    let mut start = Angle::radians(start_angle);
    let mut end = Angle::radians(end_angle);

    // Wrap angles mod 2 * PI if necessary
    if !anticlockwise && start > end + Angle::two_pi() ||
        anticlockwise && end > start + Angle::two_pi()
    {
        start = start.positive();
        end = end.positive();
    }

    let sweep = match anticlockwise {
        true => {
            if end - start == Angle::two_pi() {
                -Angle::two_pi()
            } else if end > start {
                -(Angle::two_pi() - (end - start))
            } else {
                -(start - end)
            }
        },
        false => {
            if start - end == Angle::two_pi() {
                Angle::two_pi()
            } else if start > end {
                Angle::two_pi() - (start - end)
            } else {
                end - start
            }
        },
    };
    sweep.radians
}

/// A drawing backend path builder.
pub trait PathSink {
    fn move_to(&mut self, point: LayoutPoint);
    fn line_to(&mut self, point: LayoutPoint);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        center: LayoutPoint,
        radii: LayoutSize,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    );
    fn close_path(&mut self);

    fn add_segments(&mut self, segments: &[PathSegment]) {
        for segment in segments {
            match *segment {
                PathSegment::MoveTo(point) => self.move_to(point),
                PathSegment::LineTo(point) => self.line_to(point),
                PathSegment::Ellipse {
                    center,
                    radii,
                    rotation,
                    start_angle,
                    end_angle,
                    anticlockwise,
                } => self.ellipse(
                    center,
                    radii,
                    rotation,
                    start_angle,
                    end_angle,
                    anticlockwise,
                ),
                PathSegment::ClosePath => self.close_path(),
            }
        }
    }
}

/// Largest distance between the flattened curves and the true arc, in px.
const ARC_TOLERANCE: f64 = 0.1;

fn to_kurbo(point: LayoutPoint) -> kurbo::Point {
    kurbo::Point::new(point.x as f64, point.y as f64)
}

impl PathSink for kurbo::BezPath {
    fn move_to(&mut self, point: LayoutPoint) {
        kurbo::BezPath::move_to(self, to_kurbo(point));
    }

    fn line_to(&mut self, point: LayoutPoint) {
        kurbo::BezPath::line_to(self, to_kurbo(point));
    }

    fn ellipse(
        &mut self,
        center: LayoutPoint,
        radii: LayoutSize,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        let arc = kurbo::Arc {
            center: to_kurbo(center),
            radii: kurbo::Vec2::new(radii.width as f64, radii.height as f64),
            start_angle: start_angle as f64,
            sweep_angle: sweep_angle(start_angle, end_angle, anticlockwise) as f64,
            x_rotation: rotation as f64,
        };

        let (sin_rotation, cos_rotation) = arc.x_rotation.sin_cos();
        let (sin_start, cos_start) = arc.start_angle.sin_cos();
        let (x, y) = (arc.radii.x * cos_start, arc.radii.y * sin_start);
        let start = kurbo::Point::new(
            arc.center.x + x * cos_rotation - y * sin_rotation,
            arc.center.y + x * sin_rotation + y * cos_rotation,
        );

        // A subpath has to be started before anything can be appended to it.
        match self.elements().last() {
            None | Some(kurbo::PathEl::ClosePath) => kurbo::BezPath::move_to(self, start),
            Some(_) => kurbo::BezPath::line_to(self, start),
        }

        if arc.sweep_angle.abs() < 1e-3 {
            return;
        }
        for element in arc.append_iter(ARC_TOLERANCE) {
            self.push(element);
        }
    }

    fn close_path(&mut self) {
        kurbo::BezPath::close_path(self);
    }
}
