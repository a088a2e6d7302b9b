/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::sync::Mutex;

use cssparser::SourceLocation;
use serde_json::json;
use servo_config::Preferences;
use style::clip_path::{
    ClipPath, parse_clip_path_property, parse_clip_path_property_with_reporter,
};
use style::error_reporting::{ContextualParseError, NullReporter, ParseErrorReporter};
use style::values::generics::basic_shape::GeometryBox;

struct TestingErrorReporter {
    errors: Mutex<Vec<(u32, u32, String)>>,
}

impl TestingErrorReporter {
    fn new() -> Self {
        TestingErrorReporter {
            errors: Mutex::new(Vec::new()),
        }
    }
}

impl ParseErrorReporter for TestingErrorReporter {
    fn report_error(&self, location: SourceLocation, error: ContextualParseError) {
        self.errors
            .lock()
            .unwrap()
            .push((location.line, location.column, error.to_string()));
    }
}

fn native() -> Preferences {
    Preferences {
        native_css_parsing_enabled: true,
    }
}

fn structured() -> Preferences {
    Preferences {
        native_css_parsing_enabled: false,
    }
}

#[test]
fn native_parsing_reads_css_text() {
    let _ = env_logger::try_init();
    let clip_path = parse_clip_path_property(&json!("inset(10px) margin-box"), &native()).unwrap();
    assert_eq!(clip_path.geometry_box, Some(GeometryBox::MarginBox));
    assert!(clip_path.shape.is_some());

    assert_eq!(
        parse_clip_path_property(&json!("none"), &native()),
        Some(ClipPath::none())
    );
    assert_eq!(parse_clip_path_property(&json!("invalid-box"), &native()), None);
    assert_eq!(
        parse_clip_path_property(&json!({ "geometryBox": "border-box" }), &native()),
        None
    );
}

#[test]
fn structured_parsing_reads_mappings() {
    let _ = env_logger::try_init();
    let value = json!({ "shape": { "type": "circle", "r": 50 }, "geometryBox": "padding-box" });
    assert_eq!(
        parse_clip_path_property(&value, &structured()),
        parse_clip_path_property(&json!("circle(50px) padding-box"), &native())
    );
    assert_eq!(parse_clip_path_property(&json!("circle(50px)"), &structured()), None);
    assert_eq!(
        parse_clip_path_property(&json!({ "shape": { "type": "star" } }), &structured()),
        None
    );
}

#[test]
fn default_preferences_parse_css_text() {
    assert!(parse_clip_path_property(&json!("circle()"), &Preferences::default()).is_some());
}

#[test]
fn errors_are_reported_with_their_location() {
    let reporter = TestingErrorReporter::new();
    let result = parse_clip_path_property_with_reporter(
        &json!("circle(50px) unknown(1px)"),
        &native(),
        &reporter,
    );
    assert_eq!(result, None);

    let errors = reporter.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    let (line, column, ref message) = errors[0];
    assert_eq!(line, 0);
    assert!(column > 1);
    assert!(
        message.starts_with("Invalid clip-path value 'circle(50px) unknown(1px)'"),
        "{}",
        message
    );
}

#[test]
fn trailing_input_is_reported() {
    let reporter = TestingErrorReporter::new();
    for css in ["circle(50px) content-box 10px", "border-box inset(1px) margin-box"] {
        assert_eq!(
            parse_clip_path_property_with_reporter(&json!(css), &native(), &reporter),
            None
        );
    }

    let errors = reporter.errors.lock().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].2.ends_with("trailing input after value"), "{}", errors[0].2);
    assert!(errors[1].2.ends_with("geometry box specified twice"), "{}", errors[1].2);
}

#[test]
fn valid_values_are_not_reported() {
    let reporter = TestingErrorReporter::new();
    for css in ["circle(50px)", "border-box", "none", ""] {
        assert!(parse_clip_path_property_with_reporter(&json!(css), &native(), &reporter).is_some());
    }
    assert!(reporter.errors.lock().unwrap().is_empty());

    assert_eq!(
        parse_clip_path_property_with_reporter(&json!("polygon(0 0)"), &native(), &NullReporter),
        None
    );
}
