use std::sync::Arc;

use gloss_types::{Annotated, AnnotationError, Record, Subject, assert_object, record};

struct Widget;
impl Annotated for Widget {}

struct Documented;
impl Annotated for Documented {
    fn embedded(&self) -> Option<Record> {
        Some(record! { "name" => "documented" })
    }
}

#[test]
fn kind_names_the_variant() {
    assert_eq!(Subject::Null.kind(), "null");
    assert_eq!(Subject::from(true).kind(), "boolean");
    assert_eq!(Subject::from(42).kind(), "integer");
    assert_eq!(Subject::from(2.5).kind(), "float");
    assert_eq!(Subject::from("x").kind(), "string");
    assert_eq!(Subject::object(Widget).kind(), "object");
}

#[test]
fn primitives_fail_the_object_assertion() {
    let primitives = [
        Subject::Null,
        Subject::from(42),
        Subject::from("x"),
        Subject::from(true),
        Subject::from(2.5),
    ];
    for subject in primitives {
        assert!(matches!(
            assert_object(&subject),
            Err(AnnotationError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn assertion_error_names_the_rejected_kind() {
    let err = assert_object(&Subject::from("x")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("object-like"));
    assert!(message.contains("string"));
}

#[test]
fn objects_pass_the_assertion() {
    let subject = Subject::object(Widget);
    assert!(assert_object(&subject).is_ok());
    assert!(subject.is_object());
}

#[test]
fn clones_of_one_arc_share_identity() {
    let widget: Arc<Widget> = Arc::new(Widget);
    let a = Subject::from(Arc::clone(&widget));
    let b = Subject::from(widget);
    assert!(a.same_object(&b));
    assert!(a.same_object(&a.clone()));
}

#[test]
fn distinct_allocations_have_distinct_identity() {
    let a = Subject::object(Widget);
    let b = Subject::object(Widget);
    assert!(!a.same_object(&b));
}

#[test]
fn primitives_never_share_identity() {
    assert!(!Subject::from(1).same_object(&Subject::from(1)));
    assert!(!Subject::Null.same_object(&Subject::Null));
    assert!(!Subject::from(1).same_object(&Subject::object(Widget)));
}

#[test]
fn embedded_defaults_to_none() {
    assert!(Widget.embedded().is_none());
}

#[test]
fn embedded_can_be_overridden() {
    let record = Documented.embedded().unwrap();
    assert_eq!(record.get("name"), Some(&"documented".into()));
}

#[test]
fn debug_output_shows_the_variant() {
    assert_eq!(format!("{:?}", Subject::from(42)), "Int(42)");
    assert!(format!("{:?}", Subject::object(Widget)).starts_with("Object("));
}
