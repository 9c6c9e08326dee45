use chrono::NaiveDate;
use propmap_model::{FieldValue, TextFormats, Value, ValueKind};

// ── Value::kind ──────────────────────────────────────────────────

#[test]
fn null_has_no_kind() {
    assert_eq!(Value::Null.kind(), None);
    assert!(Value::Null.is_null());
}

#[test]
fn kinds_match_variants() {
    assert_eq!(Value::Bool(true).kind(), Some(ValueKind::Bool));
    assert_eq!(Value::Int(1).kind(), Some(ValueKind::Int));
    assert_eq!(Value::UInt(1).kind(), Some(ValueKind::UInt));
    assert_eq!(Value::Float(1.0).kind(), Some(ValueKind::Float));
    assert_eq!(Value::Char('c').kind(), Some(ValueKind::Char));
    assert_eq!(Value::Text("t".into()).kind(), Some(ValueKind::Text));
}

// ── Text rendering ───────────────────────────────────────────────

#[test]
fn whole_floats_render_without_fraction() {
    assert_eq!(Value::Float(5.0).to_string(), "5");
    assert_eq!(Value::Float(1.5).to_string(), "1.5");
}

#[test]
fn null_renders_as_null_but_has_no_text() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Null.to_text(&TextFormats::default()), None);
}

#[test]
fn into_text_keeps_null() {
    let formats = TextFormats::default();
    assert_eq!(Value::Null.into_text(&formats), Value::Null);
    assert_eq!(Value::Int(42).into_text(&formats), Value::Text("42".into()));
}

#[test]
fn date_renders_with_display_format() {
    let d = NaiveDate::from_ymd_opt(2016, 7, 4).unwrap();
    assert_eq!(Value::Date(d).to_string(), "07/04/2016");
}

// ── ValueKind ────────────────────────────────────────────────────

#[test]
fn kind_display() {
    assert_eq!(ValueKind::Text.to_string(), "text");
    assert_eq!(ValueKind::Composite("Address").to_string(), "composite Address");
}

#[test]
fn kind_predicates() {
    assert!(ValueKind::Composite("X").is_composite());
    assert!(!ValueKind::Int.is_composite());
}

// ── FieldValue ───────────────────────────────────────────────────

#[test]
fn field_kinds() {
    assert_eq!(<i32 as FieldValue>::kind(), ValueKind::Int);
    assert_eq!(<u16 as FieldValue>::kind(), ValueKind::UInt);
    assert_eq!(<f32 as FieldValue>::kind(), ValueKind::Float);
    assert_eq!(<String as FieldValue>::kind(), ValueKind::Text);
    assert_eq!(<Option<bool> as FieldValue>::kind(), ValueKind::Bool);
    assert!(!<bool as FieldValue>::nullable());
}

#[test]
fn narrow_ints_widen_into_values() {
    assert_eq!(7i8.into_value(), Value::Int(7));
    assert_eq!(7u8.into_value(), Value::UInt(7));
}

#[test]
fn i32_accepts_in_range_values() {
    assert_eq!(i32::from_value(Value::Int(-40)).unwrap(), -40);
    assert!(i32::from_value(Value::Int(i64::from(i32::MAX) + 1)).is_err());
}

#[test]
fn f32_rejects_values_beyond_its_range() {
    assert!(f32::from_value(Value::Float(1e300)).is_err());
    assert_eq!(f32::from_value(Value::Float(0.5)).unwrap(), 0.5);
}

#[test]
fn f32_widens_to_its_shortest_decimal() {
    assert_eq!(0.1f32.into_value(), Value::Float(0.1));
    assert_eq!(
        0.1f32.into_value().to_text(&TextFormats::default()).unwrap(),
        "0.1"
    );
    assert_eq!(f32::from_value(0.1f32.into_value()).unwrap(), 0.1f32);
}
