use bindform::{
    bind, bind_form, bind_post_form, ConvertError, FieldKind, Form, FormValues, IntWidth,
    RequestValues,
};

fn body(pairs: &[(&str, &str)]) -> RequestValues {
    RequestValues::new(FormValues::new(), pairs.iter().copied().collect())
}

fn request(query: &[(&str, &str)], body: &[(&str, &str)]) -> RequestValues {
    RequestValues::new(query.iter().copied().collect(), body.iter().copied().collect())
}

#[derive(Form, Default, Debug)]
struct Pair {
    #[form("v1")]
    v1: String,
    #[form("v2")]
    v2: String,
}

#[test]
fn test_bind_form_falls_back_to_query() {
    let cases = [
        (vec![("v2", "world")], ("hello", "world")),
        (vec![("v1", "goodby"), ("v2", "world")], ("goodby", "world")),
        (vec![("v1", ""), ("v2", "world")], ("hello", "world")),
    ];

    for (posted, (want1, want2)) in cases {
        let values = request(&[("v1", "hello")], &posted);
        let mut target = Pair::default();
        bind_form(&values, &mut target).unwrap();
        assert_eq!(target.v1, want1, "{posted:?}");
        assert_eq!(target.v2, want2, "{posted:?}");
    }
}

#[test]
fn test_bind_post_form_ignores_query() {
    let values = request(&[("v1", "hello")], &[("v2", "world")]);
    let mut target = Pair::default();
    bind_post_form(&values, &mut target).unwrap();
    assert_eq!(target.v1, "");
    assert_eq!(target.v2, "world");
}

#[derive(Form, Default)]
struct BoolTarget {
    #[form("v")]
    v: bool,
}

#[test]
fn test_bind_bool() {
    let cases = [
        ("TRUE", true),
        ("True", true),
        ("true", true),
        ("T", true),
        ("t", true),
        ("1", true),
        ("FALSE", false),
        ("False", false),
        ("false", false),
        ("F", false),
        ("f", false),
        ("0", false),
        ("", false),
    ];
    for (raw, want) in cases {
        let mut target = BoolTarget::default();
        bind_post_form(&body(&[("v", raw)]), &mut target).unwrap();
        assert_eq!(target.v, want, "{raw:?}");
    }

    let mut target = BoolTarget::default();
    bind_post_form(&body(&[]), &mut target).unwrap();
    assert!(!target.v);
}

#[test]
fn test_bind_bool_fail() {
    for raw in ["2", "invalid"] {
        let mut target = BoolTarget::default();
        let err = bind_post_form(&body(&[("v", raw)]), &mut target).unwrap_err();
        assert_eq!(err.key(), "v");
        assert!(matches!(err.cause(), ConvertError::InvalidBool { .. }));
        assert!(!target.v);
    }
}

#[derive(Form, Default)]
struct IntTarget {
    #[form("v")]
    v: isize,
}

#[test]
fn test_bind_int() {
    for (raw, want) in [("12345", 12345), ("-12345", -12345), ("", 0)] {
        let mut target = IntTarget::default();
        bind_post_form(&body(&[("v", raw)]), &mut target).unwrap();
        assert_eq!(target.v, want, "{raw:?}");
    }
}

#[test]
fn test_bind_int_fail() {
    for raw in ["1.5", "a"] {
        let mut target = IntTarget::default();
        assert!(bind_post_form(&body(&[("v", raw)]), &mut target).is_err(), "{raw:?}");
        assert_eq!(target.v, 0);
    }
}

#[derive(Form, Default)]
struct UIntTarget {
    #[form("v")]
    v: usize,
}

#[test]
fn test_bind_uint() {
    for (raw, want) in [("12345", 12345), ("", 0)] {
        let mut target = UIntTarget::default();
        bind_post_form(&body(&[("v", raw)]), &mut target).unwrap();
        assert_eq!(target.v, want, "{raw:?}");
    }
}

#[test]
fn test_bind_uint_fail() {
    for raw in ["-12345", "1.5", "a"] {
        let mut target = UIntTarget::default();
        assert!(bind_post_form(&body(&[("v", raw)]), &mut target).is_err(), "{raw:?}");
        assert_eq!(target.v, 0);
    }
}

#[derive(Form, Default)]
struct Float32Target {
    #[form("v")]
    v: f32,
}

#[test]
fn test_bind_float32() {
    let max_e = format!("{:.46e}", 1e38f64);
    let max_f = format!("{:.46}", 1e38f64);
    let min_e = format!("{:.45e}", 1e-45f64);
    let min_f = format!("{:.45}", 1e-45f64);
    let very_small = format!("{:.46}", 1e-46f64);

    let cases = [
        ("12345", 12345.0),
        ("-12345", -12345.0),
        ("123.45", 123.45),
        ("-123.45", -123.45),
        (max_e.as_str(), 1e38),
        (max_f.as_str(), 1e38),
        (min_e.as_str(), 1e-45),
        (min_f.as_str(), 1e-45),
        (very_small.as_str(), 0.0),
        ("", 0.0),
    ];

    for (raw, want) in cases {
        let mut target = Float32Target::default();
        bind_post_form(&body(&[("v", raw)]), &mut target).unwrap();
        assert_eq!(target.v, want, "{raw:?}");
    }
}

#[test]
fn test_bind_float32_fail() {
    for raw in ["a", "1e400"] {
        let mut target = Float32Target::default();
        assert!(bind_post_form(&body(&[("v", raw)]), &mut target).is_err(), "{raw:?}");
        assert_eq!(target.v, 0.0);
    }
}

#[derive(Form, Default)]
struct StringTarget {
    #[form("v")]
    v: String,
}

#[test]
fn test_bind_string() {
    for (raw, want) in [("hello", "hello"), ("", "")] {
        let mut target = StringTarget::default();
        bind_post_form(&body(&[("v", raw)]), &mut target).unwrap();
        assert_eq!(target.v, want);
    }
}

#[derive(Form)]
struct Mixed {
    #[form(key = "count")]
    count: u8,
    #[form("ratio")]
    ratio: f64,
    #[form("label")]
    label: String,
}

#[test]
fn test_fail_fast_keeps_earlier_writes() {
    let mut target = Mixed {
        count: 1,
        ratio: 2.0,
        label: "old".into(),
    };
    let src: FormValues = [("count", "9"), ("ratio", "x"), ("label", "new")]
        .into_iter()
        .collect();

    let err = bind(&src, &mut target).unwrap_err();

    assert_eq!(err.key(), "ratio");
    assert!(matches!(err.cause(), ConvertError::Float { .. }));
    assert_eq!(target.count, 9);
    assert_eq!(target.ratio, 2.0);
    assert_eq!(target.label, "old");
}

#[test]
fn test_narrow_overflow_reports_declared_width() {
    let mut target = Mixed {
        count: 7,
        ratio: 0.0,
        label: String::new(),
    };
    let src: FormValues = [("count", "300")].into_iter().collect();
    let err = bind(&src, &mut target).unwrap_err();
    assert_eq!(
        err.into_cause(),
        ConvertError::OutOfRange {
            value: "300".into(),
            kind: FieldKind::UInt(IntWidth::W8),
        }
    );
    assert_eq!(target.count, 7);
}

#[derive(Form, Default)]
struct Untagged {
    plain: String,
    #[form(skip)]
    skipped: Vec<String>,
    #[form("n")]
    n: i16,
}

#[test]
fn test_untagged_field_reads_empty_key() {
    let src: FormValues = [("", "from-empty-key"), ("plain", "ignored"), ("n", "-3")]
        .into_iter()
        .collect();
    let mut target = Untagged::default();
    bind(&src, &mut target).unwrap();

    assert_eq!(target.plain, "from-empty-key");
    assert!(target.skipped.is_empty());
    assert_eq!(target.n, -3);
    assert_eq!(target.descriptors().len(), 2);
}

#[test]
fn test_error_message_names_key() {
    let mut target = BoolTarget::default();
    let err = bind_post_form(&body(&[("v", "maybe")]), &mut target).unwrap_err();
    assert_eq!(err.to_string(), "field 'v': invalid boolean \"maybe\"");
}

#[derive(Form, Default)]
struct SharedKey {
    #[form("n")]
    raw: String,
    #[form("n")]
    parsed: u32,
}

#[test]
fn test_fields_sharing_a_key_read_the_same_value() {
    let mut target = SharedKey::default();
    bind_post_form(&body(&[("n", "7")]), &mut target).unwrap();
    assert_eq!(target.raw, "7");
    assert_eq!(target.parsed, 7);

    let mut target = SharedKey::default();
    let err = bind_post_form(&body(&[("n", "seven")]), &mut target).unwrap_err();
    assert_eq!(err.key(), "n");
    assert_eq!(target.raw, "seven");
    assert_eq!(target.parsed, 0);
}
