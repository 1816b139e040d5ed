//! End-to-end typeset scenarios: detection, inference, casting and
//! failure handling at column and frame level.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use semtype::config::ParallelConfig;
use semtype::{
    cast_frame, detect_frame_type, detect_series_type, infer_frame_type, infer_series_type,
    Column, ConversionError, ConversionPolicy, Frame, GraphNode, ResolveMode, SemtypeError,
    TypeNode, Typeset, TypesetConfig, Value,
};

// ═══════════════════════════════════════════════════════════════════════════
// Mixed-script frame
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_detect_mixed_scripts_all_string() {
    let typeset = Typeset::complete().unwrap();
    let frame = fixture_mixed_scripts_frame();

    let detected = detect_frame_type(&frame, &typeset);
    assert_eq!(detected.len(), 10);
    assert_all_types(&detected, "String");
}

#[test]
fn test_infer_mixed_scripts_promotes_digits() {
    let typeset = Typeset::complete().unwrap();
    let frame = fixture_mixed_scripts_frame();

    let inferred = infer_frame_type(&frame, &typeset);
    assert_types(&inferred, &[("digits", "Integer")]);
    for (column, node) in inferred.iter().filter(|(c, _)| c.as_str() != "digits") {
        assert_eq!(node.name(), "String", "column {column}");
    }
}

#[test]
fn test_cast_mixed_scripts() {
    let typeset = Typeset::complete().unwrap();
    let frame = fixture_mixed_scripts_frame();

    let cast = cast_frame(&frame, &typeset);
    assert_eq!(
        cast.column_names().collect::<Vec<_>>(),
        frame.column_names().collect::<Vec<_>>()
    );

    let digits = cast.column("digits").unwrap();
    assert_eq!(digits.values[1].as_int().unwrap() - 3, 121220);
    assert_eq!(digits.values[0], Value::Int(1234));
    assert_eq!(digits.len(), 3);

    let latin = cast.column("latin").unwrap();
    assert_eq!(format!("{}1", latin.values[1].as_str().unwrap()), "apple1");
    assert_eq!(latin, frame.column("latin").unwrap());
}

#[test]
fn test_parallel_and_sequential_agree() {
    let frame = fixture_mixed_scripts_frame();
    let parallel = semtype::complete_set(TypesetConfig::default().with_parallel(ParallelConfig {
        enable_rayon: true,
        min_columns: 1,
    }))
    .unwrap();
    let sequential = semtype::complete_set(TypesetConfig::default().sequential()).unwrap();

    assert_eq!(
        parallel.infer_frame_type(&frame),
        sequential.infer_frame_type(&frame)
    );
    assert_eq!(parallel.cast_frame(&frame), sequential.cast_frame(&frame));
}

// ═══════════════════════════════════════════════════════════════════════════
// Column scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_complex_literals_infer_complex_detect_string() {
    let typeset = Typeset::standard().unwrap();
    let column = fixture_complex_strings();

    assert_eq!(detect_series_type(&column, &typeset), "String");
    assert_eq!(infer_series_type(&column, &typeset).unwrap(), "Complex");
}

#[test]
fn test_cast_complex_literals() {
    let typeset = Typeset::standard().unwrap();
    let column = Column::from_values("c", ["(12.0+10.0j)", "(-4.0+6.2j)", "(8.0+2.0j)"]);

    let cast = typeset.cast_series(&column).unwrap();
    match &cast.values[1] {
        Value::Complex(c) => assert_eq!(c.re, -4.0),
        other => panic!("expected a complex value, got {other:?}"),
    }
}

#[test]
fn test_integer_string_base_scenario() {
    let typeset = build_integer_string_typeset().unwrap();
    let digits = fixture_digit_strings();

    assert_eq!(typeset.detect_series_type(&digits), "String");
    assert_eq!(typeset.infer_series_type(&digits).unwrap(), "Integer");
    assert_eq!(
        typeset.cast_series(&digits).unwrap().values,
        vec![Value::Int(1), Value::Int(2), Value::Int(3)]
    );

    let complex = fixture_complex_strings();
    assert_eq!(typeset.detect_series_type(&complex), "String");
    assert_eq!(typeset.infer_series_type(&complex).unwrap(), "Complex");

    // Native ints match the base directly.
    let ints = Column::from_values("i", [1i64, 2]);
    assert_eq!(typeset.detect_series_type(&ints), "Integer");
}

#[test]
fn test_whole_float_strings_reach_integer() {
    let typeset = Typeset::standard().unwrap();
    let column = Column::from_values("f", ["1.0", "2.0"]);

    let resolution = typeset.resolve(&column, ResolveMode::Infer).unwrap();
    assert_eq!(resolution.path, vec!["Generic", "String", "Float", "Integer"]);
    assert_eq!(resolution.column.values, vec![Value::Int(1), Value::Int(2)]);
    assert!(resolution.converted);
}

#[test]
fn test_real_complex_reaches_float() {
    let typeset = Typeset::standard().unwrap();
    let column = Column::from_values("c", ["(1.5+0j)", "(2.5+0j)"]);

    assert_eq!(typeset.infer_series_type(&column).unwrap(), "Float");
    assert_eq!(
        typeset.cast_series(&column).unwrap().values,
        vec![Value::Float(1.5), Value::Float(2.5)]
    );
}

#[test]
fn test_native_columns_detect() {
    let typeset = Typeset::standard().unwrap();
    let detected = typeset.detect_frame_type(&fixture_native_frame());

    assert_types(
        &detected,
        &[
            ("ints", "Integer"),
            ("floats", "Float"),
            ("bools", "Boolean"),
            ("text", "String"),
            ("mixed", "Object"),
            ("empty", "Generic"),
        ],
    );
}

#[test]
fn test_categorical_detected_before_values() {
    let typeset = Typeset::standard().unwrap();
    let column = Column::from_values("c", ["1", "2", "1"]).into_categorical();

    assert_eq!(typeset.detect_series_type(&column), "Categorical");
    assert_eq!(typeset.infer_series_type(&column).unwrap(), "Categorical");
    assert_eq!(typeset.cast_series(&column).unwrap(), column);
}

#[test]
fn test_ip_addresses_only_in_complete_set() {
    let column = Column::from_values("ip", ["10.0.0.1", "::1"]);

    let complete = Typeset::complete().unwrap();
    assert_eq!(complete.infer_series_type(&column).unwrap(), "IpAddress");

    let standard = Typeset::standard().unwrap();
    assert_eq!(standard.infer_series_type(&column).unwrap(), "String");
}

#[test]
fn test_datetime_strings() {
    let typeset = Typeset::standard().unwrap();
    let column = Column::from_values("ts", ["2024-01-01 00:00:00", "2024-06-30T12:00:00"]);

    assert_eq!(typeset.infer_series_type(&column).unwrap(), "DateTime");
}

#[test]
fn test_native_datetime_with_null_detects_datetime() {
    let typeset = Typeset::standard().unwrap();
    let ts = chrono::NaiveDate::from_ymd_opt(2019, 12, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let column = Column::new("ts", vec![Value::DateTime(ts), Value::Null]);

    assert_eq!(typeset.detect_series_type(&column), "DateTime");
}

// ═══════════════════════════════════════════════════════════════════════════
// Tie-break and construction
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_first_declared_sibling_wins() {
    let first = Typeset::builder()
        .with_base(TestNode::new("Any", always).detects("A").detects("B"))
        .with_derivative(TestNode::new("A", always))
        .with_derivative(TestNode::new("B", always))
        .build()
        .unwrap();
    let reordered = Typeset::builder()
        .with_base(TestNode::new("Any", always).detects("A").detects("B"))
        .with_derivative(TestNode::new("B", always))
        .with_derivative(TestNode::new("A", always))
        .build()
        .unwrap();

    let column = Column::from_values("x", [1i64]);
    assert_eq!(first.detect_series_type(&column), "A");
    assert_eq!(reordered.detect_series_type(&column), "A");
}

#[test]
fn test_cyclic_typeset_is_rejected() {
    let err = build_cyclic_typeset().unwrap_err();
    match err {
        SemtypeError::CyclicRelations(cycle) => {
            assert_eq!(cycle.cycle.len(), 4);
            assert_eq!(cycle.cycle.first(), cycle.cycle.last());
            for name in ["A", "B", "C"] {
                assert!(cycle.cycle.iter().any(|n| n == name));
            }
        }
        other => panic!("expected a cycle error, got {other}"),
    }
}

#[test]
fn test_duplicate_and_reserved_names_rejected() {
    let duplicate = Typeset::builder()
        .with_base(TestNode::new("A", always))
        .with_derivative(TestNode::new("A", always))
        .build();
    assert!(matches!(duplicate, Err(SemtypeError::DuplicateType(name)) if name == "A"));

    let reserved = Typeset::builder()
        .with_base(TestNode::new(GraphNode::ROOT_NAME, always))
        .build();
    assert!(matches!(reserved, Err(SemtypeError::DuplicateType(_))));
}

#[test]
fn test_no_base_match_is_root() {
    let typeset = Typeset::builder()
        .with_base(TestNode::new("Ints", all_ints))
        .build()
        .unwrap();

    let node = typeset.detect_series_type(&Column::from_values("s", ["x"]));
    assert_root(&node);
    assert_eq!(node.to_string(), "Unknown");
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversion failure policy
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_strict_policy_still_infers_parsed_columns() {
    let strict = semtype::standard_set(
        TypesetConfig::default().with_conversion_policy(ConversionPolicy::Strict),
    )
    .unwrap();

    // Boolean rejects every cell before Integer is tried.
    let digits = Column::from_values("d", ["1", "2", "3"]);
    assert_eq!(strict.infer_series_type(&digits).unwrap(), "Integer");
    assert_eq!(strict.detect_series_type(&digits), "String");
    assert!(strict.graph().is_reachable("String", "Integer"));

    let text = Column::from_values("t", ["orange"]);
    assert_eq!(strict.infer_series_type(&text).unwrap(), "String");

    // Float refines to Integer only when every value is whole.
    let floats = Column::from_values("f", ["1.5", "2.0"]);
    assert_eq!(strict.infer_series_type(&floats).unwrap(), "Float");
}

#[test]
fn test_strict_policy_reports_partial_conversion() {
    let strict = semtype::standard_set(
        TypesetConfig::default().with_conversion_policy(ConversionPolicy::Strict),
    )
    .unwrap();
    let partial = Column::from_values("p", ["1.5", "x"]);

    let err = strict.infer_series_type(&partial).unwrap_err();
    assert!(matches!(
        err,
        SemtypeError::Conversion(ConversionError::Partial { .. })
    ));

    // Detection never converts, so the policy does not apply.
    assert_eq!(strict.detect_series_type(&partial), "String");

    // Frame operations degrade the column instead of aborting.
    let frame = Frame::from_columns(vec![partial.clone(), fixture_digit_strings()]);
    let inferred = strict.infer_frame_type(&frame);
    assert_root(&inferred["p"]);

    let cast = strict.cast_frame(&frame);
    assert_eq!(cast.column("p").unwrap(), &partial);

    let lenient = Typeset::standard().unwrap();
    assert_eq!(lenient.infer_series_type(&partial).unwrap(), "String");
}

#[test]
fn test_malformed_conversion_degrades_frame_column() {
    let typeset = Typeset::builder()
        .with_base(TestNode::new("Any", always).relates_to("Broken"))
        .with_derivative(TestNode::new("Broken", all_ints).converter(truncating))
        .build()
        .unwrap();

    let column = Column::from_values("s", ["a", "b"]);
    assert!(matches!(
        typeset.infer_series_type(&column),
        Err(SemtypeError::Conversion(ConversionError::Malformed { .. }))
    ));

    let frame = Frame::from_columns(vec![column.clone()]);
    assert_root(&typeset.infer_frame_type(&frame)["s"]);
    assert_eq!(typeset.cast_frame(&frame).column("s").unwrap(), &column);
    assert_eq!(typeset.detect_series_type(&column), "Any");
}

// ═══════════════════════════════════════════════════════════════════════════
// Prep and summaries
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_summarize_requires_prep() {
    let typeset = Typeset::standard().unwrap();
    let err = typeset.summarize(&fixture_native_frame()).unwrap_err();
    assert!(matches!(err, SemtypeError::NotPrepared(_)));
}

#[test]
fn test_prep_and_summarize() {
    let mut typeset = Typeset::standard().unwrap();
    let frame = fixture_mixed_scripts_frame();

    typeset.prep(&frame);
    let map = typeset.column_type_map().unwrap();
    assert_eq!(map["digits"], "Integer");

    let summary = typeset.summarize(&typeset.cast_frame(&frame)).unwrap();
    assert_eq!(summary.len(), 10);

    let digits = summary.get("digits").unwrap();
    assert_eq!(digits.type_name, "Integer");
    let numeric = digits.numeric.as_ref().unwrap();
    assert_eq!(numeric.min, 1234.0);
    assert_eq!(numeric.max, 121223.0);

    let latin = summary.get("latin").unwrap();
    assert_eq!(latin.type_name, "String");
    assert_eq!(latin.n_unique, 3);
    assert_eq!(latin.text.as_ref().unwrap().category_counts["letter"], 15);

    let whitespace = summary.get("whitespace").unwrap();
    assert_eq!(whitespace.type_name, "String");
    assert_eq!(whitespace.text.as_ref().unwrap().category_counts["whitespace"], 3);
}

#[test]
fn test_summarize_unknown_column() {
    let mut typeset = Typeset::standard().unwrap();
    typeset.prep(&fixture_mixed_scripts_frame());

    let other = Frame::from_columns(vec![Column::from_values("new", ["x"])]);
    let err = typeset.summarize(&other).unwrap_err();
    assert!(matches!(err, SemtypeError::ColumnNotPrepared(name) if name == "new"));
}

#[test]
fn test_prep_overwrites_previous_state() {
    let mut typeset = Typeset::standard().unwrap();
    typeset.prep(&fixture_mixed_scripts_frame());
    typeset.prep(&fixture_native_frame());

    let map = typeset.column_type_map().unwrap();
    assert!(map.get("digits").is_none());
    assert_eq!(map["ints"], "Integer");
}

#[test]
fn test_summary_report_json() {
    let mut typeset = Typeset::standard().unwrap();
    let frame = fixture_native_frame();
    typeset.prep(&frame);

    let report = typeset.summary_report(&frame).unwrap();
    assert_eq!(report.general.n_observations, 3);
    assert_eq!(report.general.n_variables, 6);
    assert_eq!(report.types["mixed"], "Object");

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["types"]["ints"], "Integer");
    assert_eq!(json["columns"]["columns"][0]["column"], "ints");
    assert_eq!(json["columns"]["columns"][0]["numeric"]["n_negative"], 1);
}

#[test]
fn test_typeset_catalogue_accessors() {
    let typeset = Typeset::complete().unwrap();

    assert_eq!(
        typeset.base_types().iter().map(|t| t.name()).collect::<Vec<_>>(),
        vec!["Generic"]
    );
    assert_eq!(typeset.types().count(), 10);
    assert!(typeset.get("Float").is_some());
    assert!(typeset.get("Decimal").is_none());
    assert!(typeset.graph().relation("String", "Integer").unwrap().is_inferential());
    assert!(!typeset.graph().relation("Generic", "Integer").unwrap().is_inferential());
}
