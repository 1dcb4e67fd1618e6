//! End-to-end tests: parse a table, then run validators against it.

use std::io::Write;

use chrono::{Duration, NaiveDate};
use tempfile::NamedTempFile;

use tablecheck::{
    CellsValidator, DataTable, FrameValidator, Parser, ParserConfig, Quantifier, Selection, Suite,
    SuiteConfig, TableAccess, TableCheckError, Validator, Value, ValueFilter, ValueKind, cells,
    frame, rows,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// Columns `a`, `b` with two blanks and a float.
fn base_table() -> DataTable {
    let file = create_test_file("a,b\n1,-42\n1,\n1,\n1,3.14\n");
    Parser::new().parse_file(file.path()).expect("Failed to parse")
}

fn mixed_table() -> DataTable {
    Parser::new()
        .parse_str("a\tb\tc\n1\t-42\thello\n1\tNA\tworld\n1\t\tciao\n1\t3.14\tmondo\n")
        .expect("Failed to parse")
}

fn assert_pass(validators: &[&dyn Validator], table: &dyn TableAccess) {
    for v in validators {
        assert!(
            v.validate(table).is_ok(),
            "validation should have passed: {}",
            v.message()
        );
    }
}

fn assert_fail(validators: &[&dyn Validator], table: &dyn TableAccess) {
    for v in validators {
        match v.validate(table) {
            Err(TableCheckError::Validation { .. }) => {}
            other => panic!("expected validation failure for '{}', got {:?}", v.message(), other),
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parsed_values_are_tagged() {
    let table = base_table();
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.headers(), ["a", "b"]);
    assert_eq!(table.get(0, 1), Some(&Value::Int(-42)));
    assert_eq!(table.get(1, 1), Some(&Value::Empty));
    assert_eq!(table.get(3, 1).map(Value::kind), Some(ValueKind::Real));
}

#[test]
fn test_parse_missing_file_is_io_error() {
    let err = Parser::new()
        .parse_file("/nonexistent/path/table.csv")
        .unwrap_err();
    assert!(matches!(err, TableCheckError::Io { .. }));
}

#[test]
fn test_custom_null_marker() {
    let config = ParserConfig::default()
        .with_delimiter(b';')
        .with_null_marker("missing");
    let table = Parser::with_config(config)
        .parse_str("x;y\n1;missing\n2;3\n")
        .unwrap();

    assert!(cells::empty(Selection::all().column("y").row(0)).confirm(&table).unwrap());
    assert!(cells::ints(Selection::all().row(1)).confirm(&table).unwrap());
}

// =============================================================================
// Core scenarios
// =============================================================================

#[test]
fn test_base_cell_scenarios() {
    let table = base_table();

    cells::all_eq(1, Selection::all().column("a")).validate(&table).unwrap();
    cells::all_lt(0, Selection::all().column("b").row(0)).validate(&table).unwrap();
    cells::sum_eq(4, Selection::all().column("a")).validate(&table).unwrap();

    let err = cells::sum_eq(100, Selection::all().column("a"))
        .validate(&table)
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_frame_shape_scenarios() {
    let table = base_table();
    assert_pass(&[&frame::rows(4), &frame::cols(2), &frame::existant()], &table);
    assert_fail(&[&frame::rows(1), &frame::cols(5), &frame::non_existant()], &table);
}

#[test]
fn test_uniq_scenarios() {
    let table = Parser::new()
        .parse_str("post_id,title\n111,a\n111,b\n111,c\n101,d\n")
        .unwrap();

    assert_fail(&[&rows::uniq(Selection::all().column("post_id"))], &table);
    assert_pass(&[&rows::uniq(Selection::all())], &table);
}

#[test]
fn test_unknown_column_is_not_a_validation_failure() {
    let table = base_table();
    let v = cells::all_eq(1, Selection::all().column("z"));

    let err = v.validate(&table).unwrap_err();
    assert!(matches!(err, TableCheckError::InvalidSelection(_)));
    assert!(matches!(v.confirm(&table), Err(TableCheckError::InvalidSelection(_))));
}

#[test]
fn test_out_of_range_row_is_invalid_selection() {
    let table = base_table();
    let err = cells::positive(Selection::all().rows([4, 3, 1]))
        .confirm(&table)
        .unwrap_err();
    assert!(matches!(err, TableCheckError::InvalidSelection(_)));
}

// =============================================================================
// Custom predicates
// =============================================================================

#[test]
fn test_custom_cell_predicates() {
    let table = base_table();
    let one = Value::Int(1);
    let is_one = move |v: &Value| v.loosely_equals(&one);

    let two_columns = FrameValidator::new(|view| view.column_count() == 2, "two columns");
    assert!(two_columns.confirm(&table).unwrap());

    let pass_validators = [
        CellsValidator::quantified(
            Quantifier::All,
            |v| v.is_empty() || v.as_f64().is_some_and(|x| x >= -42.0),
            "empty or at least -42",
            Selection::all(),
        ),
        CellsValidator::quantified(
            Quantifier::All,
            is_one,
            "a is one",
            Selection::all().column("a"),
        ),
        CellsValidator::quantified(
            Quantifier::All,
            |v| v.loosely_equals(&Value::Int(-42)) || v.loosely_equals(&Value::Float(3.14)),
            "ends of b",
            Selection::all().column("b").rows([0, 3]),
        ),
        CellsValidator::quantified(
            Quantifier::All,
            Value::is_empty,
            "non-numbers are empty",
            Selection::all().filter(ValueFilter::new(|v| !v.is_numeric())),
        ),
        CellsValidator::quantified(
            Quantifier::All,
            |v| v.loosely_equals(&Value::Int(-42)),
            "integer b is -42",
            Selection::all()
                .column("b")
                .rows([0, 1, 2])
                .filter(ValueFilter::kind(ValueKind::Integer)),
        ),
    ];
    for v in &pass_validators {
        assert!(v.confirm(&table).unwrap(), "expected pass: {}", v.message());
    }

    let negative = |v: &Value| v.as_f64().is_some_and(|x| x < 0.0);
    let fail_validators = [
        CellsValidator::quantified(
            Quantifier::All,
            Value::is_numeric,
            "numbers",
            Selection::all(),
        ),
        CellsValidator::quantified(
            Quantifier::All,
            Value::is_numeric,
            "numbers in b",
            Selection::all().column("b"),
        ),
        CellsValidator::quantified(Quantifier::All, negative, "negative", Selection::all().row(0)),
        CellsValidator::quantified(Quantifier::All, negative, "negative", Selection::all().rows([0, 3])),
        CellsValidator::quantified(
            Quantifier::All,
            negative,
            "negative",
            Selection::all().filter(ValueFilter::numeric()),
        ),
        CellsValidator::quantified(
            Quantifier::All,
            negative,
            "negative",
            Selection::all()
                .column("b")
                .rows([3, 1])
                .filter(ValueFilter::kind(ValueKind::Real)),
        ),
    ];
    for v in &fail_validators {
        assert!(!v.confirm(&table).unwrap(), "expected failure: {}", v.message());
    }
}

// =============================================================================
// Named factories over parsed data
// =============================================================================

#[test]
fn test_mapper_factories() {
    let table = mixed_table();
    let numeric = || Selection::all().filter(ValueFilter::numeric());

    assert_pass(
        &[
            &frame::existant(),
            &frame::rows(4),
            &frame::cols(3),
            &cells::positive(Selection::all().column("a")),
            &cells::negative(Selection::all().column("b").row(0)),
            &cells::empty(Selection::all().column("b").rows([1, 2])),
            &cells::not_empty(Selection::all().columns(["a", "c"]).rows([0, 3])),
            &cells::min(0, Selection::all().columns(["a", "b"]).row(3)),
            &cells::max(3.14, Selection::all().columns(["a", "b"]).row(3)),
            &cells::minmax(-42, 3.14, numeric()).unwrap(),
            &cells::ints(Selection::all().column("a")),
            &cells::floats(Selection::all().column("b").row(3)),
            &cells::strs(Selection::all().column("c")),
        ],
        &table,
    );

    assert_fail(
        &[
            &frame::non_existant(),
            &frame::rows(1),
            &frame::cols(5),
            &cells::positive(Selection::all().column("b").row(0)),
            &cells::negative(Selection::all().column("a")),
            &cells::empty(Selection::all().columns(["a", "c"]).rows([0, 3])),
            &cells::not_empty(Selection::all().column("b").rows([1, 2])),
            &cells::min(3.14, Selection::all().columns(["a", "b"]).row(3)),
            &cells::max(0, Selection::all().columns(["a", "b"]).row(3)),
            &cells::minmax(0, 2, numeric()).unwrap(),
            &cells::ints(Selection::all().column("b")),
            &cells::floats(Selection::all().column("a")),
            &cells::strs(Selection::all().row(3)),
        ],
        &table,
    );
}

#[test]
fn test_reducer_factories() {
    let table = mixed_table();

    assert_pass(
        &[
            &cells::totals(4, Selection::all().column("a")),
            &cells::totals(-41, Selection::all().columns(["a", "b"]).row(0)),
            &cells::totals(-36.86, Selection::all().columns(["a", "b"]).rows([0, 3])),
            &cells::totals(-38, Selection::all().filter(ValueFilter::kind(ValueKind::Integer))),
            &cells::totals(
                7.14,
                Selection::all()
                    .filter(ValueFilter::numeric().and(ValueFilter::new(|v| {
                        v.as_f64().is_some_and(|x| x > 0.0)
                    }))),
            ),
        ],
        &table,
    );

    assert_fail(&[&cells::totals(100, Selection::all().column("a"))], &table);

    // Blanks and text cannot be summed
    for v in [
        cells::totals(1, Selection::all().row(1)),
        cells::totals("gg", Selection::all().column("c")),
    ] {
        let err = v.validate(&table).unwrap_err();
        assert!(matches!(err, TableCheckError::TypeAggregation { .. }));
    }
}

#[test]
fn test_datetime_bounds() {
    let table = Parser::new()
        .parse_str(
            "net_amount,product_name,trn_date\n\
             5.50,canoli,2020-01-06 00:00:00\n\
             9.50,tiramisu,2020-01-06 01:00:00\n\
             10,salad,2020-01-06 02:00:00\n\
             10,bread,2020-01-07\n",
        )
        .unwrap();
    let some_day = NaiveDate::from_ymd_opt(2020, 1, 6)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let dates = || Selection::all().column("trn_date");

    assert_pass(
        &[
            &cells::temporals(dates()),
            &cells::minmax(some_day, some_day + Duration::days(1), dates()).unwrap(),
            &cells::min(some_day, dates()),
            &cells::max(some_day + Duration::days(2), dates()),
        ],
        &table,
    );

    assert_fail(
        &[
            &cells::minmax(some_day - Duration::days(1), some_day, dates()).unwrap(),
            &cells::min(some_day + Duration::hours(2), dates()),
            &cells::max(some_day + Duration::hours(2), dates()),
        ],
        &table,
    );
}

// =============================================================================
// Empty selections
// =============================================================================

#[test]
fn test_explicitly_empty_selection_is_vacuous() {
    let table = base_table();
    let no_rows = || Selection::all().rows([]);
    let no_cols = || Selection::all().columns(Vec::<String>::new());

    for selection in [no_rows(), no_cols()] {
        assert!(cells::all_eq(7, selection.clone()).confirm(&table).unwrap());
        assert!(cells::none_eq(1, selection.clone()).confirm(&table).unwrap());
        assert!(!cells::some_eq(1, selection.clone()).confirm(&table).unwrap());
        assert!(cells::all_or_none_eq(1, selection.clone()).confirm(&table).unwrap());
        assert!(cells::all_or_some_eq(7, selection.clone()).confirm(&table).unwrap());
        assert!(cells::sum_eq(0, selection.clone()).confirm(&table).unwrap());

        // Row-scoped checks see the same empty sequence
        assert!(rows::uniq(selection.clone()).confirm(&table).unwrap());
        assert!(rows::none(|_| true, "no rows", selection.clone()).confirm(&table).unwrap());
        assert!(rows::all(|_| false, "every row", selection.clone()).confirm(&table).unwrap());
        assert!(!rows::some(|_| true, "any row", selection).confirm(&table).unwrap());
    }
}

#[test]
fn test_unspecified_selection_covers_everything() {
    let table = base_table();
    assert!(!cells::all_eq(1, Selection::all()).confirm(&table).unwrap());
    assert!(cells::some_eq(1, Selection::all()).confirm(&table).unwrap());
    assert!(cells::some_is(Value::Empty, Selection::all()).confirm(&table).unwrap());
}

// =============================================================================
// Reuse and suites
// =============================================================================

#[test]
fn test_validator_sees_table_changes() {
    let mut table = base_table();
    let v = cells::all_eq(1, Selection::all().column("a"));

    assert!(v.confirm(&table).unwrap());
    table.set(2, 0, Value::Int(2));
    assert!(!v.confirm(&table).unwrap());
    table.set(2, 0, Value::Float(1.0));
    assert!(v.confirm(&table).unwrap());
}

#[test]
fn test_suite_report_over_parsed_table() {
    let table = base_table();
    let suite = Suite::with_config(SuiteConfig::default())
        .check("shape", frame::rows(4))
        .check("a is one", cells::all_eq(1, Selection::all().column("a")))
        .check("a totals", cells::totals(100, Selection::all().column("a")))
        .check("b totals", cells::totals(0, Selection::all().column("b")));

    let report = suite.run(&table);
    assert!(!report.passed());
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.errored_count(), 1);

    let json = report.to_json().unwrap();
    assert!(json.contains("\"a totals\""));
    assert!(json.contains("\"errored\""));

    let err = suite.validate(&table).unwrap_err();
    assert_eq!(err.to_string(), "sum of cells must be == 100");
}
