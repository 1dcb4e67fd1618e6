//! Property-based tests for combinators and selections.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p tablecheck --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p tablecheck --test property_tests
//! ```

use proptest::prelude::*;

use tablecheck::predicate::{all, all_or_none, all_or_some, none, some, some_or_none};
use tablecheck::{Comparison, DataTable, Quantifier, Selection, Validator, Value, cells, slice};

// =============================================================================
// Test Strategies
// =============================================================================

/// Any cell value a table can hold.
fn value() -> impl Strategy<Value = Value> + Clone {
    prop_oneof![
        (-1000i64..1000).prop_map(Value::Int),
        (-1000.0f64..1000.0).prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::Text),
        Just(Value::Empty),
    ]
}

/// Numbers only, so sums never fail.
fn number() -> impl Strategy<Value = Value> + Clone {
    prop_oneof![
        (-1000i64..1000).prop_map(Value::Int),
        (-1000.0f64..1000.0).prop_map(Value::Float),
    ]
}

/// A table with 1..4 columns and 0..12 rows of `cell` values.
fn table_of(cell: impl Strategy<Value = Value> + Clone) -> impl Strategy<Value = DataTable> {
    (1usize..4, 0usize..12).prop_flat_map(move |(cols, rows)| {
        prop::collection::vec(prop::collection::vec(cell.clone(), cols), rows).prop_map(
            move |data| {
                let headers: Vec<String> = (0..cols).map(|i| format!("c{}", i)).collect();
                DataTable::new(headers, data).expect("generated table is rectangular")
            },
        )
    })
}

fn threshold() -> impl Strategy<Value = i64> {
    -100i64..100
}

// =============================================================================
// Quantifier laws
// =============================================================================

proptest! {
    /// all(p) == !some(!p)
    #[test]
    fn prop_de_morgan(items in prop::collection::vec(any::<i32>(), 0..50), t in any::<i32>()) {
        let p = |x: &i32| *x > t;
        prop_assert_eq!(all(&items, p), !some(&items, |x| !p(x)));
        prop_assert_eq!(none(&items, p), !some(&items, p));
    }

    /// Hybrids are built from the three primitives.
    #[test]
    fn prop_hybrids_match_definitions(items in prop::collection::vec(any::<i32>(), 0..50), t in any::<i32>()) {
        let p = |x: &i32| *x > t;
        prop_assert_eq!(all_or_none(&items, p), all(&items, p) || none(&items, p));
        prop_assert_eq!(
            all_or_some(&items, p),
            items.is_empty() || some(&items, p)
        );
        prop_assert!(some_or_none(&items, p));
    }

    /// Every quantifier agrees with its enum form.
    #[test]
    fn prop_enum_matches_functions(items in prop::collection::vec(any::<i32>(), 0..30), t in any::<i32>()) {
        let p = |x: &i32| *x > t;
        prop_assert_eq!(Quantifier::All.apply(&items, p), all(&items, p));
        prop_assert_eq!(Quantifier::Some.apply(&items, p), some(&items, p));
        prop_assert_eq!(Quantifier::None.apply(&items, p), none(&items, p));
        prop_assert_eq!(Quantifier::AllOrNone.apply(&items, p), all_or_none(&items, p));
        prop_assert_eq!(Quantifier::AllOrSome.apply(&items, p), all_or_some(&items, p));
        prop_assert_eq!(Quantifier::SomeOrNone.apply(&items, p), some_or_none(&items, p));
    }

    /// Gte is Gt or Eq; Lte is Lt or Eq.
    #[test]
    fn prop_comparisons_are_consistent(a in value(), b in value()) {
        prop_assert_eq!(
            Comparison::Gte.holds(&a, &b),
            Comparison::Gt.holds(&a, &b) || (Comparison::Eq.holds(&a, &b) && !a.is_empty())
        );
        prop_assert_eq!(
            Comparison::Lte.holds(&a, &b),
            Comparison::Lt.holds(&a, &b) || (Comparison::Eq.holds(&a, &b) && !a.is_empty())
        );
    }
}

#[test]
fn test_empty_sequence_laws() {
    let nothing: [i32; 0] = [];
    let p = |x: &i32| *x > 0;
    assert!(all(&nothing, p));
    assert!(none(&nothing, p));
    assert!(!some(&nothing, p));
}

// =============================================================================
// Selection laws
// =============================================================================

proptest! {
    /// An unrestricted selection is the whole table.
    #[test]
    fn prop_identity_selection(table in table_of(value())) {
        let view = slice(&table, &Selection::all()).unwrap();
        prop_assert_eq!(view.row_count(), table.row_count());
        prop_assert_eq!(view.column_count(), table.column_count());

        let from_view: Vec<&Value> = view.cells(None).collect();
        let source = &table;
        let direct: Vec<&Value> = (0..source.row_count())
            .flat_map(|r| (0..source.column_count()).filter_map(move |c| source.get(r, c)))
            .collect();
        prop_assert_eq!(from_view, direct);
    }

    /// Request order and duplicates do not change the sequence.
    #[test]
    fn prop_order_normalization(
        table in table_of(value()),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        prop_assume!(table.row_count() > 0);
        let ids: Vec<usize> = picks.iter().map(|i| i.index(table.row_count())).collect();
        let mut reversed = ids.clone();
        reversed.reverse();
        reversed.extend(ids.iter().copied());

        let headers = table.headers().to_vec();
        let mut shuffled_headers = headers.clone();
        shuffled_headers.reverse();

        let a = slice(&table, &Selection::all().rows(ids).columns(headers)).unwrap();
        let b = slice(&table, &Selection::all().rows(reversed).columns(shuffled_headers)).unwrap();

        let a_cells: Vec<&Value> = a.cells(None).collect();
        let b_cells: Vec<&Value> = b.cells(None).collect();
        prop_assert_eq!(a_cells, b_cells);
        prop_assert_eq!(a.column_names().collect::<Vec<_>>(), b.column_names().collect::<Vec<_>>());
    }

    /// The same check on the same table always gives the same answer.
    #[test]
    fn prop_sum_is_deterministic(table in table_of(number()), t in threshold()) {
        let v = cells::sum_eq(t, Selection::all());
        let first = v.confirm(&table).unwrap();
        let second = v.confirm(&table).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Cell factories never panic and only fail structurally on sums.
    #[test]
    fn prop_factories_do_not_panic(table in table_of(value()), t in threshold()) {
        let sel = Selection::all;
        prop_assert!(cells::all_gt(t, sel()).confirm(&table).is_ok());
        prop_assert!(cells::some_lte(t, sel()).confirm(&table).is_ok());
        prop_assert!(cells::none_eq(t, sel()).confirm(&table).is_ok());
        prop_assert!(cells::not_empty(sel()).confirm(&table).is_ok());
        prop_assert!(cells::strs(sel()).confirm(&table).is_ok());
        let _ = cells::totals(t, sel()).confirm(&table);
    }

    /// `all_gt` and `some_lte` disagree exactly when every cell is comparable.
    #[test]
    fn prop_all_gt_is_not_some_lte_on_numbers(table in table_of(number()), t in threshold()) {
        let all_gt = cells::all_gt(t, Selection::all()).confirm(&table).unwrap();
        let some_lte = cells::some_lte(t, Selection::all()).confirm(&table).unwrap();
        prop_assert_eq!(all_gt, !some_lte);
    }
}
