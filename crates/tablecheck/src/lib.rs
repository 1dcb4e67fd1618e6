//! Tablecheck: declarative assertions over tabular data.
//!
//! Assertions are built once and applied to any number of tables. Each one
//! pairs a [`Selection`] (which columns, rows and values to look at) with a
//! predicate over the resulting sequence of cells or rows.
//!
//! # Core Principles
//!
//! - **Read-only**: tables are never modified by a check
//! - **Stateless**: a validator holds no table and no state between calls
//! - **Fail vs. misuse**: a property that does not hold is
//!   [`TableCheckError::Validation`]; unknown columns or non-numeric sums are
//!   distinct errors that are never reported as a plain failure
//!
//! # Example
//!
//! ```
//! use tablecheck::{Parser, Selection, Validator, cells, frame, rows};
//!
//! let table = Parser::new().parse_str("a,b\n1,1\n1,2\n1,3\n1,-2\n").unwrap();
//!
//! frame::rows(4).validate(&table).unwrap();
//! cells::all_eq(1, Selection::all().column("a")).validate(&table).unwrap();
//! cells::sum_eq(4, Selection::all().column("b")).validate(&table).unwrap();
//! rows::uniq(Selection::all().column("b")).validate(&table).unwrap();
//!
//! assert!(cells::all_lt(3, Selection::all().column("b")).validate(&table).is_err());
//! ```

pub mod error;
pub mod predicate;
pub mod selection;
pub mod sequence;
pub mod suite;
pub mod table;
pub mod validator;
pub mod value;

mod factories;
mod logging;

pub use error::{Result, TableCheckError};
pub use factories::{cells, frame, rows};
pub use predicate::{Aggregate, Comparison, Quantifier, Reducer};
pub use selection::{Selection, SlicedView, ValueFilter, slice};
pub use sequence::{Cells, RowRecord, Rows};
pub use suite::{CheckResult, Outcome, Suite, SuiteConfig, SuiteReport};
pub use table::{DataTable, Parser, ParserConfig, TableAccess};
pub use validator::{CellsValidator, FrameValidator, RowsValidator, Validator};
pub use value::{Value, ValueKey, ValueKind};
