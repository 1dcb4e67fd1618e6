//! Running many validators against one table.
//!
//! A [`Suite`] is a named list of validators. Running it never stops at the
//! first problem unless asked to; every check ends in an [`Outcome`] and the
//! whole run is collected in a serializable [`SuiteReport`].

mod report;

pub use report::{CheckResult, Outcome, SuiteReport};

use std::fmt;

use chrono::Utc;

use crate::error::Result;
use crate::logging::check_log;
use crate::table::TableAccess;
use crate::validator::Validator;

/// Run-time options for a [`Suite`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Stop at the first check that does not pass.
    pub fail_fast: bool,
}

/// An ordered, named collection of validators.
///
/// ```
/// use tablecheck::{DataTable, Selection, Suite, Value, cells, frame};
///
/// let table = DataTable::from_rows(["a"], vec![vec![Value::from(1)], vec![Value::from(2)]]).unwrap();
/// let suite = Suite::new()
///     .check("two rows", frame::rows(2))
///     .check("positive", cells::positive(Selection::all()))
///     .check("small", cells::all_lt(2, Selection::all()));
///
/// let report = suite.run(&table);
/// assert!(!report.passed());
/// assert_eq!(report.failures().count(), 1);
/// ```
#[derive(Default)]
pub struct Suite {
    checks: Vec<(String, Box<dyn Validator>)>,
    config: SuiteConfig,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SuiteConfig) -> Self {
        Self {
            checks: Vec::new(),
            config,
        }
    }

    /// Add a named check, builder style.
    pub fn check(mut self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.push(name, validator);
        self
    }

    /// Add a named check.
    pub fn push(&mut self, name: impl Into<String>, validator: impl Validator + 'static) {
        self.checks.push((name.into(), Box::new(validator)));
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if the suite has no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Check names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|(name, _)| name.as_str())
    }

    /// Evaluate every check and collect the outcomes.
    ///
    /// Structural errors are recorded as [`Outcome::Errored`] instead of
    /// aborting the run.
    pub fn run(&self, table: &dyn TableAccess) -> SuiteReport {
        let evaluated_at = Utc::now();
        let mut results = Vec::with_capacity(self.checks.len());

        for (name, validator) in &self.checks {
            let outcome = match validator.confirm(table) {
                Ok(true) => Outcome::Passed,
                Ok(false) => Outcome::Failed {
                    message: validator.message().to_string(),
                },
                Err(e) => Outcome::Errored {
                    message: e.to_string(),
                },
            };
            let stop = self.config.fail_fast && !outcome.is_passed();
            results.push(CheckResult {
                name: name.clone(),
                outcome,
            });
            if stop {
                break;
            }
        }

        let report = SuiteReport {
            evaluated_at,
            skipped: self.checks.len() - results.len(),
            results,
        };

        check_log!(
            log::Level::Info,
            "suite_completed",
            "checks={} failed={} errored={} skipped={}",
            self.checks.len(),
            report.failed_count(),
            report.errored_count(),
            report.skipped
        );
        report
    }

    /// Evaluate checks in order, returning the first failure or structural
    /// error.
    pub fn validate(&self, table: &dyn TableAccess) -> Result<()> {
        for (_, validator) in &self.checks {
            validator.validate(table)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("checks", &self.names().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}
