//! Validators over the shape of a whole table.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::logging::check_log;
use crate::selection::{Selection, SlicedView};
use crate::table::TableAccess;

use super::Validator;

type FramePredicate = dyn for<'v, 'a> Fn(&'v SlicedView<'a>) -> bool + Send + Sync;

/// Asserts a property of the table as a whole.
///
/// The predicate sees the view itself rather than a flattened sequence, so it
/// can ask about row counts, column counts and column presence.
#[derive(Clone)]
pub struct FrameValidator {
    predicate: Arc<FramePredicate>,
    message: String,
}

impl FrameValidator {
    pub fn new<P>(predicate: P, message: impl Into<String>) -> Self
    where
        P: for<'v, 'a> Fn(&'v SlicedView<'a>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }
}

impl Validator for FrameValidator {
    fn confirm(&self, table: &dyn TableAccess) -> Result<bool> {
        let view = Selection::all().slice(table)?;
        let passed = (self.predicate)(&view);

        check_log!(
            log::Level::Debug,
            "validator_evaluated",
            "scope=frame passed={} message={:?}",
            passed,
            self.message
        );
        Ok(passed)
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for FrameValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameValidator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
