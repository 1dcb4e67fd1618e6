//! Resolving a logical region of a table.
//!
//! A [`Selection`] names a region without reference to any table: optional
//! columns, optional rows and an optional [`ValueFilter`]. [`slice`] resolves
//! it against a concrete table into a [`SlicedView`], which reads through to
//! the table without copying.
//!
//! "Unspecified" and "explicitly empty" are different things. An axis that was
//! never set covers the whole table; an axis set to an empty list covers
//! nothing, so quantifiers over the region see an empty sequence.

mod filter;
mod region;
mod view;

pub use filter::ValueFilter;
pub use region::Selection;
pub use view::{SlicedView, slice};
