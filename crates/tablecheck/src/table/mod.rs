//! Table access and in-memory tables.

mod access;
mod parser;
mod source;

pub use access::TableAccess;
pub use parser::{Parser, ParserConfig};
pub use source::DataTable;
