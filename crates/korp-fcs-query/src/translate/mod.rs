//! Translators from parsed query trees to CQP.
//!
//! Each source query language gets one translator. Translators are
//! stateless and can be shared freely between threads.

mod cql;
mod fcs;

pub use cql::CqlTranslator;
pub use fcs::{flag_suffix, occurrences, FcsTranslator, Layer};

use crate::error::Result;

/// Trait for translating a parsed query tree into a CQP query string.
pub trait QueryTranslator: Send + Sync {
    /// Tree type this translator accepts
    type Query: ?Sized;

    /// Unique name for this translator (the SRU `queryType` it handles)
    fn name(&self) -> &'static str;

    /// Translate the tree into a CQP query string
    fn translate(&self, query: &Self::Query) -> Result<String>;
}
