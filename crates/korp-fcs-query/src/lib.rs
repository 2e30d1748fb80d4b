//! # korp-fcs-query
//!
//! Query translation for the Korp CLARIN-FCS endpoint: turns parsed CQL
//! (basic search) and FCS-QL (advanced search) trees into CQP query strings
//! for the Korp backend, and maps part-of-speech tags between UD-17 and SUC.
//!
//! ```rust
//! use korp_fcs_query::ast::{Operator, QuerySegment, SimpleExpression};
//! use korp_fcs_query::{translate_fcs_query, QueryNode};
//!
//! let tree: QueryNode =
//!     QuerySegment::new(SimpleExpression::new("pos", Operator::Equals, "ADJ")).into();
//! assert_eq!(translate_fcs_query(&tree).unwrap(), "[pos = '(JJ|PC|RO)'] ");
//! ```
//!
//! Translation is pure: no I/O, no shared mutable state. Parsing query text
//! and executing the resulting CQP are left to the caller.

pub mod ast;
pub mod error;
pub mod facade;
pub mod tagset;
pub mod translate;

pub use ast::{CqlNode, QueryNode};
pub use error::{Diagnostic, Result, TranslationError};
pub use facade::{
    translate_cql_query, translate_fcs_query, translate_query, ParsedQuery, QueryType,
};
pub use translate::{CqlTranslator, FcsTranslator, QueryTranslator};
