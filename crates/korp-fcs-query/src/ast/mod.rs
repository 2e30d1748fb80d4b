//! Parsed query trees handed to the translators.
//!
//! Parsing CQL and FCS-QL text happens upstream; this module only defines
//! the closed set of node shapes the translators match on.

pub mod cql;
pub mod fcs;

pub use cql::{CqlBoolean, CqlModifier, CqlNode, CqlOperator};
pub use fcs::{
    Expression, Operator, QueryNode, QuerySegment, RegexFlag, SimpleExpression, WithinScope,
};
