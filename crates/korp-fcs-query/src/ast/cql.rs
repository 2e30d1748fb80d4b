//! CQL query tree.
//!
//! Produced by an external CQL parser. Only the shapes the translator needs
//! to distinguish are modelled; search-clause indexes and relations are
//! carried through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CQL boolean operator of a [`CqlNode::Triple`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CqlBoolean {
    And,
    Or,
    Not,
    Prox,
}

impl CqlBoolean {
    pub fn as_str(&self) -> &'static str {
        match self {
            CqlBoolean::And => "and",
            CqlBoolean::Or => "or",
            CqlBoolean::Not => "not",
            CqlBoolean::Prox => "prox",
        }
    }
}

impl fmt::Display for CqlBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier attached to a boolean operator, e.g. `prox/distance<3`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CqlModifier {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Operator of a triple: the boolean plus its modifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CqlOperator {
    pub value: CqlBoolean,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<CqlModifier>,
}

impl CqlOperator {
    pub fn new(value: CqlBoolean) -> Self {
        Self {
            value,
            modifiers: Vec::new(),
        }
    }
}

/// Root or inner node of a parsed CQL query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CqlNode {
    /// `left <op> right`
    Triple {
        operator: CqlOperator,
        left: Box<CqlNode>,
        right: Box<CqlNode>,
    },
    /// `[index relation] term`
    SearchClause {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relation: Option<String>,
        term: String,
    },
}

impl CqlNode {
    /// Bare search term without index or relation
    pub fn term(term: impl Into<String>) -> Self {
        CqlNode::SearchClause {
            index: None,
            relation: None,
            term: term.into(),
        }
    }

    pub fn triple(operator: CqlBoolean, left: CqlNode, right: CqlNode) -> Self {
        CqlNode::Triple {
            operator: CqlOperator::new(operator),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for CqlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CqlNode::Triple {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator.value, right),
            CqlNode::SearchClause {
                index,
                relation,
                term,
            } => {
                if let Some(index) = index {
                    write!(f, "{} {} ", index, relation.as_deref().unwrap_or("="))?;
                }
                write!(f, "\"{}\"", term)
            }
        }
    }
}
