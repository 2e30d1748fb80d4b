//! FCS-QL query tree.
//!
//! Mirrors the node kinds an FCS-QL parser produces: query nodes
//! (sequence, segment, disjunction, group, within) wrapping token
//! expressions. The translator only supports a subset; the rest exists so
//! that a full parse tree can be handed over unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Comparison operator of a simple expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
}

/// Regex flags attached to a simple expression, e.g. `"foo"/cld`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegexFlag {
    CaseInsensitive,
    CaseSensitive,
    LiteralMatching,
    IgnoreDiacritics,
}

/// Scope of a `within` clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithinScope {
    Sentence,
    Utterance,
    Paragraph,
    Turn,
    Text,
    Session,
}

/// `[layer.qualifier op "regex"/flags]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleExpression {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    pub operator: Operator,
    pub regex: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub regex_flags: BTreeSet<RegexFlag>,
}

impl SimpleExpression {
    pub fn new(identifier: impl Into<String>, operator: Operator, regex: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            qualifier: None,
            operator,
            regex: regex.into(),
            regex_flags: BTreeSet::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = RegexFlag>) -> Self {
        self.regex_flags.extend(flags);
        self
    }
}

/// Token-level expression inside a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    Simple(SimpleExpression),
    And { operands: Vec<Expression> },
    Or { operands: Vec<Expression> },
    Not { operand: Box<Expression> },
    Group { expression: Box<Expression> },
    /// `[]`, matches any single token
    Wildcard,
}

impl From<SimpleExpression> for Expression {
    fn from(expr: SimpleExpression) -> Self {
        Expression::Simple(expr)
    }
}

/// A single token position with its repetition bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySegment {
    pub expression: Expression,
    #[serde(default = "default_occurs")]
    pub min_occurs: u32,
    #[serde(default = "default_occurs")]
    pub max_occurs: u32,
}

fn default_occurs() -> u32 {
    1
}

impl QuerySegment {
    /// Segment occurring exactly once
    pub fn new(expression: impl Into<Expression>) -> Self {
        Self {
            expression: expression.into(),
            min_occurs: 1,
            max_occurs: 1,
        }
    }

    pub fn with_occurs(mut self, min_occurs: u32, max_occurs: u32) -> Self {
        self.min_occurs = min_occurs;
        self.max_occurs = max_occurs;
        self
    }
}

/// Root or inner node of a parsed FCS-QL query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryNode {
    Sequence {
        children: Vec<QueryNode>,
    },
    Segment(QuerySegment),
    Disjunction {
        children: Vec<QueryNode>,
    },
    Group {
        query: Box<QueryNode>,
        #[serde(default = "default_occurs")]
        min_occurs: u32,
        #[serde(default = "default_occurs")]
        max_occurs: u32,
    },
    WithWithin {
        query: Box<QueryNode>,
        scope: WithinScope,
    },
}

impl QueryNode {
    pub fn sequence(children: impl IntoIterator<Item = QueryNode>) -> Self {
        QueryNode::Sequence {
            children: children.into_iter().collect(),
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            QueryNode::Sequence { .. } => "sequence",
            QueryNode::Segment(_) => "segment",
            QueryNode::Disjunction { .. } => "disjunction",
            QueryNode::Group { .. } => "group",
            QueryNode::WithWithin { .. } => "with_within",
        }
    }
}

impl From<QuerySegment> for QueryNode {
    fn from(segment: QuerySegment) -> Self {
        QueryNode::Segment(segment)
    }
}
