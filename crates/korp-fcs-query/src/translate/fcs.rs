//! FCS-QL to CQP translator.
//!
//! Supports:
//! - sequences of segments and single segments
//! - `word`/`text`/`token`, `lemma` and `pos` layers with `=` and `!=`
//! - regex flags `c`, `l`, `d` on word and lemma layers
//! - binary `&` / `|` between simple expressions
//! - wildcards `[]` and occurrence bounds `{n}`, `{n,m}`
//!
//! `pos` values are UD-17 tags and are rewritten to the SUC tags Korp uses.

use crate::ast::{Expression, Operator, QueryNode, QuerySegment, RegexFlag, SimpleExpression};
use crate::error::{Result, TranslationError};
use crate::tagset;
use crate::translate::QueryTranslator;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

const UNSUPPORTED_QUERY: &str = "Endpoint only supports sequences or single segment queries";
const UNSUPPORTED_SEGMENT: &str =
    "Endpoint only supports sequences or single segment expressions";

/// Token layer a simple expression can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Surface form (`text`, `token` and `word` all end up here)
    Word,
    Lemma,
    Pos,
}

impl Layer {
    /// Resolve an FCS-QL layer identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "text" | "token" | "word" => Some(Layer::Word),
            "lemma" => Some(Layer::Lemma),
            "pos" => Some(Layer::Pos),
            _ => None,
        }
    }

    /// Attribute name on the CQP side
    pub fn cqp_name(&self) -> &'static str {
        match self {
            Layer::Word => "word",
            Layer::Lemma => "lemma",
            Layer::Pos => "pos",
        }
    }
}

/// FCS-QL query translator
#[derive(Debug, Clone, Copy, Default)]
pub struct FcsTranslator;

impl QueryTranslator for FcsTranslator {
    type Query = QueryNode;

    fn name(&self) -> &'static str {
        "fcs"
    }

    fn translate(&self, tree: &QueryNode) -> Result<String> {
        debug!(query = ?tree, "translating FCS-QL query");

        let cqp = match tree {
            QueryNode::Sequence { children } => self.transform_sequence(children)?,
            QueryNode::Segment(segment) => self.transform_segment(segment)?,
            QueryNode::Disjunction { .. }
            | QueryNode::Group { .. }
            | QueryNode::WithWithin { .. } => {
                return Err(TranslationError::QueryTooComplex(
                    UNSUPPORTED_QUERY.to_string(),
                ))
            }
        };

        debug!(cqp = %cqp, "translated FCS-QL query");
        Ok(cqp)
    }
}

impl FcsTranslator {
    fn transform_sequence(&self, children: &[QueryNode]) -> Result<String> {
        let mut cqp = String::new();
        for child in children {
            match child {
                QueryNode::Segment(segment) => cqp.push_str(&self.transform_segment(segment)?),
                other => warn!(node = other.node_type(), "skipping non-segment sequence child"),
            }
        }
        Ok(cqp)
    }

    fn transform_segment(&self, segment: &QuerySegment) -> Result<String> {
        let cqp = match &segment.expression {
            // Occurrence bounds are not applied to boolean segments
            Expression::And { operands } => format!("[{}]", self.transform_bool_op(operands, " & ")?),
            Expression::Or { operands } => format!("[{}]", self.transform_bool_op(operands, " | ")?),
            Expression::Simple(expr) => format!(
                "[{}]{}",
                self.transform_expression(expr)?,
                occurrences(segment.min_occurs, segment.max_occurs)
            ),
            Expression::Wildcard => {
                format!(" []{}", occurrences(segment.min_occurs, segment.max_occurs))
            }
            Expression::Not { .. } | Expression::Group { .. } => {
                return Err(TranslationError::QueryTooComplex(
                    UNSUPPORTED_SEGMENT.to_string(),
                ))
            }
        };

        trace!(segment = %cqp, "translated segment");
        Ok(cqp)
    }

    fn transform_bool_op(&self, operands: &[Expression], op_str: &str) -> Result<String> {
        let [left, right] = operands else {
            return Err(TranslationError::QueryTooComplex(format!(
                "Boolean expression should have exactly two operands, got {}",
                operands.len()
            )));
        };

        Ok(format!(
            "{}{}{}",
            self.transform_expression(simple_operand(left)?)?,
            op_str,
            self.transform_expression(simple_operand(right)?)?
        ))
    }

    fn transform_expression(&self, expr: &SimpleExpression) -> Result<String> {
        let layer = match (&expr.qualifier, Layer::from_identifier(&expr.identifier)) {
            (None, Some(layer)) => layer,
            _ => return Err(TranslationError::UnsupportedExpression),
        };

        match layer {
            Layer::Pos => translate_pos(expr),
            Layer::Lemma => Ok(format!(
                "{} {} '{}'{}",
                layer.cqp_name(),
                contains_operator(expr.operator),
                expr.regex,
                flag_suffix(&expr.regex_flags)
            )),
            Layer::Word => Ok(format!(
                "{} {} '{}'{}",
                layer.cqp_name(),
                comparison_operator(expr.operator),
                expr.regex,
                flag_suffix(&expr.regex_flags)
            )),
        }
    }
}

fn simple_operand(expr: &Expression) -> Result<&SimpleExpression> {
    match expr {
        Expression::Simple(simple) => Ok(simple),
        _ => Err(TranslationError::QueryTooComplex(
            "Endpoint only supports simple expressions as boolean operands".to_string(),
        )),
    }
}

fn translate_pos(expr: &SimpleExpression) -> Result<String> {
    let value = match tagset::to_target(&expr.regex)? {
        [single] => (*single).to_string(),
        candidates => format!("({})", candidates.join("|")),
    };

    Ok(format!(
        "{} {} '{}'",
        Layer::Pos.cqp_name(),
        comparison_operator(expr.operator),
        value
    ))
}

fn comparison_operator(op: Operator) -> &'static str {
    match op {
        Operator::Equals => "=",
        Operator::NotEquals => "!=",
    }
}

fn contains_operator(op: Operator) -> &'static str {
    match op {
        Operator::Equals => "contains",
        Operator::NotEquals => "not contains",
    }
}

/// Occurrence suffix appended after a segment's closing bracket
pub fn occurrences(min: u32, max: u32) -> String {
    if min == 1 && max == 1 {
        " ".to_string()
    } else if min == max {
        format!("{{{}}} ", min)
    } else {
        format!("{{{},{}}} ", min, max)
    }
}

/// CQP regex flag suffix (` %cld`), empty when no flag applies
pub fn flag_suffix(flags: &BTreeSet<RegexFlag>) -> String {
    let mut suffix = String::new();
    if flags.contains(&RegexFlag::CaseInsensitive) {
        suffix.push('c');
    }
    // RegexFlag::CaseSensitive is CQP's default, nothing to emit
    if flags.contains(&RegexFlag::LiteralMatching) {
        suffix.push('l');
    }
    if flags.contains(&RegexFlag::IgnoreDiacritics) {
        suffix.push('d');
    }

    if suffix.is_empty() {
        suffix
    } else {
        format!(" %{}", suffix)
    }
}
