//! CQL to CQP translator.
//!
//! Only plain search terms are supported: every whitespace-separated word
//! becomes one `[word = '...']` token constraint. Boolean combinations are
//! rejected.

use crate::ast::CqlNode;
use crate::error::{Result, TranslationError};
use crate::translate::QueryTranslator;
use tracing::{debug, warn};

/// CQL query translator
#[derive(Debug, Clone, Copy, Default)]
pub struct CqlTranslator;

impl QueryTranslator for CqlTranslator {
    type Query = CqlNode;

    fn name(&self) -> &'static str {
        "cql"
    }

    fn translate(&self, node: &CqlNode) -> Result<String> {
        debug!(query = %node, "translating CQL query");

        let cqp = match node {
            CqlNode::Triple { operator, .. } => {
                return Err(TranslationError::UnsupportedBooleanOperator(
                    operator.value.to_string(),
                ))
            }
            CqlNode::SearchClause { term, .. } => self.translate_term(term),
        };

        debug!(cqp = %cqp, "translated CQL query");
        Ok(cqp)
    }
}

impl CqlTranslator {
    fn translate_term(&self, term: &str) -> String {
        let lowered = term.to_lowercase();
        let terms: Vec<&str> = lowered.split_whitespace().collect();

        match terms.as_slice() {
            [single] => word_constraint(single),
            // Quotes are stripped per word only for multi-word terms; unclear
            // whether this is the right escaping, kept as-is for compatibility.
            // A blank term yields an empty query.
            _ => {
                if terms.is_empty() {
                    warn!("CQL search clause has an empty term");
                }
                terms
                    .iter()
                    .map(|t| word_constraint(t.trim_matches(|c: char| c == '"' || c == '\'')))
                    .collect()
            }
        }
    }
}

fn word_constraint(term: &str) -> String {
    format!("[word = '{}']", term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CqlBoolean, CqlModifier, CqlOperator};
    use test_case::test_case;

    fn translate(term: &str) -> Result<String> {
        CqlTranslator.translate(&CqlNode::term(term))
    }

    // =========================================================================
    // Search clauses
    // =========================================================================

    #[test_case("Katze", "[word = 'katze']" ; "single term is lower-cased")]
    #[test_case("  hus  ", "[word = 'hus']" ; "surrounding whitespace")]
    #[test_case("stor katt", "[word = 'stor'][word = 'katt']" ; "two terms")]
    #[test_case("Den STORA\tkatten", "[word = 'den'][word = 'stora'][word = 'katten']" ; "three terms keep order")]
    #[test_case("\"stor katt\"", "[word = 'stor'][word = 'katt']" ; "double quotes stripped")]
    #[test_case("'stor' 'katt'", "[word = 'stor'][word = 'katt']" ; "single quotes stripped")]
    #[test_case("\"'x'\" y", "[word = 'x'][word = 'y']" ; "mixed quotes stripped repeatedly")]
    fn test_search_clause(term: &str, expected: &str) {
        assert_eq!(translate(term).unwrap(), expected);
    }

    #[test]
    fn test_single_term_keeps_quotes() {
        // Stripping only applies to multi-word terms
        assert_eq!(translate("\"katze\"").unwrap(), "[word = '\"katze\"']");
    }

    #[test]
    fn test_inner_quotes_are_kept() {
        assert_eq!(
            translate("can't stop").unwrap(),
            "[word = 'can't'][word = 'stop']"
        );
    }

    #[test]
    fn test_index_and_relation_are_ignored() {
        let node = CqlNode::SearchClause {
            index: Some("cql.serverChoice".to_string()),
            relation: Some("=".to_string()),
            term: "Hund".to_string(),
        };
        assert_eq!(CqlTranslator.translate(&node).unwrap(), "[word = 'hund']");
    }

    #[test]
    fn test_blank_term_translates_to_empty_query() {
        assert_eq!(translate("").unwrap(), "");
        assert_eq!(translate("   ").unwrap(), "");
    }

    // =========================================================================
    // Triples
    // =========================================================================

    #[test_case(CqlBoolean::And, "and")]
    #[test_case(CqlBoolean::Or, "or")]
    #[test_case(CqlBoolean::Not, "not")]
    #[test_case(CqlBoolean::Prox, "prox")]
    fn test_triple_is_unsupported(op: CqlBoolean, name: &str) {
        let node = CqlNode::triple(op, CqlNode::term("a"), CqlNode::term("b"));

        let err = CqlTranslator.translate(&node).unwrap_err();

        assert_eq!(err, TranslationError::UnsupportedBooleanOperator(name.to_string()));
        assert_eq!(err.to_string(), format!("Unsupported Boolean operator: {}", name));
    }

    #[test]
    fn test_triple_with_modifiers_reports_operator_only() {
        let node = CqlNode::Triple {
            operator: CqlOperator {
                value: CqlBoolean::Prox,
                modifiers: vec![CqlModifier {
                    name: "distance".to_string(),
                    comparison: Some("<".to_string()),
                    value: Some("3".to_string()),
                }],
            },
            left: Box::new(CqlNode::term("a")),
            right: Box::new(CqlNode::term("b")),
        };

        let err = CqlTranslator.translate(&node).unwrap_err();
        assert_eq!(err, TranslationError::UnsupportedBooleanOperator("prox".to_string()));
    }
}
