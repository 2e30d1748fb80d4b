//! Entry points for the search endpoint.
//!
//! The endpoint knows the SRU `queryType` of a request and holds the tree
//! its query parser produced; these functions pick the matching translator.

use crate::ast::{CqlNode, QueryNode};
use crate::error::{Result, TranslationError};
use crate::translate::{CqlTranslator, FcsTranslator, QueryTranslator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Query languages the endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Contextual Query Language (basic search)
    Cql,
    /// FCS Query Language (advanced search)
    Fcs,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Cql => "cql",
            QueryType::Fcs => "fcs",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cql" => Ok(QueryType::Cql),
            "fcs" => Ok(QueryType::Fcs),
            _ => Err(TranslationError::UnsupportedQueryType(s.to_string())),
        }
    }
}

/// A parsed query of either language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query_type", content = "tree", rename_all = "lowercase")]
pub enum ParsedQuery {
    Cql(CqlNode),
    Fcs(QueryNode),
}

impl ParsedQuery {
    pub fn query_type(&self) -> QueryType {
        match self {
            ParsedQuery::Cql(_) => QueryType::Cql,
            ParsedQuery::Fcs(_) => QueryType::Fcs,
        }
    }
}

/// Translate a CQL (basic search) tree into CQP.
pub fn translate_cql_query(tree: &CqlNode) -> Result<String> {
    CqlTranslator.translate(tree)
}

/// Translate an FCS-QL (advanced search) tree into CQP.
pub fn translate_fcs_query(tree: &QueryNode) -> Result<String> {
    FcsTranslator.translate(tree)
}

/// Translate a request's query given its declared SRU `queryType`.
///
/// Fails with [`TranslationError::UnsupportedQueryType`] when the declared
/// type is unknown or does not match the tree that was parsed.
pub fn translate_query(query_type: &str, query: &ParsedQuery) -> Result<String> {
    let declared: QueryType = query_type.parse()?;

    match (declared, query) {
        (QueryType::Cql, ParsedQuery::Cql(tree)) => translate_cql_query(tree),
        (QueryType::Fcs, ParsedQuery::Fcs(tree)) => translate_fcs_query(tree),
        _ => {
            tracing::warn!(
                declared = %declared,
                parsed = %query.query_type(),
                "query type does not match parsed tree"
            );
            Err(TranslationError::UnsupportedQueryType(query_type.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CqlBoolean, Expression, Operator, QuerySegment, SimpleExpression};
    use test_case::test_case;

    fn fcs_word(word: &str) -> ParsedQuery {
        ParsedQuery::Fcs(
            QuerySegment::new(SimpleExpression::new("word", Operator::Equals, word)).into(),
        )
    }

    #[test_case("cql", QueryType::Cql ; "cql")]
    #[test_case("FCS", QueryType::Fcs ; "upper case")]
    #[test_case(" fcs ", QueryType::Fcs ; "padded")]
    fn test_query_type_from_str(input: &str, expected: QueryType) {
        assert_eq!(input.parse::<QueryType>().unwrap(), expected);
    }

    #[test]
    fn test_query_type_unknown() {
        let err = "lucene".parse::<QueryType>().unwrap_err();
        assert_eq!(err, TranslationError::UnsupportedQueryType("lucene".to_string()));
    }

    #[test]
    fn test_translate_cql_query() {
        assert_eq!(
            translate_cql_query(&CqlNode::term("Katze")).unwrap(),
            "[word = 'katze']"
        );
    }

    #[test]
    fn test_translate_fcs_query() {
        let tree: QueryNode = QuerySegment::new(Expression::Wildcard).with_occurs(2, 3).into();
        assert_eq!(translate_fcs_query(&tree).unwrap(), " []{2,3} ");
    }

    #[test]
    fn test_translate_query_dispatch() {
        let cql = ParsedQuery::Cql(CqlNode::term("stor katt"));
        assert_eq!(
            translate_query("cql", &cql).unwrap(),
            "[word = 'stor'][word = 'katt']"
        );
        assert_eq!(translate_query("fcs", &fcs_word("dina")).unwrap(), "[word = 'dina'] ");
    }

    #[test]
    fn test_translate_query_propagates_errors() {
        let cql = ParsedQuery::Cql(CqlNode::triple(
            CqlBoolean::And,
            CqlNode::term("a"),
            CqlNode::term("b"),
        ));
        let err = translate_query("cql", &cql).unwrap_err();

        assert_eq!(err, TranslationError::UnsupportedBooleanOperator("and".to_string()));
        assert_eq!(err.diagnostic().uri, crate::error::SRU_UNSUPPORTED_BOOLEAN_OPERATOR);
    }

    #[test]
    fn test_translate_query_unknown_type() {
        let err = translate_query("searchRetrieve", &fcs_word("x")).unwrap_err();
        assert_eq!(
            err,
            TranslationError::UnsupportedQueryType("searchRetrieve".to_string())
        );
    }

    #[test]
    fn test_translate_query_mismatched_tree() {
        let err = translate_query("cql", &fcs_word("x")).unwrap_err();
        assert!(matches!(err, TranslationError::UnsupportedQueryType(t) if t == "cql"));
    }

    #[test]
    fn test_parsed_query_json() {
        let json = r#"{
            "query_type": "cql",
            "tree": {"type": "search_clause", "term": "Katze"}
        }"#;
        let query: ParsedQuery = serde_json::from_str(json).unwrap();

        assert_eq!(query.query_type(), QueryType::Cql);
        assert_eq!(translate_query("cql", &query).unwrap(), "[word = 'katze']");
    }
}
