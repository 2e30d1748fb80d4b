//! Error types for query translation.
//!
//! Every failure maps onto the SRU/FCS diagnostic the endpoint reports to
//! the client, see [`TranslationError::diagnostic`].

use serde::Serialize;
use thiserror::Error;

/// SRU: query syntax error
pub const SRU_QUERY_SYNTAX_ERROR: &str = "info:srw/diagnostic/1/10";
/// SRU: unsupported boolean operator
pub const SRU_UNSUPPORTED_BOOLEAN_OPERATOR: &str = "info:srw/diagnostic/1/37";
/// SRU: cannot process query; reason unknown
pub const SRU_CANNOT_PROCESS_QUERY_REASON_UNKNOWN: &str = "info:srw/diagnostic/1/47";
/// FCS: general query too complex, cannot perform query
pub const FCS_GENERAL_QUERY_TOO_COMPLEX: &str = "http://clarin.eu/fcs/diagnostic/11";

/// Errors raised while translating a parsed query into CQP.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Unsupported Boolean operator: {0}")]
    UnsupportedBooleanOperator(String),

    #[error("{0}")]
    QueryTooComplex(String),

    /// A simple expression outside the supported layers and operators
    #[error(
        "Endpoint only supports 'text', 'word', 'lemma', and 'pos' layers, \
         the '=' and '!=' operators and no regex flags"
    )]
    UnsupportedExpression,

    #[error("unknown cql node: {0}")]
    UnknownQueryNode(String),

    #[error("unknown UD-17 PoS code in query: {0}")]
    UnknownSourceTag(String),

    #[error("unknown PoS code from search engine: {0}")]
    UnknownTargetTag(String),

    #[error("Queries with queryType '{0}' are not supported by this CLARIN-FCS Endpoint.")]
    UnsupportedQueryType(String),
}

pub type Result<T> = std::result::Result<T, TranslationError>;

/// Protocol-level view of a [`TranslationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic identifier (SRU or FCS namespace)
    pub uri: &'static str,
    /// Supplementary detail: the offending operator or an explanation
    pub details: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl TranslationError {
    /// Short, stable name of the error kind (used in logs and CLI output)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedBooleanOperator(_) => "unsupported_boolean_operator",
            Self::QueryTooComplex(_) | Self::UnsupportedExpression => "query_too_complex",
            Self::UnknownQueryNode(_) => "unknown_query_node",
            Self::UnknownSourceTag(_) => "unknown_source_tag",
            Self::UnknownTargetTag(_) => "unknown_target_tag",
            Self::UnsupportedQueryType(_) => "unsupported_query_type",
        }
    }

    /// Map to the diagnostic reported back to the client.
    pub fn diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        let (uri, details) = match self {
            Self::UnsupportedBooleanOperator(op) => {
                (SRU_UNSUPPORTED_BOOLEAN_OPERATOR, Some(op.clone()))
            }
            Self::QueryTooComplex(_) => (FCS_GENERAL_QUERY_TOO_COMPLEX, None),
            Self::UnsupportedExpression => (FCS_GENERAL_QUERY_TOO_COMPLEX, Some(message.clone())),
            Self::UnknownQueryNode(_) | Self::UnsupportedQueryType(_) => {
                (SRU_CANNOT_PROCESS_QUERY_REASON_UNKNOWN, Some(message.clone()))
            }
            Self::UnknownSourceTag(_) => (SRU_QUERY_SYNTAX_ERROR, None),
            Self::UnknownTargetTag(_) => (SRU_CANNOT_PROCESS_QUERY_REASON_UNKNOWN, None),
        };

        Diagnostic {
            uri,
            details,
            message,
        }
    }
}

impl From<TranslationError> for Diagnostic {
    fn from(err: TranslationError) -> Self {
        err.diagnostic()
    }
}
