use anyhow::{Context, Result};
use korp_fcs_query::{translate_query, CqlNode, ParsedQuery, QueryNode, QueryType};
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::commands::Output;

/// Read a query tree, translate it and print the CQP string.
///
/// The input is either a bare tree, interpreted according to `query_type`,
/// or an envelope `{"query_type": ..., "tree": ...}`. For an envelope an
/// explicit `query_type` must agree with the one it declares.
pub fn execute(
    query_type: Option<String>,
    input: Option<PathBuf>,
    default_type: QueryType,
    output: Output,
) -> Result<()> {
    let raw = read_input(input.as_deref())?;
    let value: Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;

    let (declared, query) = parse_query(query_type, value, default_type)?;
    info!(query_type = %declared, "translating query");

    let cqp = translate_query(&declared, &query)?;
    debug!(cqp = %cqp, "translation finished");

    output.emit(
        &[cqp.clone()],
        &json!({ "query_type": query.query_type(), "cqp": cqp }),
    )
}

/// Work out the declared query type and the parsed tree from the input JSON.
pub fn parse_query(
    query_type: Option<String>,
    value: Value,
    default_type: QueryType,
) -> Result<(String, ParsedQuery)> {
    if is_envelope(&value) {
        let query: ParsedQuery =
            serde_json::from_value(value).context("Invalid query envelope")?;
        let declared = query_type.unwrap_or_else(|| query.query_type().to_string());
        return Ok((declared, query));
    }

    let declared = query_type.unwrap_or_else(|| default_type.to_string());
    let query = match declared.parse::<QueryType>()? {
        QueryType::Cql => ParsedQuery::Cql(
            serde_json::from_value::<CqlNode>(value).context("Invalid CQL query tree")?,
        ),
        QueryType::Fcs => ParsedQuery::Fcs(
            serde_json::from_value::<QueryNode>(value).context("Invalid FCS-QL query tree")?,
        ),
    };
    Ok((declared, query))
}

fn is_envelope(value: &Value) -> bool {
    value.get("query_type").is_some() && value.get("tree").is_some()
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read query from stdin")?;
            Ok(buf)
        }
    }
}
