use anyhow::Result;
use korp_fcs_query::tagset;
use serde_json::json;
use tracing::debug;

use crate::cli::TagCommands;
use crate::commands::Output;

pub fn execute(command: TagCommands, output: Output) -> Result<()> {
    let (tag, candidates) = match &command {
        TagCommands::ToSuc { tag } => (tag, tagset::to_target(tag)?),
        TagCommands::ToUd { tag } => (tag, tagset::to_source(tag)?),
    };
    debug!(tag = %tag, ?candidates, "mapped part-of-speech tag");

    let lines: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
    output.emit(&lines, &json!({ "tag": tag, "candidates": candidates }))
}
