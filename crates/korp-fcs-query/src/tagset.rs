//! Part-of-speech tagset mapping between UD-17 and SUC.
//!
//! FCS-QL `pos` constraints use the Universal Dependencies (v1.7) UPOS tags,
//! while Korp annotates tokens with SUC tags (optionally followed by
//! `.`-separated morphological attributes, e.g. `PC.PRF.UTR.SIN.IND.NOM`).
//! Neither direction is a function: a tag may map to several candidates and
//! the two tables are not inverses of each other.
//!
//! Both tables are immutable and built once on first use.

use crate::error::{Result, TranslationError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type TagTable = HashMap<&'static str, &'static [&'static str]>;

const UD17_TO_SUC_ENTRIES: &[(&str, &[&str])] = &[
    ("NOUN", &["NN"]),
    ("PROPN", &["PM"]),
    ("ADJ", &["JJ", "PC", "RO"]),
    ("VERB", &["VB", "PC"]),
    ("AUX", &["VB"]),
    ("NUM", &["RG", "RO"]),
    ("PRON", &["PN", "PS", "HP", "HS"]),
    ("DET", &["DT", "HD", "HS", "PS"]),
    ("PART", &["IE"]),
    ("ADV", &["AB", "HA", "PL"]),
    ("ADP", &["PL", "PP"]),
    ("CCONJ", &["KN"]),
    ("SCONJ", &["SN"]),
    ("INTJ", &["IN"]),
    ("PUNCT", &["MAD", "MID", "PAD"]),
    ("X", &["UO"]),
];

const SUC_TO_UD17_ENTRIES: &[(&str, &[&str])] = &[
    ("NN", &["NOUN"]),
    ("PM", &["PROPN"]),
    ("VB", &["VERB", "AUX"]),
    ("IE", &["PART"]),
    // TODO: PC is also used adjectivally; decide on lemma/msd whether to add ADJ
    ("PC", &["VERB"]),
    ("PL", &["PART"]),
    ("PN", &["PRON"]),
    ("PS", &["DET"]),
    ("HP", &["PRON"]),
    ("HS", &["DET"]),
    ("DT", &["DET"]),
    ("HD", &["DET"]),
    ("JJ", &["ADJ"]),
    ("AB", &["ADV"]),
    ("HA", &["ADV"]),
    ("KN", &["CCONJ"]),
    ("SN", &["SCONJ"]),
    ("PP", &["ADP"]),
    ("RG", &["NUM"]),
    ("RO", &["ADJ"]),
    ("IN", &["INTJ"]),
    // Unknown/foreign word, could be anything
    ("UO", &["X"]),
    ("MAD", &["PUNCT"]),
    ("MID", &["PUNCT"]),
    ("PAD", &["PUNCT"]),
];

/// UD-17 → SUC
static UD17_TO_SUC: Lazy<TagTable> = Lazy::new(|| UD17_TO_SUC_ENTRIES.iter().copied().collect());

/// SUC → UD-17
static SUC_TO_UD17: Lazy<TagTable> = Lazy::new(|| SUC_TO_UD17_ENTRIES.iter().copied().collect());

/// Map a UD-17 tag from a query to its SUC candidates, in table order.
pub fn to_target(tag: &str) -> Result<&'static [&'static str]> {
    UD17_TO_SUC
        .get(tag.to_uppercase().as_str())
        .copied()
        .ok_or_else(|| TranslationError::UnknownSourceTag(tag.to_string()))
}

/// Map a SUC tag emitted by the search engine back to its UD-17 candidates.
///
/// Anything after the first `.` (morphological attributes) is ignored.
pub fn to_source(tag: &str) -> Result<&'static [&'static str]> {
    let pos = tag.split('.').next().unwrap_or(tag);
    SUC_TO_UD17
        .get(pos.to_uppercase().as_str())
        .copied()
        .ok_or_else(|| TranslationError::UnknownTargetTag(pos.to_string()))
}

/// UD-17 tag to show for a token annotated with `tag`.
///
/// Picks the first candidate; unknown tags yield `None` so that a renderer
/// can simply leave the PoS layer empty for that token.
pub fn display_tag(tag: &str) -> Option<&'static str> {
    match to_source(tag) {
        Ok(candidates) => candidates.first().copied(),
        Err(err) => {
            tracing::debug!(tag, error = %err, "no UD-17 tag for search engine PoS code");
            None
        }
    }
}

/// All UD-17 tags that can appear in a `pos` constraint, in table order
pub fn source_tags() -> impl Iterator<Item = &'static str> {
    UD17_TO_SUC_ENTRIES.iter().map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("NOUN", &["NN"] ; "noun")]
    #[test_case("ADJ", &["JJ", "PC", "RO"] ; "adjective keeps table order")]
    #[test_case("pron", &["PN", "PS", "HP", "HS"] ; "lower case")]
    #[test_case("Punct", &["MAD", "MID", "PAD"] ; "mixed case")]
    fn test_to_target(tag: &str, expected: &[&str]) {
        assert_eq!(to_target(tag).unwrap(), expected);
    }

    #[test_case("VB", &["VERB", "AUX"] ; "verb")]
    #[test_case("pc", &["VERB"] ; "lower case")]
    #[test_case("PC.PRF.UTR.SIN.IND.NOM", &["VERB"] ; "attribute suffix")]
    #[test_case("nn.neu.sin.def.nom", &["NOUN"] ; "lower case with suffix")]
    fn test_to_source(tag: &str, expected: &[&str]) {
        assert_eq!(to_source(tag).unwrap(), expected);
    }

    #[test]
    fn test_to_source_ignores_suffix() {
        assert_eq!(to_source("PC.sub"), to_source("PC"));
    }

    #[test]
    fn test_unknown_source_tag() {
        let err = to_target("FOO").unwrap_err();
        assert_eq!(err, TranslationError::UnknownSourceTag("FOO".to_string()));
    }

    #[test]
    fn test_unknown_target_tag_reports_prefix() {
        let err = to_source("XX.sub").unwrap_err();
        assert_eq!(err, TranslationError::UnknownTargetTag("XX".to_string()));
    }

    #[test]
    fn test_tables_do_not_cross() {
        // SUC tags are not valid UD-17 input and vice versa
        assert!(to_target("NN").is_err());
        assert!(to_source("NOUN").is_err());
    }

    #[test]
    fn test_display_tag() {
        assert_eq!(display_tag("VB.PRS.AKT"), Some("VERB"));
        assert_eq!(display_tag("MID"), Some("PUNCT"));
        assert_eq!(display_tag("XX"), None);
    }

    #[test]
    fn test_every_target_candidate_is_known() {
        for tag in source_tags() {
            for candidate in to_target(tag).unwrap() {
                assert!(
                    to_source(candidate).is_ok(),
                    "{} maps to {} which has no reverse entry",
                    tag,
                    candidate
                );
            }
        }
        assert_eq!(source_tags().count(), 16);
    }

    #[test]
    fn test_source_tags_keep_table_order() {
        let tags: Vec<&str> = source_tags().collect();

        assert_eq!(&tags[..4], &["NOUN", "PROPN", "ADJ", "VERB"]);
        assert_eq!(tags.last(), Some(&"X"));
    }
}
