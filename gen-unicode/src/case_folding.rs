use anyhow::{bail, Context, Result};
use iufold::{fold_table_from_json, FoldStatus, FoldTable};
use std::fs;
use std::path::Path;
use ucd_parse::{CaseFold, CaseStatus};

/// The raw common and simple fold tables, before merging.
#[derive(Debug)]
pub(crate) struct RawFolds {
    pub(crate) common: FoldTable,
    pub(crate) simple: FoldTable,
}

/// Split CaseFolding.txt records into the common (C) and simple (S) tables.
/// Full (F) and Turkic (T) mappings are not part of simple case folding.
fn split_records(records: &[CaseFold]) -> Result<RawFolds> {
    let mut common = Vec::new();
    let mut simple = Vec::new();
    for record in records {
        let (status, pairs) = match record.status {
            CaseStatus::Common => (FoldStatus::Common, &mut common),
            CaseStatus::Simple => (FoldStatus::Simple, &mut simple),
            CaseStatus::Full | CaseStatus::Special => continue,
        };
        let [folded] = record.mapping.as_slice() else {
            bail!(
                "{} fold of U+{:04X} has {} code points, expected 1",
                status,
                record.codepoint.value(),
                record.mapping.len()
            );
        };
        pairs.push((record.codepoint.value(), folded.value()));
    }
    Ok(RawFolds {
        common: FoldTable::from_pairs(FoldStatus::Common, common)?,
        simple: FoldTable::from_pairs(FoldStatus::Simple, simple)?,
    })
}

/// Load CaseFolding.txt from the Unicode Character Database in \p ucd_dir.
pub(crate) fn load_ucd(ucd_dir: &Path) -> Result<RawFolds> {
    let records: Vec<CaseFold> = ucd_parse::parse(ucd_dir)
        .with_context(|| format!("could not parse CaseFolding.txt in {}", ucd_dir.display()))?;
    let raw = split_records(&records)?;
    tracing::info!(
        common = raw.common.len(),
        simple = raw.simple.len(),
        "loaded CaseFolding.txt"
    );
    Ok(raw)
}

fn load_json_table(path: &Path, status: FoldStatus) -> Result<FoldTable> {
    let json =
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    let table = fold_table_from_json(status, &json)
        .with_context(|| format!("invalid {} fold table {}", status, path.display()))?;
    Ok(table)
}

/// Load the pre-split tables, each keyed by decimal code point.
pub(crate) fn load_json(common: &Path, simple: &Path) -> Result<RawFolds> {
    let raw = RawFolds {
        common: load_json_table(common, FoldStatus::Common)?,
        simple: load_json_table(simple, FoldStatus::Simple)?,
    };
    tracing::info!(
        common = raw.common.len(),
        simple = raw.simple.len(),
        "loaded JSON fold tables"
    );
    Ok(raw)
}
