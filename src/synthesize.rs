use crate::fold_table::FoldTable;
use crate::multimap::MultiMapping;
use crate::types::{is_ascii, is_astral, CodePoint};
use std::collections::BTreeMap;

/// For each fold target, the code points folding to it, ascending.
#[derive(Debug, Default)]
pub struct SiblingIndex {
    sources: BTreeMap<CodePoint, Vec<CodePoint>>,
}

impl SiblingIndex {
    pub fn new(table: &FoldTable) -> SiblingIndex {
        let mut sources: BTreeMap<CodePoint, Vec<CodePoint>> = BTreeMap::new();
        // The table iterates by ascending key, so each list comes out sorted.
        for (from, to) in table {
            sources.entry(to).or_default().push(from);
        }
        SiblingIndex { sources }
    }

    /// \return every code point that folds to \p to, including \p from.
    pub fn sources_of(&self, to: CodePoint) -> &[CodePoint] {
        self.sources.get(&to).map_or(&[], Vec::as_slice)
    }

    /// \return the code points other than \p from that fold to \p to.
    pub fn siblings(&self, from: CodePoint, to: CodePoint) -> impl Iterator<Item = CodePoint> + '_ {
        self.sources_of(to)
            .iter()
            .copied()
            .filter(move |&other| other != from)
    }
}

/// \return whether the fold \p from -> \p to is unknown to ASCII-only
/// case-insensitive matching and so must be kept.
/// Note this is deliberately one-directional: an ASCII source folding to a
/// non-ASCII target is not retained by this rule.
#[inline]
pub fn must_retain(from: CodePoint, to: CodePoint) -> bool {
    if is_astral(from) || is_astral(to) {
        return true;
    }
    !is_ascii(from) && is_ascii(to)
}

/// Link every code point to the other code points sharing its fold target,
/// and keep the original folds that Unicode-mode matching adds.
pub fn synthesize(table: &FoldTable) -> MultiMapping {
    let index = SiblingIndex::new(table);
    let mut filtered = MultiMapping::new();
    let mut retained = 0usize;
    for (from, to) in table {
        // If S and ſ both fold to s, then S must be linked to ſ directly:
        // consumers only see the equivalence table, never the fold target.
        for other in index.siblings(from, to) {
            filtered.extend(from, other);
        }
        if must_retain(from, to) {
            filtered.extend(from, to);
            retained += 1;
        }
    }
    tracing::debug!(
        target: "iufold",
        keys = filtered.len(),
        retained,
        "synthesized sibling and astral mappings"
    );
    filtered
}
