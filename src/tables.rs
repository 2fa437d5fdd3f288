use crate::fold_table::FoldTable;
use crate::multimap::MultiMapping;
use crate::symmetric::build_symmetric;
use crate::synthesize::synthesize;
use crate::types::CodePoint;

/// The two generated artifacts: the one-way simple case folding table, and
/// the extra equivalences needed when both the `i` and `u` flags are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFoldTables {
    pub simple: FoldTable,
    pub iu: MultiMapping,
}

impl CaseFoldTables {
    /// Run the whole pipeline over the raw common and simple tables.
    pub fn build(common: &FoldTable, simple: &FoldTable) -> CaseFoldTables {
        let merged = FoldTable::merge(common, simple);
        let filtered = synthesize(&merged);
        let iu = build_symmetric(&merged, &filtered);
        tracing::info!(
            target: "iufold",
            simple = merged.len(),
            iu = iu.len(),
            "built case folding tables"
        );
        CaseFoldTables { simple: merged, iu }
    }

    /// \return the code point that \p cp simple-case-folds to, if any.
    pub fn simple_fold(&self, cp: CodePoint) -> Option<CodePoint> {
        self.simple.get(cp)
    }

    /// \return the code points a rewriter must add next to \p cp when
    /// emulating Unicode-mode case-insensitive matching.
    /// This is not meaningful without Unicode mode.
    pub fn iu_equivalents(&self, cp: CodePoint) -> &[CodePoint] {
        self.iu.get(cp)
    }
}
