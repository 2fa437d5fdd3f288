use crate::fold_table::FoldTable;
use crate::multimap::MultiMapping;

/// Build the two-way equivalence table from the filtered one-way mappings.
/// Links implied by an ASCII case variant already stored under a key are
/// not added again.
pub fn build_symmetric(table: &FoldTable, filtered: &MultiMapping) -> MultiMapping {
    let skip = |existing, candidate| table.is_ascii_case_variant(existing, candidate);
    let mut result = MultiMapping::new();
    for (from, targets) in filtered.iter() {
        for &target in targets {
            result.extend_unless(from, target, skip);
            result.extend_unless(target, from, skip);
        }
    }
    tracing::debug!(
        target: "iufold",
        keys = result.len(),
        "built symmetric equivalence table"
    );
    result
}
