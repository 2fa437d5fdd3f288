use codegen::Scope;
use iufold::CaseFoldTables;

/// Format the tables as a Rust module of sorted static arrays.
pub(crate) fn generate(tables: &CaseFoldTables) -> String {
    let mut scope = Scope::new();
    scope.raw("// Generated by gen-unicode from CaseFolding.txt. Do not edit.");

    let folds: Vec<String> = tables
        .simple
        .iter()
        .map(|(from, to)| format!("({:#04X}, {:#04X}),", from, to))
        .collect();
    scope.raw(&format!(
        "/// Simple case folding: each code point and the code point it folds to.\npub(crate) const SIMPLE_CASE_FOLDS: [(u32, u32); {}] = [\n    {}\n];",
        folds.len(),
        folds.join("\n    ")
    ));

    let mappings: Vec<String> = tables
        .iu
        .iter()
        .map(|(key, values)| {
            let values: Vec<String> = values.iter().map(|cp| format!("{:#04X}", cp)).collect();
            format!("({:#04X}, &[{}]),", key, values.join(", "))
        })
        .collect();
    scope.raw(&format!(
        "/// Extra equivalences for case-insensitive matching in Unicode mode.\npub(crate) const IU_MAPPINGS: [(u32, &[u32]); {}] = [\n    {}\n];",
        mappings.len(),
        mappings.join("\n    ")
    ));

    let mut out = scope.to_string();
    out.push('\n');
    out
}
