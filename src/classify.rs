use crate::fold_table::FoldTable;
use crate::types::{is_ascii, CodePoint};

impl FoldTable {
    /// \return whether \p a and \p b are both ASCII and one folds to the other.
    /// These are exactly the pairs that ASCII-only case-insensitive matching
    /// already treats as equal, so a pattern needs only one of them.
    pub fn is_ascii_case_variant(&self, a: CodePoint, b: CodePoint) -> bool {
        is_ascii(a) && is_ascii(b) && (self.get(a) == Some(b) || self.get(b) == Some(a))
    }
}
