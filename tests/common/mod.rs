#![allow(clippy::uninlined_format_args)]

use iufold::{CaseFoldTables, CodePoint, FoldStatus, FoldTable};

/// Common (C) rows of CaseFolding.txt, covering the interesting groups.
pub fn common_pairs() -> Vec<(CodePoint, CodePoint)> {
    let mut pairs = Vec::new();
    // A-Z.
    pairs.extend((0x41..=0x5A).map(|cp| (cp, cp + 0x20)));
    // MICRO SIGN.
    pairs.push((0xB5, 0x3BC));
    // Latin-1 uppercase, skipping MULTIPLICATION SIGN.
    pairs.extend((0xC0..=0xDE).filter(|&cp| cp != 0xD7).map(|cp| (cp, cp + 0x20)));
    // LATIN SMALL LETTER LONG S.
    pairs.push((0x17F, 0x73));
    // DŽ, Dž.
    pairs.push((0x1C4, 0x1C6));
    pairs.push((0x1C5, 0x1C6));
    // Iota: COMBINING GREEK YPOGEGRAMMENI, CAPITAL IOTA, PROSGEGRAMMENI.
    pairs.push((0x345, 0x3B9));
    pairs.push((0x399, 0x3B9));
    pairs.push((0x1FBE, 0x3B9));
    // Beta and BETA SYMBOL.
    pairs.push((0x392, 0x3B2));
    pairs.push((0x3D0, 0x3B2));
    // Theta, THETA SYMBOL, CAPITAL THETA SYMBOL.
    pairs.push((0x398, 0x3B8));
    pairs.push((0x3D1, 0x3B8));
    pairs.push((0x3F4, 0x3B8));
    // Mu.
    pairs.push((0x39C, 0x3BC));
    // Sigma and final sigma.
    pairs.push((0x3A3, 0x3C3));
    pairs.push((0x3C2, 0x3C3));
    // Omega and OHM SIGN.
    pairs.push((0x3A9, 0x3C9));
    pairs.push((0x2126, 0x3C9));
    // S with dot above.
    pairs.push((0x1E60, 0x1E61));
    pairs.push((0x1E9B, 0x1E61));
    // KELVIN SIGN, ANGSTROM SIGN.
    pairs.push((0x212A, 0x6B));
    pairs.push((0x212B, 0xE5));
    // Deseret.
    pairs.extend((0x10400..=0x10427).map(|cp| (cp, cp + 0x28)));
    // Adlam.
    pairs.extend((0x1E900..=0x1E921).map(|cp| (cp, cp + 0x22)));
    pairs
}

/// Simple (S) rows of CaseFolding.txt.
pub fn simple_pairs() -> Vec<(CodePoint, CodePoint)> {
    vec![
        // LATIN CAPITAL LETTER SHARP S.
        (0x1E9E, 0xDF),
        // GREEK CAPITAL LETTER ALPHA WITH PSILI AND PROSGEGRAMMENI.
        (0x1F88, 0x1F80),
        // GREEK CAPITAL LETTER ALPHA WITH PROSGEGRAMMENI.
        (0x1FBC, 0x1FB3),
    ]
}

pub fn raw_tables() -> (FoldTable, FoldTable) {
    let common = FoldTable::from_pairs(FoldStatus::Common, common_pairs()).unwrap();
    let simple = FoldTable::from_pairs(FoldStatus::Simple, simple_pairs()).unwrap();
    (common, simple)
}

pub fn build_sample() -> CaseFoldTables {
    let (common, simple) = raw_tables();
    CaseFoldTables::build(&common, &simple)
}

pub fn build_from(pairs: Vec<(CodePoint, CodePoint)>) -> CaseFoldTables {
    let common = FoldTable::from_pairs(FoldStatus::Common, pairs).unwrap();
    CaseFoldTables::build(&common, &FoldTable::new())
}

pub trait EquivalenceTestHelpers {
    /// "Fluent" style helper for testing the full equivalence list of a code point.
    fn test_equivalents(&self, cp: CodePoint, expected: &[CodePoint]) -> &Self;

    /// Test that \p b is listed against \p a.
    fn test_linked(&self, a: CodePoint, b: CodePoint) -> &Self;

    /// Test that \p b is not listed against \p a.
    fn test_not_linked(&self, a: CodePoint, b: CodePoint) -> &Self;
}

impl EquivalenceTestHelpers for CaseFoldTables {
    fn test_equivalents(&self, cp: CodePoint, expected: &[CodePoint]) -> &Self {
        assert_eq!(
            self.iu_equivalents(cp),
            expected,
            "Wrong equivalents for U+{:04X}",
            cp
        );
        self
    }

    fn test_linked(&self, a: CodePoint, b: CodePoint) -> &Self {
        assert!(
            self.iu_equivalents(a).contains(&b),
            "U+{:04X} should list U+{:04X}, got {:X?}",
            a,
            b,
            self.iu_equivalents(a)
        );
        self
    }

    fn test_not_linked(&self, a: CodePoint, b: CodePoint) -> &Self {
        assert!(
            !self.iu_equivalents(a).contains(&b),
            "U+{:04X} should not list U+{:04X}",
            a,
            b
        );
        self
    }
}
