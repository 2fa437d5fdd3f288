// Work around dead code warnings: rust-lang issue #46379
pub mod common;

// Work around dead code warnings: rust-lang issue #46379
use common::*;

use iufold::{render_artifacts, verify, CodePoint, FoldStatus, FoldTable, ASCII_LIMIT};

#[test]
fn test_long_s() {
    build_sample()
        .test_equivalents(0x53, &[0x17F])
        .test_equivalents(0x17F, &[0x53])
        .test_equivalents(0x73, &[0x17F])
        .test_not_linked(0x53, 0x73)
        .test_not_linked(0x17F, 0x73);
}

#[test]
fn test_kelvin_sign() {
    build_sample()
        .test_equivalents(0x4B, &[0x212A])
        .test_equivalents(0x212A, &[0x4B])
        .test_equivalents(0x6B, &[0x212A]);
}

#[test]
fn test_ascii_pairs_absent() {
    let tables = build_sample();
    for cp in 0x41..=0x5A {
        if cp == 0x4B || cp == 0x53 {
            continue;
        }
        tables.test_equivalents(cp, &[]).test_equivalents(cp + 0x20, &[]);
    }
    let tables = build_from(vec![(0x41, 0x61)]);
    assert!(tables.iu.is_empty());
}

#[test]
fn test_groups_of_three() {
    build_sample()
        .test_equivalents(0x345, &[0x399, 0x1FBE])
        .test_equivalents(0x399, &[0x345, 0x1FBE])
        .test_equivalents(0x1FBE, &[0x345, 0x399])
        .test_equivalents(0x3B9, &[])
        .test_equivalents(0x398, &[0x3D1, 0x3F4])
        .test_equivalents(0x3D1, &[0x398, 0x3F4])
        .test_equivalents(0x3F4, &[0x398, 0x3D1]);
}

#[test]
fn test_bmp_siblings() {
    build_sample()
        .test_equivalents(0xB5, &[0x39C])
        .test_equivalents(0x39C, &[0xB5])
        .test_equivalents(0x3A3, &[0x3C2])
        .test_equivalents(0x3C2, &[0x3A3])
        .test_equivalents(0x1C4, &[0x1C5])
        .test_equivalents(0x1C5, &[0x1C4])
        .test_equivalents(0xC5, &[0x212B])
        .test_equivalents(0x212B, &[0xC5])
        .test_equivalents(0xE5, &[]);
}

#[test]
fn test_astral_both_ways() {
    let tables = build_sample();
    for cp in 0x10400..=0x10427 {
        tables
            .test_equivalents(cp, &[cp + 0x28])
            .test_equivalents(cp + 0x28, &[cp]);
    }
    tables
        .test_equivalents(0x1E900, &[0x1E922])
        .test_equivalents(0x1E922, &[0x1E900]);
}

#[test]
fn test_lone_bmp_fold_left_to_fold_table() {
    // Nothing else folds to ß, so the plain fold table covers ẞ.
    let tables = build_sample();
    assert_eq!(tables.simple_fold(0x1E9E), Some(0xDF));
    tables.test_equivalents(0x1E9E, &[]).test_equivalents(0xDF, &[]);
}

#[test]
fn test_ascii_source_to_non_ascii_target_not_retained() {
    // No such fold exists in CaseFolding.txt; the retention rule only looks
    // at non-ASCII sources folding into ASCII.
    let tables = build_from(vec![(0x41, 0x100)]);
    assert!(tables.iu.is_empty());
}

#[test]
fn test_sample_verifies() {
    assert_eq!(verify(&build_sample()), Ok(()));
}

#[test]
fn test_no_self_loops_or_duplicates() {
    let tables = build_sample();
    for (key, values) in tables.iu.iter() {
        assert!(!values.contains(&key), "U+{:04X} lists itself", key);
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), values.len(), "U+{:04X} has duplicates", key);
    }
}

#[test]
fn test_ascii_exclusion() {
    let tables = build_sample();
    for x in 0..ASCII_LIMIT {
        for y in 0..ASCII_LIMIT {
            if tables.simple.is_ascii_case_variant(x, y) {
                tables.test_not_linked(x, y).test_not_linked(y, x);
            }
        }
    }
}

#[test]
fn test_symmetry() {
    let tables = build_sample();
    let is_variant = |a: CodePoint, b: CodePoint| tables.simple.is_ascii_case_variant(a, b);
    for (x, values) in tables.iu.iter() {
        for &y in values {
            let back = tables.iu_equivalents(y);
            assert!(
                back.contains(&x) || back.iter().any(|&z| is_variant(z, x)),
                "U+{:04X} lists U+{:04X} but nothing leads back",
                x,
                y
            );
        }
    }
    // Outside ASCII targets the table is strictly symmetric.
    for (x, values) in tables.iu.iter().filter(|&(x, _)| x >= ASCII_LIMIT) {
        for &y in values.iter().filter(|&&y| y >= ASCII_LIMIT) {
            tables.test_linked(y, x);
        }
    }
}

#[test]
fn test_simple_table_has_every_source() {
    let tables = build_sample();
    let expected = common_pairs().len() + simple_pairs().len();
    assert_eq!(tables.simple.len(), expected);
    assert_eq!(tables.simple_fold(0x1F88), Some(0x1F80));
    assert_eq!(tables.simple_fold(0x41), Some(0x61));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let first = render_artifacts(&build_sample()).unwrap();
    let second = render_artifacts(&build_sample()).unwrap();
    assert_eq!(first, second);

    // Input order does not matter either.
    let mut reversed = common_pairs();
    reversed.reverse();
    let common = FoldTable::from_pairs(FoldStatus::Common, reversed).unwrap();
    let simple = FoldTable::from_pairs(FoldStatus::Simple, simple_pairs()).unwrap();
    let third = render_artifacts(&iufold::CaseFoldTables::build(&common, &simple)).unwrap();
    assert_eq!(first, third);
}
