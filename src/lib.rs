/*!

# iufold - case folding tables for Unicode-aware case-insensitive regexes

A regular expression with only the `i` flag compares characters using ASCII case pairs.
With both `i` and `u`, every character is first mapped through Unicode *simple case folding*,
so that for example U+017F (LATIN SMALL LETTER LONG S) matches `s` and `S`, and U+212A
(KELVIN SIGN) matches `k` and `K`.

A pattern rewriter targeting an engine without Unicode mode must spell those extra
equivalences out. The fold table alone is not enough: many code points fold to the same
target, and inverting a many-to-one map loses entries. This crate builds, once and offline,
the two tables such a rewriter needs:

- the one-way simple case folding table, and
- a symmetric table of the *extra* equivalences that `i`+`u` adds over plain `i`.

# Example: building the tables

```rust
use iufold::{CaseFoldTables, FoldStatus, FoldTable};

let common = FoldTable::from_pairs(
    FoldStatus::Common,
    vec![(0x4B, 0x6B), (0x53, 0x73), (0x17F, 0x73), (0x212A, 0x6B)],
)
.unwrap();
let simple = FoldTable::new();
let tables = CaseFoldTables::build(&common, &simple);

// KELVIN SIGN and K are linked directly.
assert_eq!(tables.iu_equivalents(0x212A), &[0x4B]);
assert_eq!(tables.iu_equivalents(0x4B), &[0x212A]);
// Plain ASCII pairs are left to the engine.
assert!(tables.iu_equivalents(0x61).is_empty());
```

# Consuming the tables

When rewriting a pattern with both `i` and `u`, add every code point listed against a code
point by `iu_equivalents` next to it. Do not use the equivalence table for `i` alone.

Where an ASCII case variant of a code point already appears in a list, the code point itself
is left out: plain `i` matching covers it. For example the entry for `ſ` lists `S` but not `s`.

# Artifacts

`write_artifacts` stores both tables as JSON keyed by decimal code point, tab indented and
byte-stable for equal input. Both files are replaced together or not at all.

*/

#![warn(clippy::all)]

pub use crate::artifacts::{
    read_artifacts, render_artifacts, write_all_or_nothing, write_artifacts, ArtifactPaths,
    IU_FILE_NAME, SIMPLE_FILE_NAME,
};
pub use crate::error::{Error, Result};
pub use crate::fold_table::FoldTable;
pub use crate::multimap::MultiMapping;
pub use crate::serialize::{fold_table_from_json, multimap_from_json, to_json};
pub use crate::symmetric::build_symmetric;
pub use crate::synthesize::{must_retain, synthesize, SiblingIndex};
pub use crate::tables::CaseFoldTables;
pub use crate::types::*;
pub use crate::verify::{verify, VerifyError, Violation};

mod artifacts;
mod classify;
mod error;
mod fold_table;
mod multimap;
mod serialize;
mod symmetric;
mod synthesize;
mod tables;
mod types;
mod verify;
