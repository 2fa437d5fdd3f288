use crate::types::CodePoint;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A mapping from a code point to an ordered, duplicate-free list of code
/// points. Lists only ever grow; nothing is removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiMapping {
    entries: BTreeMap<CodePoint, Vec<CodePoint>>,
}

impl MultiMapping {
    pub fn new() -> MultiMapping {
        MultiMapping::default()
    }

    /// Append \p value to the list for \p key unless it is already present.
    /// \return whether the mapping changed.
    pub fn extend(&mut self, key: CodePoint, value: CodePoint) -> bool {
        self.extend_unless(key, value, |_, _| false)
    }

    /// Like `extend`, but also do nothing if \p skip returns true for any
    /// (existing, value) pair stored under \p key.
    pub fn extend_unless<F>(&mut self, key: CodePoint, value: CodePoint, skip: F) -> bool
    where
        F: Fn(CodePoint, CodePoint) -> bool,
    {
        match self.entries.entry(key) {
            btree_map::Entry::Vacant(v) => {
                v.insert(vec![value]);
                true
            }
            btree_map::Entry::Occupied(mut o) => {
                let values = o.get_mut();
                if values.contains(&value) {
                    return false;
                }
                if values.iter().any(|&existing| skip(existing, value)) {
                    return false;
                }
                values.push(value);
                true
            }
        }
    }

    /// \return the code points listed against \p key, in insertion order.
    pub fn get(&self, key: CodePoint) -> &[CodePoint] {
        self.entries.get(&key).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, key: CodePoint, value: CodePoint) -> bool {
        self.get(key).contains(&value)
    }

    pub fn contains_key(&self, key: CodePoint) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries by ascending key.
    pub fn iter(&self) -> impl Iterator<Item = (CodePoint, &[CodePoint])> + '_ {
        self.entries
            .iter()
            .map(|(&key, values)| (key, values.as_slice()))
    }

    /// Build directly from stored lists, e.g. when reading an artifact back.
    /// Lists are taken as-is; `verify` checks them.
    pub(crate) fn from_entries(entries: BTreeMap<CodePoint, Vec<CodePoint>>) -> MultiMapping {
        MultiMapping { entries }
    }
}
