use crate::error::{Error, Result};
use crate::types::{CodePoint, FoldStatus, CODE_POINT_MAX};
use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

/// A one-way simple case folding table: each key folds to exactly one code
/// point. Many keys may share a target. Iteration is by ascending key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldTable {
    folds: BTreeMap<CodePoint, CodePoint>,
}

/// Check that \p value names a code point.
pub(crate) fn check_code_point(value: u64) -> Result<CodePoint> {
    if value > CODE_POINT_MAX as u64 {
        return Err(Error::InvalidCodePoint { value });
    }
    Ok(value as CodePoint)
}

impl FoldTable {
    pub fn new() -> FoldTable {
        FoldTable::default()
    }

    /// Build a raw table of the given status from (from, to) pairs.
    /// A key folding to two different targets is fatal; an exact repeat is not.
    pub fn from_pairs<I>(status: FoldStatus, pairs: I) -> Result<FoldTable>
    where
        I: IntoIterator<Item = (CodePoint, CodePoint)>,
    {
        let mut folds = BTreeMap::new();
        for (from, to) in pairs {
            check_code_point(from as u64)?;
            check_code_point(to as u64)?;
            if from == to {
                return Err(Error::IdentityFold { status, key: from });
            }
            match folds.entry(from) {
                Entry::Vacant(v) => {
                    v.insert(to);
                }
                Entry::Occupied(o) if *o.get() == to => {}
                Entry::Occupied(o) => {
                    return Err(Error::ConflictingFold {
                        status,
                        key: from,
                        first: *o.get(),
                        second: to,
                    })
                }
            }
        }
        Ok(FoldTable { folds })
    }

    /// Union the common and simple tables into the simple case folding table.
    /// Simple mappings replace common ones under the same key.
    pub fn merge(common: &FoldTable, simple: &FoldTable) -> FoldTable {
        let mut folds = common.folds.clone();
        folds.extend(simple.iter());
        tracing::debug!(
            target: "iufold",
            common = common.len(),
            simple = simple.len(),
            merged = folds.len(),
            "merged one-way fold tables"
        );
        FoldTable { folds }
    }

    /// \return the code point that \p cp folds to, if it folds at all.
    #[inline]
    pub fn get(&self, cp: CodePoint) -> Option<CodePoint> {
        self.folds.get(&cp).copied()
    }

    pub fn contains_key(&self, cp: CodePoint) -> bool {
        self.folds.contains_key(&cp)
    }

    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Iterate (from, to) pairs by ascending `from`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.folds.iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, CodePoint, CodePoint>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (CodePoint, CodePoint);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&from, &to)| (from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FoldTable {
    type Item = (CodePoint, CodePoint);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
