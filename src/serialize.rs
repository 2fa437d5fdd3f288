//! JSON form of the fold tables.
//!
//! Both documents are objects keyed by decimal code point, in ascending
//! numeric order. Fold table values are single integers; equivalence table
//! values are an integer when there is one and an array otherwise. Output is
//! tab-indented with a trailing newline and is byte-stable for equal tables.

use crate::error::{Error, Result};
use crate::fold_table::{check_code_point, FoldTable};
use crate::multimap::MultiMapping;
use crate::types::{CodePoint, FoldStatus};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

impl Serialize for FoldTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (from, to) in self.iter() {
            map.serialize_entry(&from, &to)?;
        }
        map.end()
    }
}

/// A value list, written as a bare integer when it has one element.
struct Values<'a>(&'a [CodePoint]);

impl Serialize for Values<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if let [single] = self.0 {
            return serializer.serialize_u32(*single);
        }
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for cp in self.0 {
            seq.serialize_element(cp)?;
        }
        seq.end()
    }
}

impl Serialize for MultiMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, values) in self.iter() {
            map.serialize_entry(&key, &Values(values))?;
        }
        map.end()
    }
}

/// Render \p value as pretty, tab-indented JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    out.push(b'\n');
    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// The entries of a JSON object in document order, repeats included, so that
/// duplicate keys can be reported instead of silently overwritten.
struct RawEntries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for RawEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = RawEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by decimal code points")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValues {
    One(u64),
    Many(Vec<u64>),
}

fn parse_key(key: &str) -> Result<CodePoint> {
    let value: u64 = match key.parse() {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::InvalidKey {
                key: key.to_string(),
            })
        }
    };
    check_code_point(value)
}

/// Parse a one-way fold table of the given status from JSON.
pub fn fold_table_from_json(status: FoldStatus, json: &str) -> Result<FoldTable> {
    let RawEntries(entries) = serde_json::from_str::<RawEntries<u64>>(json)?;
    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        pairs.push((parse_key(&key)?, check_code_point(value)?));
    }
    FoldTable::from_pairs(status, pairs)
}

/// Parse an equivalence table from JSON. Lists are kept as written.
pub fn multimap_from_json(json: &str) -> Result<MultiMapping> {
    let RawEntries(entries) = serde_json::from_str::<RawEntries<RawValues>>(json)?;
    let mut map = BTreeMap::new();
    for (key, raw) in entries {
        let key = parse_key(&key)?;
        let values = match raw {
            RawValues::One(v) => vec![check_code_point(v)?],
            RawValues::Many(vs) => vs
                .into_iter()
                .map(check_code_point)
                .collect::<Result<Vec<_>>>()?,
        };
        match map.entry(key) {
            Entry::Vacant(v) => {
                v.insert(values);
            }
            Entry::Occupied(_) => return Err(Error::DuplicateKey { key }),
        }
    }
    Ok(MultiMapping::from_entries(map))
}
