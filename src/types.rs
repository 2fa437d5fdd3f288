use core::fmt;

pub type CodePoint = u32;

/// The maximum (inclusive) code point.
pub const CODE_POINT_MAX: CodePoint = 0x10FFFF;

/// The last code point of the Basic Multilingual Plane.
pub const BMP_MAX: CodePoint = 0xFFFF;

/// Code points below this are understood by ASCII-only case-insensitive matching.
pub const ASCII_LIMIT: CodePoint = 0x80;

/// \return whether \p cp lies outside the Basic Multilingual Plane.
#[inline(always)]
pub fn is_astral(cp: CodePoint) -> bool {
    cp > BMP_MAX
}

#[inline(always)]
pub fn is_ascii(cp: CodePoint) -> bool {
    cp < ASCII_LIMIT
}

/// The status class of a raw fold table, as given by the status field of
/// CaseFolding.txt. Only the classes used by simple case folding appear here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FoldStatus {
    /// `C`: mappings shared by simple and full folding.
    Common,
    /// `S`: single code point mappings where they differ from full folding.
    Simple,
}

impl fmt::Display for FoldStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FoldStatus::Common => f.write_str("common"),
            FoldStatus::Simple => f.write_str("simple"),
        }
    }
}
