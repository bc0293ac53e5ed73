//! Identifier interning.
//!
//! Every distinct identifier is copied into the arena once and handed out
//! as a 32-bit `Name`, so environment lookups compare integers instead of
//! strings.

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::fmt;

use crate::arena::{Arena, ArenaError, ByteSpan};

/// Interned identifier.
///
/// # Equality
/// Two names are equal exactly when their text is equal, provided both
/// came from the same `Interner`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Arena-backed string interner.
#[derive(Default)]
pub struct Interner {
    /// Map from identifier text to its handle.
    map: FxHashMap<Box<str>, Name>,
    /// Arena location of each interned name, indexed by `Name`.
    spans: Vec<ByteSpan>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, copying it into the arena on first sight.
    pub fn intern(&mut self, arena: &mut Arena, text: &str) -> Result<Name, ArenaError> {
        if let Some(&name) = self.map.get(text) {
            return Ok(name);
        }
        let span = arena.alloc_bytes(text.as_bytes())?;
        let raw = u32::try_from(self.spans.len()).map_err(|_| ArenaError {
            requested: text.len(),
            offset: arena.offset(),
            capacity: arena.capacity(),
        })?;
        let name = Name(raw);
        self.spans.push(span);
        self.map.insert(text.into(), name);
        Ok(name)
    }

    /// Find an already-interned name without allocating.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.map.get(text).copied()
    }

    /// Text of an interned name.
    pub fn lookup<'a>(&self, arena: &'a Arena, name: Name) -> Cow<'a, str> {
        let bytes = arena.bytes(self.spans[name.0 as usize]);
        String::from_utf8_lossy(bytes)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
