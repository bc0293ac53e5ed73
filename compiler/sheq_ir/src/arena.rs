//! Fixed-capacity bump arena and the typed pools charged against it.
//!
//! The arena is a contiguous byte buffer plus a monotonically increasing
//! offset. Every allocation is rounded up to 8-byte alignment and
//! zero-filled. There is no per-object free: the whole region is dropped
//! at once when the evaluation that owns it ends, whether it succeeded
//! or failed.
//!
//! Raw bytes (string literal contents, identifier text) live directly in
//! the buffer and are addressed by `ByteSpan`. Structured records (tokens,
//! expression nodes, environment frames) live in `Pool<T>` side-tables;
//! each record reserves `size_of::<T>()` bytes of the region before it is
//! stored, so the arena capacity bounds them exactly like raw bytes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

/// Alignment applied to every allocation.
pub const ALIGN: usize = 8;

#[inline]
const fn align_up(offset: usize) -> usize {
    (offset + ALIGN - 1) & !(ALIGN - 1)
}

/// The arena has no room for a requested allocation.
///
/// This is the only resource-limit condition of an evaluation. It is never
/// recovered from: every phase wraps it in its own error and propagates it
/// to the top level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArenaError {
    /// Bytes asked for (before alignment padding).
    pub requested: usize,
    /// Offset at the moment of the request.
    pub offset: usize,
    /// Total capacity of the region.
    pub capacity: usize,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arena exhausted: requested {} bytes at offset {} of {}",
            self.requested, self.offset, self.capacity
        )
    }
}

impl std::error::Error for ArenaError {}

/// Handle to a run of bytes stored in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ByteSpan {
    start: u32,
    len: u32,
}

impl ByteSpan {
    /// Number of bytes covered.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Sub-span covering `start..end` relative to this span.
    ///
    /// Returns `None` unless `start <= end <= self.len()`.
    pub fn slice(self, start: usize, end: usize) -> Option<ByteSpan> {
        if start > end || end > self.len() {
            return None;
        }
        let offset = u32::try_from(start).ok()?;
        let len = u32::try_from(end - start).ok()?;
        Some(ByteSpan {
            start: self.start + offset,
            len,
        })
    }
}

/// Bump allocator backing one evaluation.
pub struct Arena {
    buf: Box<[u8]>,
    offset: usize,
}

impl Arena {
    /// Capacity used when nothing else is configured (1 MiB).
    pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

    /// Create a region of `capacity` bytes.
    ///
    /// Capacity is clamped to `u32::MAX` so that every offset fits a
    /// `ByteSpan`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(u32::MAX as usize);
        Arena {
            buf: vec![0; capacity].into_boxed_slice(),
            offset: 0,
        }
    }

    /// Total size of the region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Current bump offset. Never decreases.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes still available (ignoring alignment padding of the next request).
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset
    }

    fn exhausted(&self, requested: usize) -> ArenaError {
        ArenaError {
            requested,
            offset: self.offset,
            capacity: self.capacity(),
        }
    }

    /// Claim `size` aligned bytes and advance the offset.
    fn claim(&mut self, size: usize) -> Result<usize, ArenaError> {
        let start = align_up(self.offset);
        let end = start
            .checked_add(size)
            .filter(|&end| end <= self.capacity())
            .ok_or_else(|| self.exhausted(size))?;
        self.offset = end;
        Ok(start)
    }

    /// Allocate `size` zero-filled, 8-byte-aligned bytes.
    pub fn alloc(&mut self, size: usize) -> Result<ByteSpan, ArenaError> {
        let start = self.claim(size)?;
        self.buf[start..start + size].fill(0);
        // Both fit: claim() keeps the region end within capacity <= u32::MAX.
        let span = ByteSpan {
            start: u32::try_from(start).map_err(|_| self.exhausted(size))?,
            len: u32::try_from(size).map_err(|_| self.exhausted(size))?,
        };
        Ok(span)
    }

    /// Allocate a copy of `bytes`.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> Result<ByteSpan, ArenaError> {
        let span = self.alloc(bytes.len())?;
        let start = span.start as usize;
        self.buf[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(span)
    }

    /// Borrow the bytes behind a span.
    #[inline]
    pub fn bytes(&self, span: ByteSpan) -> &[u8] {
        let start = span.start as usize;
        &self.buf[start..start + span.len()]
    }

    /// Reserve room for `count` records of type `T` kept in a side-table.
    fn reserve<T>(&mut self, count: usize) -> Result<(), ArenaError> {
        let size = mem::size_of::<T>()
            .checked_mul(count)
            .ok_or_else(|| self.exhausted(usize::MAX))?;
        self.claim(size).map(|_| ())
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("offset", &self.offset)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Typed index into a `Pool<T>`.
#[repr(transparent)]
pub struct Idx<T> {
    raw: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Idx {
            raw,
            marker: PhantomData,
        }
    }

    /// Position in the owning pool.
    #[inline]
    pub fn index(self) -> usize {
        self.raw as usize
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.raw
    }
}

impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> {}

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Idx<T> {}

impl<T> Hash for Idx<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = std::any::type_name::<T>();
        let short = ty.rsplit("::").next().unwrap_or(ty);
        write!(f, "Idx::<{short}>({})", self.raw)
    }
}

/// Contiguous run of records in a `Pool<T>`.
pub struct IdxRange<T> {
    start: u32,
    len: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> IdxRange<T> {
    pub const EMPTY: IdxRange<T> = IdxRange {
        start: 0,
        len: 0,
        marker: PhantomData,
    };

    #[inline]
    pub fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

impl<T> Clone for IdxRange<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IdxRange<T> {}

impl<T> PartialEq for IdxRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len == other.len
    }
}

impl<T> Eq for IdxRange<T> {}

impl<T> fmt::Debug for IdxRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdxRange({}..{})", self.start, self.start + self.len)
    }
}

/// Append-only table of `T` records charged against an `Arena`.
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Pool { items: Vec::new() }
    }

    /// Store one record.
    pub fn alloc(&mut self, arena: &mut Arena, item: T) -> Result<Idx<T>, ArenaError> {
        arena.reserve::<T>(1)?;
        let raw = self.next_raw(arena, 1)?;
        self.items.push(item);
        Ok(Idx::from_raw(raw))
    }

    /// Store a run of records contiguously.
    pub fn alloc_slice(&mut self, arena: &mut Arena, items: &[T]) -> Result<IdxRange<T>, ArenaError>
    where
        T: Clone,
    {
        arena.reserve::<T>(items.len())?;
        let start = self.next_raw(arena, items.len())?;
        let len = u32::try_from(items.len()).map_err(|_| arena.exhausted(items.len()))?;
        self.items.extend_from_slice(items);
        Ok(IdxRange {
            start,
            len,
            marker: PhantomData,
        })
    }

    /// Index of the next record, checking that `additional` more still fit in `u32`.
    fn next_raw(&self, arena: &Arena, additional: usize) -> Result<u32, ArenaError> {
        let overflow = || arena.exhausted(additional);
        let end = self.items.len().checked_add(additional).ok_or_else(overflow)?;
        u32::try_from(end).map_err(|_| overflow())?;
        u32::try_from(self.items.len()).map_err(|_| overflow())
    }

    #[inline]
    pub fn get(&self, idx: Idx<T>) -> &T {
        &self.items[idx.index()]
    }

    /// Only used while the owner of a record is still being built.
    #[inline]
    pub fn get_mut(&mut self, idx: Idx<T>) -> &mut T {
        &mut self.items[idx.index()]
    }

    #[inline]
    pub fn get_range(&self, range: IdxRange<T>) -> &[T] {
        let start = range.start as usize;
        &self.items[start..start + range.len()]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}
