//! Byte cursor with line/column tracking.
//!
//! Reading past the end yields `0`. A `0` byte inside the source is not a
//! terminator; use [`Cursor::is_eof`] to tell the two apart.

use sheq_ir::Location;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Source length must fit in `u32`; the lexer checks this up front.
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Cursor {
            bytes,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.bytes.get(pos).copied().unwrap_or(0)
    }

    /// Byte at the current position, `0` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Byte after the current one, `0` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos as usize >= self.bytes.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Step over one byte. A newline moves to column 1 of the next line.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Skip ordinary string content up to the next `"`, `\` or newline.
    ///
    /// Returns the byte found, or `0` at end of input. Newlines are left for
    /// [`advance`](Self::advance) so line tracking stays in one place.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source length, which fits in u32"
    )]
    pub(crate) fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.bytes[self.pos as usize..];
        match memchr::memchr3(b'"', b'\\', b'\n', remaining) {
            Some(offset) => {
                self.pos += offset as u32;
                self.column += offset as u32;
                self.current()
            }
            None => {
                let rest = remaining.len() as u32;
                self.pos += rest;
                self.column += rest;
                0
            }
        }
    }
}
