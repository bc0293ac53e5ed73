//! Lexical environment.
//!
//! Frames form a parent-linked chain ending at the global frame. Each
//! frame's bindings are a singly-linked list with the most recent binding
//! at the head. Lookup walks frames innermost first and, within a frame,
//! bindings head first; the first match wins.
//!
//! Frames and bindings are pool records charged to the arena. A frame's
//! parent always exists before the frame does, so the chain cannot cycle.

use sheq_ir::{Arena, ArenaError, Idx, Name, Pool};

use crate::value::Value;

/// Handle to an environment frame.
pub type FrameId = Idx<Frame>;

type BindingId = Idx<Binding>;

/// One scope.
#[derive(Copy, Clone, Debug)]
pub struct Frame {
    parent: Option<FrameId>,
    head: Option<BindingId>,
}

#[derive(Copy, Clone, Debug)]
struct Binding {
    name: Name,
    value: Value,
    next: Option<BindingId>,
}

/// Storage for every frame of one evaluation.
#[derive(Default)]
pub struct Environment {
    frames: Pool<Frame>,
    bindings: Pool<Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame.
    pub fn create(
        &mut self,
        arena: &mut Arena,
        parent: Option<FrameId>,
    ) -> Result<FrameId, ArenaError> {
        self.frames.alloc(arena, Frame { parent, head: None })
    }

    /// Add a binding at the head of `frame`.
    ///
    /// Used to populate a frame that is still being built; a frame that a
    /// closure has captured is never extended this way.
    pub fn bind(
        &mut self,
        arena: &mut Arena,
        frame: FrameId,
        name: Name,
        value: Value,
    ) -> Result<(), ArenaError> {
        let next = self.frames.get(frame).head;
        let binding = self.bindings.alloc(arena, Binding { name, value, next })?;
        self.frames.get_mut(frame).head = Some(binding);
        Ok(())
    }

    /// Create a frame under `parent` binding `names[i]` to `values[i]`.
    ///
    /// Bindings are added back to front so `names[0]` ends up at the head.
    pub fn extend(
        &mut self,
        arena: &mut Arena,
        parent: FrameId,
        names: &[Name],
        values: &[Value],
    ) -> Result<FrameId, ArenaError> {
        debug_assert_eq!(names.len(), values.len(), "arity is checked by the caller");
        let frame = self.create(arena, Some(parent))?;
        for (&name, &value) in names.iter().zip(values).rev() {
            self.bind(arena, frame, name, value)?;
        }
        Ok(frame)
    }

    /// Look `name` up starting at `frame`.
    pub fn resolve(&self, frame: FrameId, name: Name) -> Option<Value> {
        let mut current = Some(frame);
        while let Some(id) = current {
            let frame = self.frames.get(id);
            let mut binding = frame.head;
            while let Some(b) = binding {
                let b = self.bindings.get(b);
                if b.name == name {
                    return Some(b.value);
                }
                binding = b.next;
            }
            current = frame.parent;
        }
        None
    }

    /// Enclosing frame, `None` for the global frame.
    pub fn parent(&self, frame: FrameId) -> Option<FrameId> {
        self.frames.get(frame).parent
    }

    /// Names bound directly in `frame`, head first.
    pub fn names(&self, frame: FrameId) -> Vec<Name> {
        let mut out = Vec::new();
        let mut binding = self.frames.get(frame).head;
        while let Some(b) = binding {
            let b = self.bindings.get(b);
            out.push(b.name);
            binding = b.next;
        }
        out
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}
