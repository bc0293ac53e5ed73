//! Stack growth for the recursive parser and evaluator.
//!
//! Both phases recurse once per nesting level of the source program, and
//! the evaluator additionally recurses once per closure call. Program depth
//! is bounded by the arena (every node and every call frame is charged to
//! it), never by the native stack: recursive entry points call
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when the current one runs low.
//!
//! On `wasm32` there is no way to switch stacks, so the guard just calls
//! through.

/// Grow when less than this much stack is left (128 KiB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2 MiB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one has
/// less than the red zone left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;

    /// Nested `{+ 1 {+ 1 ...}}`-shaped recursion.
    fn nested_sum(depth: u32) -> f64 {
        ensure_sufficient_stack(|| {
            if depth == 0 {
                0.0
            } else {
                1.0 + nested_sum(depth - 1)
            }
        })
    }

    #[test]
    fn test_result_passes_through() {
        assert_eq!(ensure_sufficient_stack(|| "value"), "value");
    }

    #[test]
    fn test_shallow_nesting() {
        assert!((nested_sum(16) - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        // Far beyond what a default 2 MiB test thread could hold unaided.
        assert!((nested_sum(200_000) - 200_000.0).abs() < f64::EPSILON);
    }
}
