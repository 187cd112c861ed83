//! A high-water-mark tracker for the engine's rule-call depth.
//!
//! Ported from a GraphQL-specific recursion-limit utility and generalized:
//! there the limit only guarded nested selection sets; here it guards
//! every `Engine::rule` call, since any recursive-descent rule
//! (`MemberExpression`, `ParenthesizedExpression`, ...) can recurse on
//! adversarial input.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitTracker {
    current: usize,
    /// High water mark reached over the tracker's lifetime.
    pub high: usize,
    pub limit: usize,
}

impl Default for LimitTracker {
    fn default() -> Self {
        // Chosen to stay well clear of a debug-build stack overflow while
        // still accommodating realistically nested source.
        Self::new(500)
    }
}

impl LimitTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            current: 0,
            high: 0,
            limit,
        }
    }

    pub fn enter(&mut self) -> bool {
        self.current += 1;
        if self.current > self.high {
            self.high = self.current;
        }
        self.current <= self.limit
    }

    pub fn exit(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}

impl fmt::Display for LimitTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recursion limit: {}, high water mark: {}", self.limit, self.high)
    }
}
