use crate::ast::Expr;

/// Handle to an expression node stored in an [`Arena`].
///
/// A handle remembers the arena generation it was allocated in, so a handle
/// that outlives [`Arena::release`] no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId {
    index:      u32,
    generation: u32,
}

impl ExprId {
    /// Position of the node inside its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

/// Growable bulk storage for the nodes of one parse session.
///
/// Nodes are appended by [`Arena::alloc`] and dropped all at once by
/// [`Arena::release`].
///
/// ## Example
/// ```
/// use calx::ast::{Arena, Expr};
///
/// let mut arena = Arena::new();
/// let id = arena.alloc(Expr::Real(2.0));
/// assert_eq!(arena.get(id), Some(&Expr::Real(2.0)));
///
/// arena.release();
/// assert!(arena.get(id).is_none());
/// ```
#[derive(Debug, Default)]
pub struct Arena {
    nodes:      Vec<Expr>,
    generation: u32,
}

impl Arena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its handle.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.nodes.len()).expect("expression arena exhausted");
        self.nodes.push(expr);
        ExprId { index,
                 generation: self.generation }
    }

    /// Looks up a node. Returns `None` for a handle from a released
    /// generation.
    #[must_use]
    pub fn get(&self, id: ExprId) -> Option<&Expr> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Drops every node at once and invalidates all outstanding handles.
    pub fn release(&mut self) {
        log::debug!("releasing {} expression nodes", self.nodes.len());
        self.nodes.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no nodes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
