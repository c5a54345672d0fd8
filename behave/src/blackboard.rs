use behave_common::Status;

use crate::{Cursor, Node, Observer};

/// Run scoped state shared by every cursor of one evaluation.
///
/// Owns the run arguments handed to every leaf and is the only place cursors
/// are created. With an observer installed, every cursor reports each
/// completed tick to it.
pub struct Blackboard<A> {
    args: A,
    observer: Option<Box<dyn Observer<A>>>,
}

impl<A> Blackboard<A>
where
    A: 'static,
{
    pub(crate) fn new(args: A, observer: Option<Box<dyn Observer<A>>>) -> Self {
        Self { args, observer }
    }

    /// Builds the cursor for `node`.
    ///
    /// Generator producers are instantiated and decorator factories called
    /// here, once per cursor.
    pub fn new_cursor(&mut self, node: &Node<A>) -> Cursor<A> {
        Cursor::new(self, node)
    }
}

impl<A> Blackboard<A> {
    pub fn args(&self) -> &A {
        &self.args
    }

    pub fn args_mut(&mut self) -> &mut A {
        &mut self.args
    }

    pub(crate) fn into_args(self) -> A {
        self.args
    }

    pub fn is_debug(&self) -> bool {
        self.observer.is_some()
    }

    pub(crate) fn notify(&mut self, node: &Node<A>, status: Status) {
        if let Some(observer) = self.observer.as_mut() {
            observer.observe(node, status);
        }
    }
}
