use behave_common::{BehaveError, Status};

use crate::{Blackboard, Cursor, Node, Observer};

/// One evaluation of a tree: the blackboard plus the root cursor.
///
/// Tick until `Success` or `Failure` is returned. Ticking past that point
/// fails with [`BehaveError::TickAfterFinish`]; call [`ExecutionContext::reload`]
/// to evaluate the tree again. Dropping the context cancels the evaluation.
pub struct ExecutionContext<A> {
    root: Node<A>,
    blackboard: Blackboard<A>,
    cursor: Cursor<A>,
}

impl<A> ExecutionContext<A>
where
    A: 'static,
{
    pub fn new(root: Node<A>, args: A) -> Self {
        Self::with_observer(root, None, args)
    }

    /// Context reporting every tick of every cursor to `observer`.
    pub fn debug<O>(root: Node<A>, observer: O, args: A) -> Self
    where
        O: Observer<A> + 'static,
    {
        Self::with_observer(root, Some(Box::new(observer)), args)
    }

    fn with_observer(root: Node<A>, observer: Option<Box<dyn Observer<A>>>, args: A) -> Self {
        let mut blackboard = Blackboard::new(args, observer);
        let cursor = blackboard.new_cursor(&root);
        tracing::debug!(root = %root.name(), debug = blackboard.is_debug(), "execution context created");
        Self {
            root,
            blackboard,
            cursor,
        }
    }

    pub fn tick(&mut self) -> Result<Status, BehaveError> {
        self.cursor.tick(&mut self.blackboard)
    }

    /// Drops the cursor tree and starts a fresh evaluation with the current args.
    pub fn reload(&mut self) {
        tracing::debug!(root = %self.root.name(), "execution context reloaded");
        self.cursor = self.blackboard.new_cursor(&self.root);
    }
}

impl<A> ExecutionContext<A> {
    /// True once the root returned `Success` or `Failure`.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_finished()
    }

    pub fn root(&self) -> &Node<A> {
        &self.root
    }

    pub fn blackboard(&self) -> &Blackboard<A> {
        &self.blackboard
    }

    pub fn args(&self) -> &A {
        self.blackboard.args()
    }

    pub fn args_mut(&mut self) -> &mut A {
        self.blackboard.args_mut()
    }

    pub fn into_args(self) -> A {
        self.blackboard.into_args()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_behavior_interface::{TestShared, run_then, success};

    #[test]
    fn test_context_reload() {
        let root = success("a").then(run_then("b", 1, Status::Success));
        let mut context = ExecutionContext::new(root, TestShared::default());

        assert_eq!(context.tick(), Ok(Status::Running));
        assert_eq!(context.tick(), Ok(Status::Success));
        assert!(context.tick().is_err());

        context.reload();
        assert!(!context.is_finished());
        assert_eq!(context.tick(), Ok(Status::Running));
        assert_eq!(context.tick(), Ok(Status::Success));

        let args = context.into_args();
        assert_eq!(args.calls, vec!["a", "b", "b", "a", "b", "b"]);
    }

    #[test]
    fn test_reload_while_running() {
        let root = run_then("a", 5, Status::Success);
        let mut context = ExecutionContext::new(root, TestShared::default());

        assert_eq!(context.tick(), Ok(Status::Running));
        assert_eq!(context.tick(), Ok(Status::Running));
        context.reload();

        // The generator restarted from its first step
        for _ in 0..5 {
            assert_eq!(context.tick(), Ok(Status::Running));
        }
        assert_eq!(context.tick(), Ok(Status::Success));
    }

    #[test]
    fn test_contexts_share_one_tree() {
        let root = success("a").then(run_then("b", 1, Status::Success));
        let mut first = ExecutionContext::new(root.clone(), TestShared::default());
        let mut second = ExecutionContext::new(root, TestShared::default());

        assert_eq!(first.tick(), Ok(Status::Running));
        assert_eq!(second.tick(), Ok(Status::Running));
        assert_eq!(first.tick(), Ok(Status::Success));
        assert_eq!(second.tick(), Ok(Status::Success));

        assert_eq!(first.args().calls, second.args().calls);
        assert!(first.root().ptr_eq(second.root()));
    }
}
