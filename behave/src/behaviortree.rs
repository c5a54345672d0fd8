use behave_common::{BehaveError, Status};

use crate::{ExecutionContext, Node, Observer};

/// What [`BehaviorTree::tick`] does once the tree completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BehaviorTreePolicy {
    /// Resets/Reloads the behavior tree once it is completed
    ReloadOnCompletion,
    /// On completion, needs manual reset
    #[default]
    RetainOnCompletion,
}

/// Drives an [`ExecutionContext`] once per frame/step.
pub struct BehaviorTree<A> {
    context: ExecutionContext<A>,
    policy: BehaviorTreePolicy,
    status: Option<Status>,
}

impl<A> BehaviorTree<A>
where
    A: 'static,
{
    pub fn new(root: Node<A>, policy: BehaviorTreePolicy, args: A) -> Self {
        Self::from_context(ExecutionContext::new(root, args), policy)
    }

    pub fn debug<O>(root: Node<A>, policy: BehaviorTreePolicy, observer: O, args: A) -> Self
    where
        O: Observer<A> + 'static,
    {
        Self::from_context(ExecutionContext::debug(root, observer, args), policy)
    }

    pub fn from_context(context: ExecutionContext<A>, policy: BehaviorTreePolicy) -> Self {
        Self {
            context,
            policy,
            status: None,
        }
    }

    #[tracing::instrument(level = "trace", name = "BehaviorTree::tick", skip(self), ret, err)]
    pub fn tick(&mut self) -> Result<Status, BehaveError> {
        if let Some(status) = self.status.filter(|status| status.is_terminal()) {
            match self.policy {
                BehaviorTreePolicy::ReloadOnCompletion => self.reset(),
                // `status` returns the already completed value
                BehaviorTreePolicy::RetainOnCompletion => return Ok(status),
            }
        }

        let status = self.context.tick()?;
        self.status = Some(status);
        Ok(status)
    }

    /// Abandons the current evaluation, the next tick starts from the root.
    #[tracing::instrument(level = "trace", name = "BehaviorTree::reset", skip(self))]
    pub fn reset(&mut self) {
        self.context.reload();
        self.status = None;
    }
}

impl<A> BehaviorTree<A> {
    /// `None` until the first successful tick.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn policy(&self) -> BehaviorTreePolicy {
        self.policy
    }

    pub fn context(&self) -> &ExecutionContext<A> {
        &self.context
    }

    pub fn args(&self) -> &A {
        self.context.args()
    }

    pub fn args_mut(&mut self) -> &mut A {
        self.context.args_mut()
    }
}
