use behave_common::{BehaveError, Status};

use crate::{Blackboard, Node, behavior_nodes::NodeState, decorator::DecoratorTick};

/// Holds the tick function returned by the decorator factory.
pub(crate) struct DecoratedState<A> {
    tick: DecoratorTick<A>,
}

impl<A> DecoratedState<A> {
    pub fn new(tick: DecoratorTick<A>) -> Self {
        Self { tick }
    }
}

impl<A> NodeState<A> for DecoratedState<A> {
    #[tracing::instrument(level = "trace", name = "Decorated::tick", skip_all, fields(node = %node.name()), ret, err)]
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        match (self.tick)(blackboard)? {
            Ok(status) => Ok(status.unwrap_or(Status::Success)),
            Err(invalid) => Err(BehaveError::decorator_contract_violation(node.name(), invalid)),
        }
    }
}
