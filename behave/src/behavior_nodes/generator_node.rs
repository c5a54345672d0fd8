use behave_common::{BehaveError, Status};

use crate::{
    Blackboard, Node,
    behavior_nodes::NodeState,
    node::Step,
};

/// Holds the producer of a generator action.
///
/// The producer is created once with the cursor and never restarted, so its
/// own position is the suspension point.
pub(crate) struct GeneratorState<A> {
    step: Step<A>,
}

impl<A> GeneratorState<A> {
    pub fn new(step: Step<A>) -> Self {
        Self { step }
    }
}

impl<A> NodeState<A> for GeneratorState<A> {
    #[tracing::instrument(level = "trace", name = "GeneratorAction::tick", skip_all, fields(node = %node.name()), ret, err)]
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        match (self.step)(blackboard.args_mut()) {
            // Exhausted
            None => Ok(Status::Success),
            Some(Ok(status)) => Ok(status.unwrap_or(Status::Running)),
            Some(Err(invalid)) => Err(BehaveError::invalid_status(node.name(), invalid)),
        }
    }
}
