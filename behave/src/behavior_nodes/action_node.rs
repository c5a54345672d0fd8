use std::rc::Rc;

use behave_common::{BehaveError, Status};

use crate::{
    Blackboard, Node,
    behavior_nodes::NodeState,
    node::ActionFn,
};

pub(crate) struct ActionState<A> {
    func: Rc<ActionFn<A>>,
}

impl<A> ActionState<A> {
    pub fn new(func: Rc<ActionFn<A>>) -> Self {
        Self { func }
    }
}

impl<A> NodeState<A> for ActionState<A> {
    #[tracing::instrument(level = "trace", name = "Action::tick", skip_all, fields(node = %node.name()), ret, err)]
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        match (self.func)(blackboard.args_mut()) {
            Ok(status) => Ok(status.unwrap_or(Status::Success)),
            Err(invalid) => Err(BehaveError::invalid_status(node.name(), invalid)),
        }
    }
}
