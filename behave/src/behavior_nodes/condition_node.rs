use std::rc::Rc;

use behave_common::{BehaveError, Status};

use crate::{
    Blackboard, Node,
    behavior_nodes::NodeState,
    node::ConditionFn,
};

pub(crate) struct ConditionState<A> {
    func: Rc<ConditionFn<A>>,
}

impl<A> ConditionState<A> {
    pub fn new(func: Rc<ConditionFn<A>>) -> Self {
        Self { func }
    }
}

impl<A> NodeState<A> for ConditionState<A> {
    // Never `Running`, a condition cursor is finished after its first tick
    #[tracing::instrument(level = "trace", name = "Condition::tick", skip_all, fields(node = %node.name()), ret, err)]
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        Ok(Status::from((self.func)(blackboard.args_mut())))
    }
}
