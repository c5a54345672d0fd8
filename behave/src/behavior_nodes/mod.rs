use behave_common::{BehaveError, Status};

use crate::{Blackboard, Node};

/// Per kind tick logic, dispatched by [`crate::Cursor`].
///
/// `node` is the node the cursor was built for. Implementations never see a
/// finished cursor, the caller rejects those.
pub(crate) trait NodeState<A> {
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError>;
}

// Leaf
mod action_node;
pub(crate) use action_node::*;

mod generator_node;
pub(crate) use generator_node::*;

mod condition_node;
pub(crate) use condition_node::*;

// Decorator
mod decorated_node;
pub(crate) use decorated_node::*;

// Control
mod sequence_node;
pub(crate) use sequence_node::*;

mod select_node;
pub(crate) use select_node::*;
