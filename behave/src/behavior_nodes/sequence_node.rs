use std::rc::Rc;

use behave_common::{BehaveError, Status};

use crate::{Blackboard, Cursor, Node, behavior_nodes::NodeState};

/// Cursor state of a sequence: the current child index and the cursor of
/// that child, created the first time the child is reached.
pub(crate) struct SequenceState<A> {
    children: Rc<[Node<A>]>,
    index: usize,
    current: Option<Box<Cursor<A>>>,
}

impl<A> SequenceState<A> {
    pub fn new(children: Rc<[Node<A>]>) -> Self {
        Self {
            children,
            index: 0,
            current: None,
        }
    }
}

impl<A> NodeState<A> for SequenceState<A>
where
    A: 'static,
{
    #[tracing::instrument(level = "trace", name = "Sequence::tick", skip_all, fields(node = %node.name()), ret, err)]
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        // A succeeding child hands over to the next one within the same tick
        loop {
            let Some(child) = self.children.get(self.index) else {
                return Ok(Status::Success);
            };
            let cursor = self
                .current
                .get_or_insert_with(|| Box::new(blackboard.new_cursor(child)));
            match cursor.tick(blackboard)? {
                Status::Success => {
                    self.index += 1;
                    self.current = None;
                }
                status => return Ok(status),
            }
        }
    }
}
