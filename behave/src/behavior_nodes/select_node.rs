use std::rc::Rc;

use behave_common::{BehaveError, Status};

use crate::{Blackboard, Cursor, Node, behavior_nodes::NodeState};

/// Cursor state of a selector, see [`super::SequenceState`].
pub(crate) struct SelectState<A> {
    children: Rc<[Node<A>]>,
    index: usize,
    current: Option<Box<Cursor<A>>>,
}

impl<A> SelectState<A> {
    pub fn new(children: Rc<[Node<A>]>) -> Self {
        Self {
            children,
            index: 0,
            current: None,
        }
    }
}

impl<A> NodeState<A> for SelectState<A>
where
    A: 'static,
{
    #[tracing::instrument(level = "trace", name = "Select::tick", skip_all, fields(node = %node.name()), ret, err)]
    fn tick(&mut self, node: &Node<A>, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        loop {
            // Every child failed
            let Some(child) = self.children.get(self.index) else {
                return Ok(Status::Failure);
            };
            let cursor = self
                .current
                .get_or_insert_with(|| Box::new(blackboard.new_cursor(child)));
            match cursor.tick(blackboard)? {
                Status::Failure => {
                    self.index += 1;
                    self.current = None;
                }
                status => return Ok(status),
            }
        }
    }
}
