use behave_common::{BehaveError, Status};

use crate::{
    Blackboard, Node,
    behavior_nodes::{
        ActionState, ConditionState, DecoratedState, GeneratorState, NodeState, SelectState,
        SequenceState,
    },
    node::NodeKind,
};

/// Resumable execution state of one node within one evaluation.
///
/// Returning `Running` keeps all progress inside the cursor, the next
/// [`Cursor::tick`] resumes where the last one stopped. Once `Success` or
/// `Failure` was returned, or a tick failed with an error, the cursor is
/// finished and every further tick fails with [`BehaveError::TickAfterFinish`].
pub struct Cursor<A> {
    node: Node<A>,
    state: CursorState<A>,
    finished: bool,
}

enum CursorState<A> {
    Action(ActionState<A>),
    Generator(GeneratorState<A>),
    Condition(ConditionState<A>),
    Sequence(SequenceState<A>),
    Select(SelectState<A>),
    Decorated(DecoratedState<A>),
}

impl<A> Cursor<A>
where
    A: 'static,
{
    pub(crate) fn new(blackboard: &mut Blackboard<A>, node: &Node<A>) -> Self {
        let state = match node.kind() {
            NodeKind::Action(func) => CursorState::Action(ActionState::new(func.clone())),
            NodeKind::GeneratorAction(genfunc) => {
                CursorState::Generator(GeneratorState::new(genfunc(blackboard.args_mut())))
            }
            NodeKind::Condition(func) => CursorState::Condition(ConditionState::new(func.clone())),
            NodeKind::Sequence(children) => {
                CursorState::Sequence(SequenceState::new(children.clone()))
            }
            NodeKind::Selector(children) => CursorState::Select(SelectState::new(children.clone())),
            NodeKind::Decorated { decorator, node } => {
                CursorState::Decorated(DecoratedState::new(decorator.instantiate(blackboard, node)))
            }
        };
        Self {
            node: node.clone(),
            state,
            finished: false,
        }
    }

    pub fn tick(&mut self, blackboard: &mut Blackboard<A>) -> Result<Status, BehaveError> {
        if self.finished {
            return Err(BehaveError::tick_after_finish(self.node.name()));
        }

        let node = &self.node;
        let result = match &mut self.state {
            CursorState::Action(state) => state.tick(node, blackboard),
            CursorState::Generator(state) => state.tick(node, blackboard),
            CursorState::Condition(state) => state.tick(node, blackboard),
            CursorState::Sequence(state) => state.tick(node, blackboard),
            CursorState::Select(state) => state.tick(node, blackboard),
            CursorState::Decorated(state) => state.tick(node, blackboard),
        };
        // Errors are fatal, the evaluation can not be resumed past them
        let status = result.inspect_err(|_| self.finished = true)?;

        self.finished = status.is_terminal();
        blackboard.notify(node, status);
        Ok(status)
    }
}

impl<A> Cursor<A> {
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn node(&self) -> &Node<A> {
        &self.node
    }
}
