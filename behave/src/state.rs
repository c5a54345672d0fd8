use std::collections::HashMap;

use behave_common::{NodeType, Status};

use crate::{Node, Observer};

type StatusSender = tokio::sync::watch::Sender<Option<Status>>;
type StatusReceiver = tokio::sync::watch::Receiver<Option<Status>>;

/// Live view of the latest status of every node in a tree.
///
/// Mirrors the node tree. Each entry holds the receiving end of a watch
/// channel fed by the [`StateWatcher`] installed on the context.
#[derive(Debug, Clone)]
pub enum State {
    /// Leaf nodes
    NoChild(String, NodeType, StatusReceiver),
    /// Decorated nodes
    SingleChild(String, NodeType, StatusReceiver, Box<State>),
    /// Control nodes
    MultipleChildren(String, NodeType, StatusReceiver, Vec<State>),
}

impl State {
    pub fn name(&self) -> &str {
        match self {
            State::NoChild(name, ..)
            | State::SingleChild(name, ..)
            | State::MultipleChildren(name, ..) => name,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            State::NoChild(_, node_type, _)
            | State::SingleChild(_, node_type, ..)
            | State::MultipleChildren(_, node_type, ..) => *node_type,
        }
    }

    /// Latest status, `None` until the node was ticked.
    pub fn status(&self) -> Option<Status> {
        match self {
            State::NoChild(_, _, status)
            | State::SingleChild(_, _, status, _)
            | State::MultipleChildren(_, _, status, _) => *status.borrow(),
        }
    }

    pub fn children(&self) -> &[State] {
        match self {
            State::NoChild(..) => &[],
            State::SingleChild(.., child) => std::slice::from_ref(child.as_ref()),
            State::MultipleChildren(.., children) => children,
        }
    }

    /// Point in time copy of the whole state tree.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            name: self.name().to_string(),
            node_type: self.node_type(),
            status: self.status(),
            children: self.children().iter().map(State::snapshot).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StateSnapshot {
    pub name: String,
    pub node_type: NodeType,
    pub status: Option<Status>,
    pub children: Vec<StateSnapshot>,
}

/// Observer publishing statuses into the channels of a [`State`] tree.
///
/// Nodes are matched by identity, a node definition used at several places
/// of the tree feeds every matching entry.
#[derive(Debug, Default)]
pub struct StateWatcher {
    senders: HashMap<usize, Vec<StatusSender>>,
}

impl StateWatcher {
    pub fn new<A>(root: &Node<A>) -> (Self, State) {
        let mut watcher = Self::default();
        let state = watcher.register(root);
        (watcher, state)
    }

    fn register<A>(&mut self, node: &Node<A>) -> State {
        let (tx, rx) = tokio::sync::watch::channel(None);
        self.senders.entry(node.id()).or_default().push(tx);

        let name = node.name().into_owned();
        let node_type = node.node_type();
        match node.children() {
            [child] if node_type == NodeType::Decorated => {
                State::SingleChild(name, node_type, rx, Box::new(self.register(child)))
            }
            children if node_type.is_composite() => {
                let children = children.iter().map(|child| self.register(child)).collect();
                State::MultipleChildren(name, node_type, rx, children)
            }
            _ => State::NoChild(name, node_type, rx),
        }
    }

    /// Resets every entry to `None`, e.g. before a reload.
    pub fn clear(&self) {
        self.senders.values().flatten().for_each(|status| {
            status.send_replace(None);
        });
    }
}

impl<A> Observer<A> for StateWatcher {
    fn observe(&mut self, node: &Node<A>, status: Status) {
        if let Some(senders) = self.senders.get(&node.id()) {
            senders.iter().for_each(|sender| {
                sender.send_replace(Some(status));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use super::*;
    use crate::{
        ExecutionContext, decorators,
        test_behavior_interface::{TestShared, failure, run_then, success},
    };

    #[test]
    fn test_state_tracks_ticks() {
        let _ignore = tracing_subscriber::Registry::default()
            .with(tracing_forest::ForestLayer::default())
            .try_init();

        let root = Node::sequence([
            success("a"),
            run_then("b", 1, Status::Success).decorate(&decorators::invert()),
            failure("c"),
        ]);
        let (watcher, state) = StateWatcher::new(&root);
        let mut context = ExecutionContext::debug(root, watcher, TestShared::default());

        assert_eq!(state.status(), None);
        assert_eq!(state.children().len(), 3);
        assert_eq!(state.children()[1].name(), "invert*b");

        assert_eq!(context.tick(), Ok(Status::Running));
        tracing::info!("State: {state:?}");
        assert_eq!(state.status(), Some(Status::Running));
        assert_eq!(state.children()[0].status(), Some(Status::Success));
        assert_eq!(state.children()[1].status(), Some(Status::Running));
        assert_eq!(state.children()[1].children()[0].status(), Some(Status::Running));
        assert_eq!(state.children()[2].status(), None);

        // b succeeds, invert turns it into a failure, c is never entered
        assert_eq!(context.tick(), Ok(Status::Failure));
        assert_eq!(state.status(), Some(Status::Failure));
        assert_eq!(state.children()[1].children()[0].status(), Some(Status::Success));
        assert_eq!(state.children()[1].status(), Some(Status::Failure));
        assert_eq!(state.children()[2].status(), None);
    }

    #[test]
    fn test_state_snapshot_serializes() {
        let root = Node::selector([failure("a"), success("b")]).named("root");
        let (watcher, state) = StateWatcher::new(&root);
        let mut context = ExecutionContext::debug(root, watcher, TestShared::default());
        assert_eq!(context.tick(), Ok(Status::Success));

        let snapshot = state.snapshot();
        let data = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            data,
            serde_json::json!({
                "name": "root",
                "node_type": "Selector",
                "status": "Success",
                "children": [
                    {"name": "a", "node_type": "Action", "status": "Failure", "children": []},
                    {"name": "b", "node_type": "Action", "status": "Success", "children": []},
                ]
            })
        );

        let back: StateSnapshot = serde_json::from_value(data).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_state_clear() {
        let root = success("a");
        let (mut watcher, state) = StateWatcher::new(&root);

        Observer::<TestShared>::observe(&mut watcher, &root, Status::Success);
        assert_eq!(state.status(), Some(Status::Success));

        watcher.clear();
        assert_eq!(state.status(), None);
    }

    #[test]
    fn test_state_shape_follows_node_kind() {
        let root = Node::selector([
            Node::sequence([]),
            success("a").decorate(&decorators::invert()),
        ]);
        let (_watcher, state) = StateWatcher::new(&root);

        assert!(matches!(state, State::MultipleChildren(..)));
        // An empty composite is still a composite
        assert!(matches!(
            &state.children()[0],
            State::MultipleChildren(_, NodeType::Sequence, _, children) if children.is_empty()
        ));
        assert!(matches!(&state.children()[1], State::SingleChild(..)));
        assert!(matches!(
            &state.children()[1].children()[0],
            State::NoChild(_, NodeType::Action, _)
        ));
    }
}
