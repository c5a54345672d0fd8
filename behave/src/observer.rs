use behave_common::Status;

use crate::Node;

/// Taps the result of every cursor tick.
///
/// Called right after a cursor produced `status` and before it is handed to
/// the caller, children before the composite containing them. Ticks that
/// error are not reported. Any `FnMut(&Node<A>, Status)` closure is an
/// observer.
pub trait Observer<A> {
    fn observe(&mut self, node: &Node<A>, status: Status);
}

impl<A, F> Observer<A> for F
where
    F: FnMut(&Node<A>, Status),
{
    fn observe(&mut self, node: &Node<A>, status: Status) {
        self(node, status)
    }
}

/// Emits one `tracing` event per cursor tick.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    level: tracing::Level,
}

impl TraceObserver {
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new(tracing::Level::DEBUG)
    }
}

impl<A> Observer<A> for TraceObserver {
    fn observe(&mut self, node: &Node<A>, status: Status) {
        let name = node.name();
        let kind = node.node_type();
        // `tracing` needs the level at compile time
        if self.level == tracing::Level::ERROR {
            tracing::error!(node = %name, ?kind, %status, "tick");
        } else if self.level == tracing::Level::WARN {
            tracing::warn!(node = %name, ?kind, %status, "tick");
        } else if self.level == tracing::Level::INFO {
            tracing::info!(node = %name, ?kind, %status, "tick");
        } else if self.level == tracing::Level::DEBUG {
            tracing::debug!(node = %name, ?kind, %status, "tick");
        } else {
            tracing::trace!(node = %name, ?kind, %status, "tick");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use super::*;
    use crate::{
        ExecutionContext,
        test_behavior_interface::{TestShared, failure, run_then, success},
    };

    fn recorder() -> (
        Rc<RefCell<Vec<(String, Status)>>>,
        impl FnMut(&Node<TestShared>, Status),
    ) {
        let log = Rc::new(RefCell::new(vec![]));
        let sink = log.clone();
        let observer = move |node: &Node<TestShared>, status: Status| {
            sink.borrow_mut().push((node.name().into_owned(), status));
        };
        (log, observer)
    }

    #[test]
    fn test_observer_children_before_parent() {
        let root = Node::sequence([success("a"), run_then("b", 1, Status::Success)]).named("root");
        let (log, observer) = recorder();
        let mut context = ExecutionContext::debug(root, observer, TestShared::default());

        assert_eq!(context.tick(), Ok(Status::Running));
        assert_eq!(
            *log.borrow(),
            vec![
                ("a".to_string(), Status::Success),
                ("b".to_string(), Status::Running),
                ("root".to_string(), Status::Running),
            ]
        );

        log.borrow_mut().clear();
        assert_eq!(context.tick(), Ok(Status::Success));
        assert_eq!(
            *log.borrow(),
            vec![
                ("b".to_string(), Status::Success),
                ("root".to_string(), Status::Success),
            ]
        );
    }

    #[test]
    fn test_observer_does_not_alter_flow() {
        let root = Node::selector([failure("a"), success("b")]);
        let (log, observer) = recorder();
        let mut debug = ExecutionContext::debug(root.clone(), observer, TestShared::default());
        let mut plain = ExecutionContext::new(root, TestShared::default());

        assert_eq!(debug.tick(), plain.tick());
        assert_eq!(debug.args().calls, plain.args().calls);
        assert_eq!(log.borrow().len(), 3);
        assert!(debug.blackboard().is_debug());
        assert!(!plain.blackboard().is_debug());
    }

    #[test]
    fn test_observer_skips_errors() {
        let root = Node::sequence([success("a")]);
        let (log, observer) = recorder();
        let mut context = ExecutionContext::debug(root, observer, TestShared::default());

        assert_eq!(context.tick(), Ok(Status::Success));
        assert!(context.tick().is_err());
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_trace_observer() {
        let _ignore = tracing_subscriber::Registry::default()
            .with(tracing_forest::ForestLayer::default())
            .try_init();

        let root = Node::sequence([success("a"), failure("b")]);
        let mut context = ExecutionContext::debug(root, TraceObserver::default(), TestShared::default());
        assert_eq!(context.tick(), Ok(Status::Failure));

        let root = Node::sequence([success("a")]);
        let observer = TraceObserver::new(tracing::Level::TRACE);
        let mut context = ExecutionContext::debug(root, observer, TestShared::default());
        assert_eq!(context.tick(), Ok(Status::Success));
    }
}
