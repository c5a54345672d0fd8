//! Stock decorators.

use behave_common::{BehaveError, Status};

use crate::{Blackboard, Cursor, Decorator, Node};

/// Converts `Success` into `Failure` and vice versa.
pub fn invert<A: 'static>() -> Decorator<A> {
    map_status("invert", |status| match status {
        Status::Success => Status::Failure,
        Status::Failure => Status::Success,
        Status::Running => Status::Running,
    })
}

/// Ignores failures and returns `Success`.
pub fn always_succeed<A: 'static>() -> Decorator<A> {
    map_status("always_succeed", |status| match status {
        Status::Running => Status::Running,
        _ => Status::Success,
    })
}

/// Ignores successes and returns `Failure`.
pub fn always_fail<A: 'static>() -> Decorator<A> {
    map_status("always_fail", |status| match status {
        Status::Running => Status::Running,
        _ => Status::Failure,
    })
}

fn map_status<A: 'static>(name: &'static str, map: fn(Status) -> Status) -> Decorator<A> {
    Decorator::from_fn(name, move |blackboard: &mut Blackboard<A>, node: &Node<A>| {
        let mut cursor = blackboard.new_cursor(node);
        move |blackboard: &mut Blackboard<A>| -> Result<Status, BehaveError> {
            cursor.tick(blackboard).map(map)
        }
    })
}

/// Runs the wrapped node to completion `times` times in a row.
///
/// Every round starts from a fresh cursor. Fails as soon as one round fails.
/// A finished round immediately starts the next one within the same tick.
pub fn repeat<A: 'static>(times: usize) -> Decorator<A> {
    Decorator::from_fn("repeat", move |_: &mut Blackboard<A>, node: &Node<A>| {
        let node = node.clone();
        let mut completed = 0;
        let mut current: Option<Cursor<A>> = None;
        move |blackboard: &mut Blackboard<A>| -> Result<Status, BehaveError> {
            while completed < times {
                let cursor = current.get_or_insert_with(|| blackboard.new_cursor(&node));
                match cursor.tick(blackboard)? {
                    Status::Success => {
                        completed += 1;
                        current = None;
                    }
                    status => return Ok(status),
                }
            }
            Ok(Status::Success)
        }
    })
}

/// Restarts the wrapped node every time it finishes. Never finishes itself.
pub fn forever<A: 'static>() -> Decorator<A> {
    Decorator::from_fn("forever", |_: &mut Blackboard<A>, node: &Node<A>| {
        let node = node.clone();
        let mut current: Option<Cursor<A>> = None;
        move |blackboard: &mut Blackboard<A>| -> Result<Status, BehaveError> {
            let cursor = current.get_or_insert_with(|| blackboard.new_cursor(&node));
            if cursor.tick(blackboard)?.is_terminal() {
                current = None;
            }
            Ok(Status::Running)
        }
    })
}
