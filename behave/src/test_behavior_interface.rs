use behave_common::Status;

use crate::Node;

/// Run arguments of the unit tests, every test leaf logs its name on each tick.
#[derive(Debug, Default)]
pub struct TestShared {
    pub calls: Vec<&'static str>,
}

pub fn success(name: &'static str) -> Node<TestShared> {
    Node::action(move |shared: &mut TestShared| {
        shared.calls.push(name);
        Status::Success
    })
    .named(name)
}

pub fn failure(name: &'static str) -> Node<TestShared> {
    Node::action(move |shared: &mut TestShared| {
        shared.calls.push(name);
        Status::Failure
    })
    .named(name)
}

/// Returns `Running` `times` times, then `output`.
pub fn run_then(name: &'static str, times: usize, output: Status) -> Node<TestShared> {
    Node::generator(move |_: &mut TestShared| {
        let mut remaining = times;
        move |shared: &mut TestShared| {
            shared.calls.push(name);
            if remaining == 0 {
                return Some(output);
            }
            remaining -= 1;
            Some(Status::Running)
        }
    })
    .named(name)
}

/// Panics as soon as a cursor is created for it.
pub fn spy(name: &'static str) -> Node<TestShared> {
    Node::generator(move |_: &mut TestShared| -> fn(&mut TestShared) -> Option<Status> {
        panic!("{name} must never be entered")
    })
    .named(name)
}
