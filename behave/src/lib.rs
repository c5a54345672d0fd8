pub use behave_common::*;

mod node;
pub use node::{Node, Producer, Steps, steps};

mod decorator;
pub use decorator::Decorator;

pub mod decorators;

mod blackboard;
pub use blackboard::*;

mod cursor;
pub use cursor::*;

mod context;
pub use context::*;

mod observer;
pub use observer::*;

mod state;
pub use state::*;

mod behaviortree;
pub use behaviortree::*;

// Not meant to be used externally
mod behavior_nodes;

#[cfg(test)]
mod test_behavior_interface;
