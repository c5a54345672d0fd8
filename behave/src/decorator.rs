use std::{borrow::Cow, rc::Rc};

use behave_common::{BehaveError, IntoStatus, Status};

use crate::{Blackboard, Node, node::Reply};

/// The tick function a decorator factory hands back to its cursor.
pub(crate) type DecoratorTick<A> = Box<dyn FnMut(&mut Blackboard<A>) -> Result<Reply, BehaveError>>;
pub(crate) type DecoratorFn<A> = dyn Fn(&mut Blackboard<A>, &Node<A>) -> DecoratorTick<A>;

/// One named decorator factory.
pub(crate) struct DecoratorEntry<A> {
    name: Cow<'static, str>,
    factory: Rc<DecoratorFn<A>>,
}

impl<A> Clone for DecoratorEntry<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<A> DecoratorEntry<A> {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Calls the factory, done once per cursor.
    pub(crate) fn instantiate(&self, blackboard: &mut Blackboard<A>, node: &Node<A>) -> DecoratorTick<A> {
        (self.factory)(blackboard, node)
    }
}

/// An ordered list of decorator factories.
///
/// A factory receives the blackboard and the wrapped node when the decorated
/// node is entered, and returns the tick function used for every tick of
/// that cursor. The tick function decides alone if and how the wrapped
/// node's own cursor (see [`Blackboard::new_cursor`]) is ticked, retried or
/// abandoned.
pub struct Decorator<A> {
    entries: Vec<DecoratorEntry<A>>,
}

impl<A> Clone for Decorator<A> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<A> Decorator<A>
where
    A: 'static,
{
    /// Single decorator built from a factory.
    ///
    /// The tick function follows the [`IntoStatus`] contract, the absence
    /// value means `Success`. Errors it returns, typically from ticking the
    /// wrapped node, propagate unchanged.
    pub fn from_fn<F, T, R>(name: impl Into<Cow<'static, str>>, factory: F) -> Self
    where
        F: Fn(&mut Blackboard<A>, &Node<A>) -> T + 'static,
        T: FnMut(&mut Blackboard<A>) -> Result<R, BehaveError> + 'static,
        R: IntoStatus,
    {
        let factory = move |blackboard: &mut Blackboard<A>, node: &Node<A>| -> DecoratorTick<A> {
            let mut tick = factory(blackboard, node);
            Box::new(move |blackboard: &mut Blackboard<A>| {
                tick(blackboard).map(IntoStatus::into_status)
            })
        };
        Self::single(name, factory)
    }

    /// Single decorator whose body is a lazy sequence of replies.
    ///
    /// `factory` builds a stepper when the decorated node is entered, every
    /// tick pulls one element. `Ok(Some(reply))` follows the same contract
    /// as [`Decorator::from_fn`] replies, `Ok(None)` ends the sequence and
    /// means `Success`.
    pub fn from_generator<F, P, R>(name: impl Into<Cow<'static, str>>, factory: F) -> Self
    where
        F: Fn(&mut Blackboard<A>, &Node<A>) -> P + 'static,
        P: FnMut(&mut Blackboard<A>) -> Result<Option<R>, BehaveError> + 'static,
        R: IntoStatus,
    {
        let factory = move |blackboard: &mut Blackboard<A>, node: &Node<A>| -> DecoratorTick<A> {
            let mut step = factory(blackboard, node);
            Box::new(move |blackboard: &mut Blackboard<A>| -> Result<Reply, BehaveError> {
                Ok(match step(blackboard)? {
                    Some(reply) => reply.into_status(),
                    None => Ok(Some(Status::Success)),
                })
            })
        };
        Self::single(name, factory)
    }

    fn single<F>(name: impl Into<Cow<'static, str>>, factory: F) -> Self
    where
        F: Fn(&mut Blackboard<A>, &Node<A>) -> DecoratorTick<A> + 'static,
    {
        Self {
            entries: vec![DecoratorEntry {
                name: name.into(),
                factory: Rc::new(factory),
            }],
        }
    }

    /// Concatenates two decorator lists, `self` first.
    pub fn chain(mut self, other: Decorator<A>) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Wraps `node` with every entry, the first entry ends up outermost.
    pub fn apply(&self, node: Node<A>) -> Node<A> {
        self.entries
            .iter()
            .rev()
            .fold(node, |node, entry| Node::decorated_with(entry.clone(), node))
    }
}

impl<A> Decorator<A> {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
