use std::{borrow::Cow, fmt, rc::Rc};

use behave_common::{InvalidValue, IntoStatus, NodeType, Status};

use crate::{Decorator, decorator::DecoratorEntry};

/// Result of converting a leaf reply, `Ok(None)` is the absence value.
pub(crate) type Reply = Result<Option<Status>, InvalidValue>;

pub(crate) type ActionFn<A> = dyn Fn(&mut A) -> Reply;
pub(crate) type ConditionFn<A> = dyn Fn(&mut A) -> bool;

/// One resumable producer, instantiated once per cursor.
/// `None` marks the end of the sequence.
pub(crate) type Step<A> = Box<dyn FnMut(&mut A) -> Option<Reply>>;
pub(crate) type GeneratorFn<A> = dyn Fn(&mut A) -> Step<A>;

/// A lazy, stateful sequence of leaf replies driven one element per tick.
///
/// Closures `FnMut(&mut A) -> Option<R>` are producers, iterators can be
/// turned into one with [`steps`].
pub trait Producer<A> {
    type Item: IntoStatus;

    /// Pulls the next element, `None` once the sequence is exhausted.
    fn resume(&mut self, args: &mut A) -> Option<Self::Item>;
}

impl<A, F, R> Producer<A> for F
where
    F: FnMut(&mut A) -> Option<R>,
    R: IntoStatus,
{
    type Item = R;

    fn resume(&mut self, args: &mut A) -> Option<R> {
        self(args)
    }
}

/// Producer over a plain iterator. The run arguments are not visible to it.
pub struct Steps<I>(I);

impl<A, I> Producer<A> for Steps<I>
where
    I: Iterator,
    I::Item: IntoStatus,
{
    type Item = I::Item;

    fn resume(&mut self, _args: &mut A) -> Option<I::Item> {
        self.0.next()
    }
}

pub fn steps<I>(iter: I) -> Steps<I::IntoIter>
where
    I: IntoIterator,
{
    Steps(iter.into_iter())
}

/// Describes one point of a behavior tree.
///
/// Nodes are immutable and hold no execution state, so one tree can be
/// evaluated by any number of [`crate::ExecutionContext`]s. Cloning is cheap:
/// child lists are frozen once attached and shared between clones. Builder
/// methods such as [`Node::then`] always return a new node.
pub struct Node<A>(Rc<NodeData<A>>);

struct NodeData<A> {
    name: Option<Cow<'static, str>>,
    desc: Option<String>,
    kind: NodeKind<A>,
}

pub(crate) enum NodeKind<A> {
    Action(Rc<ActionFn<A>>),
    GeneratorAction(Rc<GeneratorFn<A>>),
    Condition(Rc<ConditionFn<A>>),
    Sequence(Rc<[Node<A>]>),
    Selector(Rc<[Node<A>]>),
    Decorated {
        decorator: DecoratorEntry<A>,
        node: Node<A>,
    },
}

impl<A> Clone for NodeKind<A> {
    fn clone(&self) -> Self {
        match self {
            NodeKind::Action(func) => NodeKind::Action(func.clone()),
            NodeKind::GeneratorAction(genfunc) => NodeKind::GeneratorAction(genfunc.clone()),
            NodeKind::Condition(func) => NodeKind::Condition(func.clone()),
            NodeKind::Sequence(children) => NodeKind::Sequence(children.clone()),
            NodeKind::Selector(children) => NodeKind::Selector(children.clone()),
            NodeKind::Decorated { decorator, node } => NodeKind::Decorated {
                decorator: decorator.clone(),
                node: node.clone(),
            },
        }
    }
}

impl<A> Clone for Node<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> Node<A>
where
    A: 'static,
{
    /// Leaf running `func` once per tick.
    ///
    /// The reply follows [`IntoStatus`], the absence value means `Success`.
    pub fn action<F, R>(func: F) -> Self
    where
        F: Fn(&mut A) -> R + 'static,
        R: IntoStatus,
    {
        let func = move |args: &mut A| func(args).into_status();
        Self::from_kind(NodeKind::Action(Rc::new(func)))
    }

    /// Leaf spanning several ticks.
    ///
    /// `genfunc` builds a fresh [`Producer`] when the node is entered; every
    /// tick pulls one element. The absence value means `Running` and the end
    /// of the sequence means `Success`.
    pub fn generator<F, P>(genfunc: F) -> Self
    where
        F: Fn(&mut A) -> P + 'static,
        P: Producer<A> + 'static,
    {
        let genfunc = move |args: &mut A| -> Step<A> {
            let mut producer = genfunc(args);
            Box::new(move |args: &mut A| producer.resume(args).map(IntoStatus::into_status))
        };
        Self::from_kind(NodeKind::GeneratorAction(Rc::new(genfunc)))
    }

    /// Instantaneous predicate, `true` is `Success` and `false` is `Failure`.
    pub fn condition<F>(func: F) -> Self
    where
        F: Fn(&mut A) -> bool + 'static,
    {
        Self::from_kind(NodeKind::Condition(Rc::new(func)))
    }

    /// Runs children one by one until all succeeded.
    ///
    /// Fails as soon as a child fails, later children are never entered.
    /// An empty sequence succeeds.
    pub fn sequence(children: impl IntoIterator<Item = Node<A>>) -> Self {
        Self::from_kind(NodeKind::Sequence(children.into_iter().collect()))
    }

    /// Runs children one by one until one succeeds.
    ///
    /// Fails once every child failed. An empty selector fails.
    pub fn selector(children: impl IntoIterator<Item = Node<A>>) -> Self {
        Self::from_kind(NodeKind::Selector(children.into_iter().collect()))
    }

    /// Wraps `node` with every entry of `decorator`, the first entry outermost.
    pub fn decorated(decorator: &Decorator<A>, node: Node<A>) -> Self {
        decorator.apply(node)
    }

    pub(crate) fn decorated_with(decorator: DecoratorEntry<A>, node: Node<A>) -> Self {
        Self::from_kind(NodeKind::Decorated { decorator, node })
    }

    /// Shorthand for `Node::decorated(decorator, self)`.
    pub fn decorate(self, decorator: &Decorator<A>) -> Self {
        decorator.apply(self)
    }

    /// Sequence of `self` followed by `next`.
    ///
    /// When `self` already is a sequence the result extends a copy of its
    /// children, `self` is left untouched.
    pub fn then(self, next: Node<A>) -> Self {
        if let NodeKind::Sequence(children) = &self.0.kind {
            return Self::sequence(extended(children, next));
        }
        Self::sequence([self, next])
    }

    /// Selector of `self` followed by `next`, extending `self` when it already is one.
    pub fn or(self, next: Node<A>) -> Self {
        if let NodeKind::Selector(children) = &self.0.kind {
            return Self::selector(extended(children, next));
        }
        Self::selector([self, next])
    }
}

impl<A> Node<A> {
    fn from_kind(kind: NodeKind<A>) -> Self {
        Self(Rc::new(NodeData {
            name: None,
            desc: None,
            kind,
        }))
    }

    /// Copy of this node carrying an explicit display name.
    pub fn named(self, name: impl Into<Cow<'static, str>>) -> Self {
        Self(Rc::new(NodeData {
            name: Some(name.into()),
            desc: self.0.desc.clone(),
            kind: self.0.kind.clone(),
        }))
    }

    /// Copy of this node carrying a human readable description.
    pub fn with_desc(self, desc: impl Into<String>) -> Self {
        Self(Rc::new(NodeData {
            name: self.0.name.clone(),
            desc: Some(desc.into()),
            kind: self.0.kind.clone(),
        }))
    }

    /// Display name.
    ///
    /// Falls back to the kind name, decorated nodes without a name are
    /// called `<decorator>*<child>`.
    pub fn name(&self) -> Cow<'_, str> {
        if let Some(name) = &self.0.name {
            return Cow::Borrowed(name);
        }
        match &self.0.kind {
            NodeKind::Decorated { decorator, node } => {
                Cow::Owned(format!("{}*{}", decorator.name(), node.name()))
            }
            _ => Cow::Borrowed(self.node_type().name()),
        }
    }

    pub fn desc(&self) -> Option<&str> {
        self.0.desc.as_deref()
    }

    pub fn node_type(&self) -> NodeType {
        match &self.0.kind {
            NodeKind::Action(_) => NodeType::Action,
            NodeKind::GeneratorAction(_) => NodeType::GeneratorAction,
            NodeKind::Condition(_) => NodeType::Condition,
            NodeKind::Sequence(_) => NodeType::Sequence,
            NodeKind::Selector(_) => NodeType::Selector,
            NodeKind::Decorated { .. } => NodeType::Decorated,
        }
    }

    /// Plain and generator actions.
    pub fn is_action(&self) -> bool {
        matches!(
            self.node_type(),
            NodeType::Action | NodeType::GeneratorAction
        )
    }

    pub fn is_condition(&self) -> bool {
        self.node_type() == NodeType::Condition
    }

    pub fn is_sequence(&self) -> bool {
        self.node_type() == NodeType::Sequence
    }

    pub fn is_selector(&self) -> bool {
        self.node_type() == NodeType::Selector
    }

    pub fn is_decorated(&self) -> bool {
        self.node_type() == NodeType::Decorated
    }

    /// Children of a composite, the wrapped node of a decorated node,
    /// nothing for leaves.
    pub fn children(&self) -> &[Node<A>] {
        match &self.0.kind {
            NodeKind::Sequence(children) | NodeKind::Selector(children) => children,
            NodeKind::Decorated { node, .. } => std::slice::from_ref(node),
            NodeKind::Action(_) | NodeKind::GeneratorAction(_) | NodeKind::Condition(_) => &[],
        }
    }

    /// True when both handles point at the same node definition.
    pub fn ptr_eq(&self, other: &Node<A>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Identity of the node definition, stable for the lifetime of the tree.
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    pub(crate) fn kind(&self) -> &NodeKind<A> {
        &self.0.kind
    }
}

fn extended<A>(children: &[Node<A>], next: Node<A>) -> Vec<Node<A>> {
    let mut children = children.to_vec();
    children.push(next);
    children
}

impl<A> fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Node");
        debug
            .field("name", &self.name())
            .field("type", &self.node_type());
        if let Some(desc) = self.desc() {
            debug.field("desc", &desc);
        }
        if !self.children().is_empty() {
            debug.field("children", &self.children());
        }
        debug.finish()
    }
}
