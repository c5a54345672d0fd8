/// The kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NodeType {
    Action,
    GeneratorAction,
    Condition,
    Sequence,
    Selector,
    Decorated,
}

impl NodeType {
    /// Default display name of nodes of this kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Action => "Action",
            NodeType::GeneratorAction => "GeneratorAction",
            NodeType::Condition => "Condition",
            NodeType::Sequence => "Sequence",
            NodeType::Selector => "Selector",
            NodeType::Decorated => "Decorated",
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, NodeType::Sequence | NodeType::Selector)
    }
}
