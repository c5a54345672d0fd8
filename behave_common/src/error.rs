/// A leaf reply outside of the accepted status values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status value {0}")]
pub struct InvalidValue(String);

impl InvalidValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Rendering of the rejected value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Errors surfaced by `tick()`.
///
/// All of these are programming errors in the tree definition, a leaf, or the
/// driver. They are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaveError {
    /// A cursor that already returned `Success` or `Failure` was ticked again.
    #[error("ticking finished node `{node}`")]
    TickAfterFinish { node: String },

    /// An action, generator step or condition replied with a value that is not a status.
    #[error("node `{node}` returned invalid status {value}")]
    InvalidStatus { node: String, value: String },

    /// The tick function built by a decorator replied with a value that is not a status.
    #[error("decorator `{node}` returned invalid status {value}")]
    DecoratorContractViolation { node: String, value: String },
}

impl BehaveError {
    pub fn tick_after_finish(node: impl Into<String>) -> Self {
        Self::TickAfterFinish { node: node.into() }
    }

    pub fn invalid_status(node: impl Into<String>, invalid: InvalidValue) -> Self {
        Self::InvalidStatus {
            node: node.into(),
            value: invalid.0,
        }
    }

    pub fn decorator_contract_violation(node: impl Into<String>, invalid: InvalidValue) -> Self {
        Self::DecoratorContractViolation {
            node: node.into(),
            value: invalid.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BehaveError::tick_after_finish("Sequence");
        assert_eq!(err.to_string(), "ticking finished node `Sequence`");

        let err = BehaveError::invalid_status("pick_up", InvalidValue::new("42"));
        assert_eq!(err.to_string(), "node `pick_up` returned invalid status 42");

        let err = BehaveError::decorator_contract_violation("invert*pick_up", InvalidValue::new("7"));
        assert_eq!(err.to_string(), "decorator `invert*pick_up` returned invalid status 7");
    }
}
