use std::{fmt, str::FromStr};

use crate::InvalidValue;

/// The result of ticking a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Status {
    /// The node succeeded.
    Success,
    /// The node failed.
    Failure,
    /// The node has not resolved yet and must be ticked again.
    Running,
}

impl Status {
    /// `Success` and `Failure` end a cursor, `Running` does not.
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Failure => "Failure",
            Status::Running => "Running",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(Status::Success),
            "Failure" => Ok(Status::Failure),
            "Running" => Ok(Status::Running),
            other => Err(InvalidValue::new(format!("{other:?}"))),
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
