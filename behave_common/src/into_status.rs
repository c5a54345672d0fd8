use crate::{InvalidValue, Status};

/// Conversion of a leaf reply into a status.
///
/// `Ok(None)` is the absence value. Its meaning depends on who replied:
/// actions and decorators treat it as `Success`, generator steps treat it as
/// `Running`.
pub trait IntoStatus {
    fn into_status(self) -> Result<Option<Status>, InvalidValue>;
}

impl IntoStatus for Status {
    fn into_status(self) -> Result<Option<Status>, InvalidValue> {
        Ok(Some(self))
    }
}

impl IntoStatus for Option<Status> {
    fn into_status(self) -> Result<Option<Status>, InvalidValue> {
        Ok(self)
    }
}

impl IntoStatus for () {
    fn into_status(self) -> Result<Option<Status>, InvalidValue> {
        Ok(None)
    }
}

impl IntoStatus for &str {
    fn into_status(self) -> Result<Option<Status>, InvalidValue> {
        self.parse().map(Some)
    }
}

impl IntoStatus for String {
    fn into_status(self) -> Result<Option<Status>, InvalidValue> {
        self.as_str().into_status()
    }
}

/// Dynamic replies, e.g. from scripted or data driven leaves.
///
/// `null` is the absence value and status names are accepted, everything
/// else is rejected.
impl IntoStatus for serde_json::Value {
    fn into_status(self) -> Result<Option<Status>, InvalidValue> {
        match self {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(name) => name.into_status(),
            other => Err(InvalidValue::new(other.to_string())),
        }
    }
}
