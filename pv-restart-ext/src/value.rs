use serde_json::Value;

pub trait ValueExt {
    /// `false` for `null` and `false`, `true` for everything else.
    fn is_truthy(&self) -> bool;
}

impl ValueExt for Value {
    fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }
}
