use serde::{Deserialize, Serialize};
use std::fmt;

/// Page-scoped id of the other side of a conversation.
///
/// Opaque: it is only ever echoed back to the Send API, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(String);

impl RecipientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let id = RecipientId::new("1254459154682919");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""1254459154682919""#);

        let back: RecipientId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(back.as_str(), "42");
        assert_eq!(back.to_string(), "42");
    }
}
