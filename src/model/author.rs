use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub verified: bool,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>, verified: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            verified,
        }
    }
}
