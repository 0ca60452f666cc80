use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub platform: Vec<String>,
}

impl Game {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            platform: Vec::new(),
        }
    }

    pub fn with_platform(mut self, platform: Vec<String>) -> Self {
        self.platform = platform;
        self
    }

    /// Shallow merge: every field present in `edit` replaces ours.
    pub fn apply(&mut self, edit: &GameEdit) {
        if let Some(ref title) = edit.title {
            self.title = title.clone();
        }
        if let Some(ref platform) = edit.platform {
            self.platform = platform.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEdit {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl GameEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.platform.is_none()
    }
}
