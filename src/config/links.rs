use crate::domain::ports::LinkConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_fragment, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANNOTATIONS_BASE: &str = "https://annotations.allmaps.org";
pub const DEFAULT_VIEWER_BASE: &str = "https://viewer.allmaps.org/";
pub const DEFAULT_EDITOR_BASE: &str = "https://editor.allmaps.org/";

/// Base URLs for the annotation server and the two client apps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkEndpoints {
    pub annotations: String,
    pub viewer: String,
    pub editor: String,
}

impl Default for LinkEndpoints {
    fn default() -> Self {
        Self {
            annotations: DEFAULT_ANNOTATIONS_BASE.to_string(),
            viewer: DEFAULT_VIEWER_BASE.to_string(),
            editor: DEFAULT_EDITOR_BASE.to_string(),
        }
    }
}

impl LinkConfig for LinkEndpoints {
    fn annotations_base(&self) -> &str {
        &self.annotations
    }

    fn viewer_base(&self) -> &str {
        &self.viewer
    }

    fn editor_base(&self) -> &str {
        &self.editor
    }
}

impl Validate for LinkEndpoints {
    fn validate(&self) -> Result<()> {
        validate_url("links.annotations", &self.annotations)?;
        validate_url("links.viewer", &self.viewer)?;
        validate_url("links.editor", &self.editor)?;

        validate_no_fragment("links.viewer", &self.viewer)?;
        validate_no_fragment("links.editor", &self.editor)?;
        Ok(())
    }
}
