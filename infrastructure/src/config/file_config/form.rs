//! Form configuration from TOML (`[form]` section)

use hike_domain::FormVariant;
use serde::{Deserialize, Serialize};

/// Raw form configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Stage layout: "classic" or "extended"
    pub variant: FormVariant,
}
