use serde::{Deserialize, Serialize};

/// File paths for the resolve-and-merge pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// Line-oriented domain list; comments and blank lines pass through
    #[serde(default = "default_input")]
    pub input: String,

    /// Resolved hosts lines are written here
    #[serde(default = "default_output")]
    pub output: String,

    /// Optional hand-maintained file appended during the merge step
    #[serde(default = "default_extra")]
    pub extra: String,

    /// Final merged hosts file
    #[serde(default = "default_merged")]
    pub merged: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            extra: default_extra(),
            merged: default_merged(),
        }
    }
}

fn default_input() -> String {
    "input.txt".to_string()
}

fn default_output() -> String {
    "output.txt".to_string()
}

fn default_extra() -> String {
    "extra.txt".to_string()
}

fn default_merged() -> String {
    "hosts.txt".to_string()
}
