use std::path::PathBuf;

use crate::formatting::DEFAULT_WRAP_WIDTH;

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct GrabberConfig {
    /// Directory the URL-derived output path is resolved against.
    pub output_root: PathBuf,
    pub wrap_width: usize,
    pub user_agent: String,
    /// Echo progress and the extracted text.
    pub verbose: bool,
}

impl Default for GrabberConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            wrap_width: DEFAULT_WRAP_WIDTH,
            user_agent: USER_AGENT.to_string(),
            verbose: false,
        }
    }
}
