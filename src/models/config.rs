use std::path::PathBuf;

/// Fixed parameters of a run. There is no config file; `Default` is the only source.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub snippet_width: usize,
    pub placeholder: String,
    pub snippet_indent: String,
}

impl ::std::default::Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("open_issues.json"),
            snippet_width: 120,
            placeholder: String::from("..."),
            snippet_indent: String::from("    "),
        }
    }
}
