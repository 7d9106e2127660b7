use std::env;
use std::path::PathBuf;

pub const PROMPT: &str = "ccsh> ";
pub const HISTORY_FILE_NAME: &str = ".ccsh_history";

#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    /// `None` when there is no home directory to keep history in.
    pub history_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let history_path = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(HISTORY_FILE_NAME));
        Config {
            prompt: PROMPT.to_string(),
            history_path,
        }
    }

    #[cfg(test)]
    pub fn with_history_path(path: impl Into<PathBuf>) -> Self {
        Config {
            prompt: PROMPT.to_string(),
            history_path: Some(path.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_file_lives_in_given_directory() {
        let config = Config::with_history_path("/tmp/somewhere/.ccsh_history");
        assert_eq!("ccsh> ", config.prompt);
        assert_eq!(
            Some(PathBuf::from("/tmp/somewhere/.ccsh_history")),
            config.history_path
        );
    }
}
