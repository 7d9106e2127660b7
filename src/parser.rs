/// A non-empty, trimmed command line split into a command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    line: String,
    name: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Returns `None` when the input holds no tokens at all.
    pub fn parse(input: &str) -> Option<CommandLine> {
        let line = input.trim();
        let mut tokens = tokenize(line).into_iter();
        let name = tokens.next()?;
        Some(CommandLine {
            line: line.to_string(),
            name,
            args: tokens.collect(),
        })
    }

    /// The trimmed, untokenized input.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Splits on runs of whitespace. No quoting or escaping.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_basic_command() {
        let tokens = tokenize("ls -la /tmp");
        assert_eq!(tokens, vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn collapses_whitespace_runs() {
        let tokens = tokenize("  echo \t hello    world  ");
        assert_eq!(tokens, vec!["echo", "hello", "world"]);
    }

    #[test]
    fn quotes_are_not_special() {
        let tokens = tokenize("echo \"hello world\" 'a|b' $HOME");
        assert_eq!(tokens, vec!["echo", "\"hello", "world\"", "'a|b'", "$HOME"]);
    }

    #[test]
    fn empty_and_blank_lines_have_no_command() {
        assert_eq!(None, CommandLine::parse(""));
        assert_eq!(None, CommandLine::parse("   \t  \n"));
    }

    #[test]
    fn keeps_trimmed_line_verbatim() {
        let command = CommandLine::parse("  echo   a  b \n").expect("expected command");
        assert_eq!("echo   a  b", command.line());
        assert_eq!("echo", command.name());
        assert_eq!(["a".to_string(), "b".to_string()], command.args());
    }

    #[test]
    fn single_token_has_no_args() {
        let command = CommandLine::parse("pwd").expect("expected command");
        assert_eq!("pwd", command.name());
        assert!(command.args().is_empty());
    }
}
