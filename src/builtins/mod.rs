use std::collections::HashMap;
use std::env;
use std::io::{self, Write};

use log::{debug, warn};

use crate::history::History;
use crate::parser::CommandLine;
use crate::utils::{write_error, write_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFlow {
    Continue,
    Exit,
}

pub type BuiltinFn =
    fn(&mut History, &CommandLine, &mut dyn Write, &mut dyn Write) -> io::Result<BuiltinFlow>;

pub struct Builtins {
    registry: HashMap<&'static str, BuiltinFn>,
}

impl Builtins {
    pub fn new() -> Self {
        let mut registry: HashMap<&'static str, BuiltinFn> = HashMap::new();
        registry.insert("exit", Builtins::builtin_exit);
        registry.insert("cd", Builtins::builtin_cd);
        registry.insert("pwd", Builtins::builtin_pwd);
        registry.insert("clear", Builtins::builtin_clear);
        registry.insert("history", Builtins::builtin_history);
        Builtins { registry }
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinFn> {
        self.registry.get(name)
    }

    fn builtin_exit(
        _history: &mut History,
        _command: &CommandLine,
        _stdout_writer: &mut dyn Write,
        _stderr_writer: &mut dyn Write,
    ) -> io::Result<BuiltinFlow> {
        Ok(BuiltinFlow::Exit)
    }

    fn builtin_cd(
        _history: &mut History,
        command: &CommandLine,
        _stdout_writer: &mut dyn Write,
        stderr_writer: &mut dyn Write,
    ) -> io::Result<BuiltinFlow> {
        let Some(target) = command.args().first() else {
            write_line(stderr_writer, "Usage: cd <directory>")?;
            return Ok(BuiltinFlow::Continue);
        };

        match env::set_current_dir(target) {
            Ok(()) => debug!("changed directory to {}", target),
            Err(err) => write_error(stderr_writer, &format!("cd {}: {}", target, err))?,
        }

        Ok(BuiltinFlow::Continue)
    }

    fn builtin_pwd(
        _history: &mut History,
        _command: &CommandLine,
        stdout_writer: &mut dyn Write,
        stderr_writer: &mut dyn Write,
    ) -> io::Result<BuiltinFlow> {
        match env::current_dir() {
            Ok(path) => write_line(stdout_writer, &path.to_string_lossy())?,
            Err(err) => write_error(stderr_writer, &err.to_string())?,
        }

        Ok(BuiltinFlow::Continue)
    }

    fn builtin_clear(
        history: &mut History,
        _command: &CommandLine,
        stdout_writer: &mut dyn Write,
        _stderr_writer: &mut dyn Write,
    ) -> io::Result<BuiltinFlow> {
        if let Err(err) = history.clear() {
            warn!("{}", err);
        }
        write_line(stdout_writer, "History cleared!")?;
        Ok(BuiltinFlow::Continue)
    }

    fn builtin_history(
        history: &mut History,
        _command: &CommandLine,
        stdout_writer: &mut dyn Write,
        _stderr_writer: &mut dyn Write,
    ) -> io::Result<BuiltinFlow> {
        history.show(stdout_writer)?;
        Ok(BuiltinFlow::Continue)
    }
}
