use std::io::{self, Write};
use std::process::{self, Stdio};
use std::sync::mpsc::Receiver;

use log::{debug, warn};

use crate::builtins::{BuiltinFlow, Builtins};
use crate::config::Config;
use crate::errors::ExecError;
use crate::history::History;
use crate::input::Event;
use crate::parser::CommandLine;
use crate::signals::Interrupted;
use crate::utils::{write_error, write_line};

pub struct Shell {
    prompt: String,
    builtins: Builtins,
    history: History,
}

impl Shell {
    /// Builds a shell and loads its history. A history that cannot be read is
    /// logged and the shell starts empty.
    pub fn new(config: &Config) -> Self {
        if config.history_path.is_none() {
            warn!("HOME is not set, history will not be persisted");
        }

        let mut history = History::new(config.history_path.clone());
        debug!("history file: {:?}", history.path());
        if let Err(err) = history.load() {
            warn!("{}", err);
        }

        Shell {
            prompt: config.prompt.clone(),
            builtins: Builtins::new(),
            history,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs until `exit`, end of input or an interrupt, then saves history.
    ///
    /// A raised `interrupted` flag wins over any line still waiting in
    /// `events`. History is saved even when writing to `stdout_writer` fails.
    pub fn run(
        &mut self,
        events: &Receiver<Event>,
        interrupted: &Interrupted,
        stdout_writer: &mut dyn Write,
        stderr_writer: &mut dyn Write,
    ) -> io::Result<()> {
        let result = self.read_dispatch_loop(events, interrupted, stdout_writer, stderr_writer);
        self.persist_history();
        result
    }

    fn read_dispatch_loop(
        &mut self,
        events: &Receiver<Event>,
        interrupted: &Interrupted,
        stdout_writer: &mut dyn Write,
        stderr_writer: &mut dyn Write,
    ) -> io::Result<()> {
        loop {
            stdout_writer.write_all(self.prompt.as_bytes())?;
            stdout_writer.flush()?;

            let event = events.recv();
            if interrupted.is_raised() {
                return say_goodbye(stdout_writer);
            }

            let line = match event {
                Ok(Event::Line(line)) => line,
                Ok(Event::Interrupt) => return say_goodbye(stdout_writer),
                Ok(Event::EndOfInput) => {
                    write_line(stdout_writer, "")?;
                    return Ok(());
                }
                Ok(Event::ReadFailed(err)) => {
                    warn!("stopping after input error: {}", err);
                    write_line(stdout_writer, "")?;
                    return Ok(());
                }
                // every sender is gone, nothing more can arrive
                Err(_) => return Ok(()),
            };

            let Some(command) = CommandLine::parse(&line) else {
                continue;
            };

            if let BuiltinFlow::Exit = self.dispatch(&command, stdout_writer, stderr_writer)? {
                return Ok(());
            }
            if interrupted.is_raised() {
                return say_goodbye(stdout_writer);
            }
        }
    }

    fn dispatch(
        &mut self,
        command: &CommandLine,
        stdout_writer: &mut dyn Write,
        stderr_writer: &mut dyn Write,
    ) -> io::Result<BuiltinFlow> {
        if let Some(builtin) = self.builtins.get(command.name()) {
            debug!("builtin {} {:?}", command.name(), command.args());
            return builtin(&mut self.history, command, stdout_writer, stderr_writer);
        }

        stdout_writer.flush()?;
        match self.run_external(command) {
            Ok(()) => self.history.append(command.line()),
            Err(err) => write_error(stderr_writer, &err.to_string())?,
        }
        Ok(BuiltinFlow::Continue)
    }

    fn run_external(&self, command: &CommandLine) -> Result<(), ExecError> {
        debug!("spawning {} {:?}", command.name(), command.args());
        let status = process::Command::new(command.name())
            .args(command.args())
            .stdin(Stdio::null())
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ExecError::NotFound {
                    command: command.name().to_string(),
                },
                _ => ExecError::Spawn {
                    command: command.name().to_string(),
                    source,
                },
            })?;

        debug!("{} exited with {}", command.name(), status);
        if !status.success() {
            return Err(ExecError::Failed {
                command: command.name().to_string(),
                status,
            });
        }
        Ok(())
    }

    fn persist_history(&self) {
        if let Err(err) = self.history.save() {
            warn!("{}", err);
        }
    }
}

fn say_goodbye(stdout_writer: &mut dyn Write) -> io::Result<()> {
    write_line(stdout_writer, "\nExiting shell... Goodbye!")
}
