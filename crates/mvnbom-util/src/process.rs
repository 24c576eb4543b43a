use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Output, Stdio};

use crate::errors::MvnbomError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments, environment
/// variables, and working directory.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<String>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(Path::new(dir));
        }
        cmd
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, MvnbomError> {
        self.to_command().output().map_err(MvnbomError::from)
    }
}

/// A chain of external processes connected via their standard streams.
///
/// Each stage's stdout feeds the next stage's stdin; the final stage's
/// stdout is captured to an in-memory string. Every spawned stage is waited
/// on all exit paths, including early-return failure, so the chain never
/// leaks children and the captured text is read from exactly one stream.
pub struct Pipeline {
    stages: Vec<CommandBuilder>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain.
    pub fn stage(mut self, cmd: CommandBuilder) -> Self {
        self.stages.push(cmd);
        self
    }

    /// Spawn the chain and return the final stage's stdout.
    pub fn capture(&self) -> Result<String, MvnbomError> {
        if self.stages.is_empty() {
            return Err(MvnbomError::Generic {
                message: "cannot run an empty pipeline".to_string(),
            });
        }

        let mut children: Vec<Child> = Vec::with_capacity(self.stages.len());
        let mut upstream: Option<ChildStdout> = None;

        for stage in &self.stages {
            let mut cmd = stage.to_command();
            match upstream.take() {
                Some(out) => {
                    cmd.stdin(Stdio::from(out));
                }
                None => {
                    cmd.stdin(Stdio::null());
                }
            }
            cmd.stdout(Stdio::piped());

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(err) => {
                    reap(&mut children);
                    return Err(MvnbomError::Tool {
                        message: format!("failed to spawn pipeline stage: {err}"),
                    });
                }
            };
            upstream = child.stdout.take();
            children.push(child);
        }

        let mut captured = String::new();
        let read_result = match upstream {
            Some(mut out) => out.read_to_string(&mut captured).map(|_| ()),
            None => Ok(()),
        };
        reap(&mut children);

        read_result.map_err(|err| MvnbomError::Tool {
            message: format!("failed to read pipeline output: {err}"),
        })?;
        Ok(captured)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn reap(children: &mut Vec<Child>) {
    for child in children.iter_mut() {
        if let Err(err) = child.wait() {
            tracing::warn!("failed to wait on pipeline stage: {err}");
        }
    }
    children.clear();
}
