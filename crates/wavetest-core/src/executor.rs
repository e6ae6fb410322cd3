//! Per-folder execution of the external test runner
//!
//! The runner is an opaque collaborator: a command that takes a folder
//! path, exits zero or non-zero, and writes two text streams. Folders are
//! always run one at a time; the reader threads below only exist to drain
//! the child's pipes without deadlocking while output is relayed as it
//! arrives.

use crate::error::{WaveError, WaveResult};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

/// File-name suffix marking a runnable test inside a folder.
pub const TEST_FILE_SUFFIX: &str = "Test.php";

/// Which pipe a line arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// One captured line of runner output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub stream: OutputStream,
    pub text: String,
}

/// Exit classification plus captured output for one folder run.
///
/// `success` mirrors the process exit status; output content is never
/// inspected to decide pass/fail.
#[derive(Debug)]
pub struct ProcessOutcome {
    pub success: bool,
    pub lines: Vec<OutputLine>,
}

/// External runner invocation: program plus fixed arguments. The target
/// folder is appended per run.
#[derive(Debug, Clone)]
pub struct RunnerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for RunnerCommand {
    fn default() -> Self {
        Self::phpunit("vendor/bin/phpunit")
    }
}

impl RunnerCommand {
    /// PHPUnit with configuration discovery suppressed.
    pub fn phpunit(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec!["--no-configuration".to_string()],
        }
    }

    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Runs the external test runner against one folder at a time.
#[derive(Debug, Clone, Default)]
pub struct FolderRunner {
    command: RunnerCommand,
}

impl FolderRunner {
    pub fn new(command: RunnerCommand) -> Self {
        Self { command }
    }

    /// Spawn the runner for `target`, relaying every output line through
    /// `on_line` as it arrives.
    ///
    /// Lines keep their per-stream order; no ordering is guaranteed
    /// between the two streams.
    pub fn run<F>(&self, target: &Path, mut on_line: F) -> WaveResult<ProcessOutcome>
    where
        F: FnMut(OutputStream, &str),
    {
        let mut child = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| WaveError::runner_spawn(&self.command.program, error))?;

        let (sender, receiver) = mpsc::channel::<OutputLine>();
        let stdout_reader = child
            .stdout
            .take()
            .map(|pipe| spawn_line_reader(pipe, OutputStream::Stdout, sender.clone()));
        let stderr_reader = child
            .stderr
            .take()
            .map(|pipe| spawn_line_reader(pipe, OutputStream::Stderr, sender.clone()));
        drop(sender);

        let mut lines = Vec::new();
        for line in receiver {
            on_line(line.stream, &line.text);
            lines.push(line);
        }

        let status = child.wait()?;

        if let Some(handle) = stdout_reader {
            let _ = handle.join();
        }
        if let Some(handle) = stderr_reader {
            let _ = handle.join();
        }

        Ok(ProcessOutcome {
            success: status.success(),
            lines,
        })
    }
}

fn spawn_line_reader<R>(
    pipe: R,
    stream: OutputStream,
    sender: mpsc::Sender<OutputLine>,
) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(pipe);
        for text in reader.lines().map_while(Result::ok) {
            if sender.send(OutputLine { stream, text }).is_err() {
                break;
            }
        }
    })
}
