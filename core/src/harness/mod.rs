mod encoding;
mod reader;

use std::error::Error;
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

pub use encoding::TextEncoding;
use log::{debug, trace};
use reader::StreamReaders;
use zeroize::Zeroize;

use crate::locator::Executable;
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessErr {
    BinaryNotFound,
    SpawnFailed(String),
    StdinWriteFailed(String),
    WaitInterrupted(String),
    StreamReadFailed(String),
    ExitCodeUnavailable(String),
    NonZeroExit(i32, String),
}

impl HarnessErr {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            HarnessErr::NonZeroExit(code, _) => Some(*code),
            _ => None,
        }
    }

    /// Captured stderr of a failed run, GnuPG's own diagnostic.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            HarnessErr::NonZeroExit(_, stderr) => Some(stderr),
            _ => None,
        }
    }
}

impl Display for HarnessErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use HarnessErr::*;

        match self {
            BinaryNotFound => write!(f, "No GnuPG binary has been found"),
            SpawnFailed(msg) => write!(f, "Failed to spawn GnuPG: {}", msg),
            StdinWriteFailed(msg) => write!(f, "Failed to write child's stdin: {}", msg),
            WaitInterrupted(msg) => write!(f, "Waiting for GnuPG was interrupted: {}", msg),
            StreamReadFailed(msg) => write!(f, "Failed to read child's output: {}", msg),
            ExitCodeUnavailable(msg) => write!(f, "Cannot retrieve GnuPG exit code: {}", msg),
            NonZeroExit(code, stderr) => write!(f, "Exit code is {}, stderr: {}", code, stderr),
        }
    }
}

impl Error for HarnessErr {}

/// Both decoded streams of a successful run.
#[derive(Debug, Default)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl Drop for CapturedOutput {
    fn drop(&mut self) {
        self.stdout.zeroize();
        self.stderr.zeroize();
    }
}

impl CapturedOutput {
    pub fn take_stdout(&mut self) -> String {
        std::mem::take(&mut self.stdout)
    }
}

/// Runs one external command per call: spawn, drain stdout and stderr on two
/// threads, feed stdin, wait, join, inspect the exit code.
#[derive(Debug, Clone, Copy)]
pub struct CommandHarness {
    encoding: TextEncoding,
}

impl CommandHarness {
    pub fn new(platform: Platform) -> Self {
        CommandHarness { encoding: TextEncoding::for_platform(platform) }
    }

    pub fn with_encoding(encoding: TextEncoding) -> Self {
        CommandHarness { encoding }
    }

    pub fn run<S: AsRef<OsStr>>(
        &self,
        executable: Option<&Executable>,
        args: &[S],
        stdin: Option<&[u8]>,
    ) -> Result<String, HarnessErr> {
        self.run_captured(executable, args, stdin).map(|mut output| output.take_stdout())
    }

    pub fn run_captured<S: AsRef<OsStr>>(
        &self,
        executable: Option<&Executable>,
        args: &[S],
        stdin: Option<&[u8]>,
    ) -> Result<CapturedOutput, HarnessErr> {
        let executable = executable.ok_or(HarnessErr::BinaryNotFound)?;

        debug!("Spawning {} with {} argument(s)", executable, args.len());
        let mut child = Command::new(executable)
            .args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HarnessErr::SpawnFailed(e.to_string()))?;
        trace!("pid {}: spawned", child.id());

        let readers = match (child.stdout.take(), child.stderr.take()) {
            (Some(out), Some(err)) => StreamReaders::start(out, err),
            _ => {
                reap(&mut child);
                return Err(HarnessErr::SpawnFailed("Cannot take child's output pipes".into()));
            }
        };

        match stdin {
            Some(payload) => {
                if let Err(e) = feed_stdin(&mut child, payload) {
                    reap(&mut child);
                    readers.discard();
                    return Err(HarnessErr::StdinWriteFailed(e.to_string()));
                }
                trace!("pid {}: stdin written ({} bytes)", child.id(), payload.len());
            }
            None => trace!("pid {}: no stdin", child.id()),
        }

        if let Err(e) = child.wait() {
            // Readers are detached here, joining could block on a child we failed to wait for.
            abandon(&mut child);
            return Err(HarnessErr::WaitInterrupted(e.to_string()));
        }
        trace!("pid {}: terminated", child.id());

        let (mut raw_out, mut raw_err) = readers.join()?;
        trace!("pid {}: drained", child.id());

        let mut output = CapturedOutput {
            stdout: self.encoding.decode(&raw_out),
            stderr: self.encoding.decode(&raw_err),
        };
        raw_out.zeroize();
        raw_err.zeroize();

        let status = match child.try_wait() {
            Ok(Some(status)) => status,
            Ok(None) => {
                return Err(HarnessErr::ExitCodeUnavailable(
                    "process reported as running after wait".into(),
                ))
            }
            Err(e) => return Err(HarnessErr::ExitCodeUnavailable(e.to_string())),
        };
        let code = status.code().ok_or_else(|| {
            HarnessErr::ExitCodeUnavailable(format!(
                "process terminated without exit code ({status})"
            ))
        })?;
        debug!("GnuPG exited with code {}", code);

        if code != 0 {
            return Err(HarnessErr::NonZeroExit(code, std::mem::take(&mut output.stderr)));
        }
        Ok(output)
    }
}

fn feed_stdin(child: &mut Child, payload: &[u8]) -> io::Result<()> {
    let mut input =
        child.stdin.take().ok_or_else(|| io::Error::other("Cannot take child's stdin"))?;
    input.write_all(payload)?;
    input.flush()
    // dropping `input` closes the stream
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Kill without blocking. Reaps the child if it is already gone.
fn abandon(child: &mut Child) {
    let _ = child.kill();
    let _ = child.try_wait();
}
