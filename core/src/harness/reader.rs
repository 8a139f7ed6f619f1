use std::io::{self, Read};
use std::thread::{self, JoinHandle};

use zeroize::Zeroize;

use super::HarnessErr;

pub(super) type StreamHandle = JoinHandle<io::Result<Vec<u8>>>;

/// Start consuming a child's output stream in a new thread.
///
/// The buffer is owned by the thread until it is handed back through `join`,
/// so the caller never observes a partially written capture.
pub(super) fn drain<R: Read + Send + 'static>(mut stream: R) -> StreamHandle {
    thread::spawn(move || {
        let mut output = Vec::new();
        match io::copy(&mut stream, &mut output) {
            Ok(_) => Ok(output),
            Err(e) => {
                output.zeroize();
                Err(e)
            }
        }
    })
}

pub(super) struct StreamReaders {
    pub stdout: StreamHandle,
    pub stderr: StreamHandle,
}

impl StreamReaders {
    pub fn start<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Read + Send + 'static,
        E: Read + Send + 'static,
    {
        StreamReaders { stdout: drain(stdout), stderr: drain(stderr) }
    }

    /// Join both readers and wipe whatever they captured.
    pub fn discard(self) {
        if let Ok((mut out, mut err)) = self.join() {
            out.zeroize();
            err.zeroize();
        }
    }

    /// Rendezvous with both readers. Both are always joined, even if the first fails.
    pub fn join(self) -> Result<(Vec<u8>, Vec<u8>), HarnessErr> {
        let stdout = join_stream(self.stdout, "stdout");
        let stderr = join_stream(self.stderr, "stderr");
        match (stdout, stderr) {
            (Ok(out), Ok(err)) => Ok((out, err)),
            (Err(e), Ok(mut buf)) | (Ok(mut buf), Err(e)) => {
                buf.zeroize();
                Err(e)
            }
            (Err(e), Err(_)) => Err(e),
        }
    }
}

fn join_stream(handle: StreamHandle, name: &str) -> Result<Vec<u8>, HarnessErr> {
    handle
        .join()
        .map_err(|_| HarnessErr::StreamReadFailed(format!("{name} reader panicked")))?
        .map_err(|e| HarnessErr::StreamReadFailed(format!("{name}: {e}")))
}
