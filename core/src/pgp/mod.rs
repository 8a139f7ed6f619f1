pub mod crypto;
pub mod key_management;
pub mod utils;

use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::harness::{CapturedOutput, CommandHarness};
use crate::locator::{BinaryLocator, Executable};
use crate::platform::Platform;

/// Command line fragments passed to GnuPG verbatim.
pub mod flags {
    pub const BATCH: &[&str] = &["--yes", "--batch"];
    pub const HOME_DIR: &str = "--homedir";
    pub const LOCAL_USER: &str = "--local-user";
    pub const LIST_KEYS: &[&str] = &["--list-keys"];
    pub const IMPORT: &[&str] = &["--import"];
    pub const FINGERPRINT: &[&str] =
        &["--import-options", "show-only", "--fingerprint", "--import"];
    pub const ENCRYPT: &[&str] = &["-a", "--output", "-", "--encrypt", "-r"];
    pub const DECRYPT: &[&str] = &["-a", "--output", "-", "--decrypt"];
    pub const ENCRYPT_SIGN: &[&str] = &["-a", "--output", "-", "--encrypt", "--sign", "-r"];
    pub const DECRYPT_VERIFY: &[&str] = &["-a", "--output", "-", "--status-fd", "2", "--decrypt"];
    pub const CLI_TEMPLATE: &[&str] = &["%1", "%2", "%3", "%4", "%5", "%6"];
}

pub struct PGPClient {
    executable: Option<Executable>,
    home_dir: Option<PathBuf>,
    platform: Platform,
    harness: CommandHarness,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PGPErr {
    FingerprintNotFound,
    SignatureNotVerified,
    EmptyRecipient,
}

impl Display for PGPErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use PGPErr::*;

        match self {
            FingerprintNotFound => write!(f, "No fingerprint found in GnuPG output"),
            SignatureNotVerified => write!(f, "No valid signature found"),
            EmptyRecipient => write!(f, "Recipient is empty"),
        }
    }
}

impl Error for PGPErr {}

impl PGPClient {
    /// `None` keeps the client usable for inspection; every GnuPG call then
    /// fails with `HarnessErr::BinaryNotFound` without spawning anything.
    pub fn new(executable: Option<Executable>, home_dir: Option<PathBuf>) -> Self {
        Self::with_platform(executable, home_dir, Platform::current())
    }

    pub fn with_platform(
        executable: Option<Executable>,
        home_dir: Option<PathBuf>,
        platform: Platform,
    ) -> Self {
        PGPClient { executable, home_dir, platform, harness: CommandHarness::new(platform) }
    }

    /// Client for the binary found by probing the host's candidate list.
    pub fn detect(home_dir: Option<PathBuf>) -> Self {
        let platform = Platform::current();
        Self::with_platform(BinaryLocator::new(platform).resolve(), home_dir, platform)
    }

    pub fn get_executable(&self) -> Option<&Executable> {
        self.executable.as_ref()
    }

    pub fn get_home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    pub fn get_platform(&self) -> Platform {
        self.platform
    }

    /// Batch flags, home directory, then the operation fragment and its operands.
    pub(crate) fn build_args(&self, fragment: &[&str], operands: &[&OsStr]) -> Vec<OsString> {
        let mut args = Vec::with_capacity(flags::BATCH.len() + 2 + fragment.len() + operands.len());
        args.extend(flags::BATCH.iter().map(OsString::from));
        if let Some(home) = &self.home_dir {
            args.push(flags::HOME_DIR.into());
            args.push(home.as_os_str().to_os_string());
        }
        args.extend(fragment.iter().map(OsString::from));
        args.extend(operands.iter().map(|o| o.to_os_string()));
        args
    }

    pub(crate) fn run_gpg(&self, args: &[OsString], stdin: Option<&[u8]>) -> Result<String> {
        Ok(self.harness.run(self.executable.as_ref(), args, stdin)?)
    }

    pub(crate) fn run_gpg_captured(
        &self,
        args: &[OsString],
        stdin: Option<&[u8]>,
    ) -> Result<CapturedOutput> {
        Ok(self.harness.run_captured(self.executable.as_ref(), args, stdin)?)
    }
}
