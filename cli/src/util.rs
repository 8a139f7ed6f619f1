use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Error, Result};
use gpgw_core::config::GpgwConfig;
use gpgw_core::constants::env_variables::LOG_LEVEL_VAR;
use gpgw_core::harness::HarnessErr;
use gpgw_core::locator::Executable;
use gpgw_core::pgp::{PGPClient, PGPErr};
use gpgw_core::platform::Platform;
use gpgw_core::util::log::{parse_log_level, set_log_level};
use log::{debug, LevelFilter};

use crate::constants::GpgwExitCode;

/// `-v` flags beat `GPGW_LOG_LEVEL`, which beats the config file.
pub(crate) fn apply_log_level(config: &GpgwConfig, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => match std::env::var(LOG_LEVEL_VAR) {
            Ok(level) => parse_log_level(&level)?,
            Err(_) => parse_log_level(&config.log_config.level)?,
        },
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    set_log_level(level);
    Ok(())
}

pub(crate) fn build_client(
    config: &GpgwConfig,
    gpg: Option<&str>,
    home_dir: Option<&str>,
) -> PGPClient {
    let platform = Platform::current();
    let executable = match gpg {
        Some(token) => Executable::parse(token),
        None => config.executable_config.resolve_executable(platform),
    };
    let home_dir = home_dir.map(PathBuf::from).or_else(|| config.executable_config.home_dir());
    debug!("Using GnuPG {:?} with home {:?}", executable, home_dir);
    PGPClient::with_platform(executable, home_dir, platform)
}

/// Whole file, or stdin when no file is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Raw bytes of a file or stdin, for binary key material.
pub(crate) fn read_input_bytes(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

pub(crate) fn exit_code_for(err: &Error) -> i32 {
    if let Some(harness_err) = err.downcast_ref::<HarnessErr>() {
        return match harness_err {
            HarnessErr::BinaryNotFound => GpgwExitCode::CommandNotFound,
            HarnessErr::SpawnFailed(_) => GpgwExitCode::NotExecutable,
            HarnessErr::NonZeroExit(_, _) => GpgwExitCode::PGPError,
            _ => GpgwExitCode::Error,
        }
        .into();
    }
    match err.downcast_ref::<PGPErr>() {
        Some(PGPErr::EmptyRecipient) => GpgwExitCode::InvalidArgs.into(),
        Some(_) => GpgwExitCode::PGPError.into(),
        None => GpgwExitCode::Error.into(),
    }
}

pub(crate) fn with_exit_code<T>(result: Result<T>) -> Result<T, (i32, Error)> {
    result.map_err(|e| (exit_code_for(&e), e))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn binary_input_is_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let key = dir.path().join("key.gpg");
        let bytes = vec![0x99, 0x01, 0x0d, 0xff, 0xfe, b'\n'];
        fs::write(&key, &bytes).unwrap();
        assert_eq!(read_input_bytes(key.to_str()).unwrap(), bytes);
        assert!(read_input(key.to_str()).is_err());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code_for(&HarnessErr::BinaryNotFound.into()), 127);
        assert_eq!(exit_code_for(&HarnessErr::SpawnFailed("x".into()).into()), 126);
        assert_eq!(exit_code_for(&HarnessErr::NonZeroExit(2, String::new()).into()), 199);
        assert_eq!(exit_code_for(&PGPErr::EmptyRecipient.into()), 2);
        assert_eq!(exit_code_for(&PGPErr::SignatureNotVerified.into()), 199);
        assert_eq!(exit_code_for(&anyhow!("io")), 1);
    }
}
