use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::locator::Executable;

pub fn get_test_executable() -> String {
    env::var("GPGW_TEST_EXECUTABLE").unwrap_or("gpg".into())
}

pub fn get_test_email() -> String {
    env::var("GPGW_TEST_EMAIL").unwrap_or("foo@gpgw.test".into())
}

pub fn gpg_key_gen_example_batch() -> String {
    format!(
        r#"%echo Generating a new key
Key-Type: RSA
Key-Length: 2048
Key-Usage: sign
Subkey-Type: RSA
Subkey-Length: 2048
Subkey-Usage: encrypt
Name-Real: gpgw-test
Name-Email: {}
Expire-Date: 0
%no-protection
%commit
%echo Key generation complete
"#,
        get_test_email()
    )
}

pub(crate) fn gen_unique_temp_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Write a shell script standing in for gpg. Callers must be `#[serial]`,
/// a concurrent fork could keep the script open for writing (ETXTBSY).
#[cfg(unix)]
pub(crate) fn fake_gpg(dir: &Path, body: &str) -> Executable {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-gpg");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    Executable::parse(&path).unwrap()
}

/// Fake gpg that prints each argument on its own line, then echoes stdin.
#[cfg(unix)]
pub(crate) fn echo_args_gpg(dir: &Path) -> Executable {
    fake_gpg(dir, "printf '%s\\n' \"$@\"\ncat")
}
