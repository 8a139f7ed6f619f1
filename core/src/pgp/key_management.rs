use std::path::Path;

use anyhow::Result;
use log::debug;

use super::utils::{extract_fingerprint, split_key_blocks, strip_banner};
use super::{flags, PGPClient};

impl PGPClient {
    /// Raw `--list-keys` output, keyring banner included.
    pub fn list_keys(&self) -> Result<String> {
        self.run_gpg(&self.build_args(flags::LIST_KEYS, &[]), None)
    }

    pub fn list_key_blocks(&self) -> Result<Vec<String>> {
        let listing = self.list_keys()?;
        let blocks = split_key_blocks(strip_banner(&listing));
        debug!("Listed {} key(s)", blocks.len());
        Ok(blocks)
    }

    pub fn import_key_file<P: AsRef<Path>>(&self, file: P) -> Result<String> {
        let args = self.build_args(flags::IMPORT, &[file.as_ref().as_os_str()]);
        self.run_gpg(&args, None)
    }

    /// Fingerprint of the key in `file`, without importing it.
    pub fn fingerprint_key_file<P: AsRef<Path>>(&self, file: P) -> Result<String> {
        let args = self.build_args(flags::FINGERPRINT, &[file.as_ref().as_os_str()]);
        extract_fingerprint(&self.run_gpg(&args, None)?)
    }

    /// Fingerprint of armored or binary key material passed on stdin.
    pub fn fingerprint<D: AsRef<[u8]>>(&self, key_data: D) -> Result<String> {
        let args = self.build_args(flags::FINGERPRINT, &[]);
        extract_fingerprint(&self.run_gpg(&args, Some(key_data.as_ref()))?)
    }
}
