use std::ffi::{OsStr, OsString};

use anyhow::Result;
use log::debug;
use secrecy::SecretString;

use super::utils::parse_valid_signature;
use super::{flags, PGPClient, PGPErr};

/// Plaintext of a message whose signature GnuPG reported as valid.
pub struct VerifiedPlaintext {
    pub plaintext: SecretString,
    pub signing_fpr: String,
    pub primary_fpr: Option<String>,
}

impl PGPClient {
    /// Armored ciphertext of `data` for `recipient`.
    pub fn encrypt(&self, data: &str, recipient: &str) -> Result<String> {
        let args = self.build_args(flags::ENCRYPT, &[non_empty_recipient(recipient)?]);
        self.run_gpg(&args, Some(data.as_bytes()))
    }

    pub fn decrypt(&self, data: &str) -> Result<SecretString> {
        let args = self.build_args(flags::DECRYPT, &[]);
        Ok(self.run_gpg(&args, Some(data.as_bytes()))?.into())
    }

    /// Encrypt for `recipient` and sign with `signer`, or GnuPG's default key.
    pub fn encrypt_and_sign(
        &self,
        data: &str,
        recipient: &str,
        signer: Option<&str>,
    ) -> Result<String> {
        let recipient = non_empty_recipient(recipient)?;
        let args = match signer {
            Some(signer) => {
                let mut fragment = vec![flags::LOCAL_USER, signer];
                fragment.extend_from_slice(flags::ENCRYPT_SIGN);
                self.build_args(&fragment, &[recipient])
            }
            None => self.build_args(flags::ENCRYPT_SIGN, &[recipient]),
        };
        self.run_gpg(&args, Some(data.as_bytes()))
    }

    /// Decrypt `data`, failing unless it carries a signature GnuPG accepts.
    pub fn decrypt_and_verify(&self, data: &str) -> Result<VerifiedPlaintext> {
        let args: Vec<OsString> = self.build_args(flags::DECRYPT_VERIFY, &[]);
        let mut output = self.run_gpg_captured(&args, Some(data.as_bytes()))?;
        let (signing_fpr, primary_fpr) =
            parse_valid_signature(&output.stderr).ok_or(PGPErr::SignatureNotVerified)?;
        debug!("Decrypted message signed by {}", signing_fpr);
        Ok(VerifiedPlaintext { plaintext: output.take_stdout().into(), signing_fpr, primary_fpr })
    }
}

fn non_empty_recipient(recipient: &str) -> Result<&OsStr> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(PGPErr::EmptyRecipient.into());
    }
    Ok(OsStr::new(recipient))
}
