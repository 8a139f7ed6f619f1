use anyhow::{anyhow, Result};
use log::debug;
use regex::Regex;

use super::{flags, PGPClient, PGPErr};
use crate::harness::HarnessErr;
use crate::util::str::join_command_line;

/// Fingerprint as printed by `--fingerprint`: ten groups of four hex digits.
const FINGERPRINT_PATTERN: &str = r"\b[0-9A-F]{4}(?: *[0-9A-F]{4}){9}\b";

/// First fingerprint in `text`, uppercased and without spaces.
pub fn extract_fingerprint(text: &str) -> Result<String> {
    let fpr_regex = Regex::new(FINGERPRINT_PATTERN)?;
    let upper = text.to_uppercase();
    let found = fpr_regex.find(&upper).ok_or(PGPErr::FingerprintNotFound)?;
    Ok(found.as_str().replace(' ', ""))
}

/// Drop the keyring path and its underline that `--list-keys` prints first.
pub fn strip_banner(listing: &str) -> &str {
    let mut rest = listing;
    for _ in 0..2 {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

/// Split a key listing into per-key blocks separated by blank lines.
pub fn split_key_blocks(listing: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in listing.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

/// Signing key and primary key fingerprints from a `[GNUPG:] VALIDSIG` status line.
pub(crate) fn parse_valid_signature(status: &str) -> Option<(String, Option<String>)> {
    for line in status.lines() {
        let Some(rest) = line.strip_prefix("[GNUPG:] VALIDSIG ") else {
            continue;
        };
        let fields: Vec<&str> = rest.split_whitespace().collect();
        let signing = fields.first()?.to_uppercase();
        let primary = fields.get(9).map(|f| f.to_uppercase());
        debug!("Valid signature by {}", signing);
        return Some((signing, primary));
    }
    None
}

impl PGPClient {
    /// Command line for running GnuPG by hand against the same home directory.
    /// `%1`..`%6` are placeholders for the caller's own arguments.
    pub fn cli_interactive_command(&self) -> Result<String> {
        let executable = self.get_executable().ok_or(HarnessErr::BinaryNotFound)?;
        let mut tokens = vec![executable
            .as_os_str()
            .to_str()
            .ok_or_else(|| anyhow!("Executable path is not valid UTF-8: {}", executable))?
            .to_string()];
        for arg in self.build_args(&[], &[]) {
            tokens.push(
                arg.into_string()
                    .map_err(|a| anyhow!("Argument is not valid UTF-8: {:?}", a))?,
            );
        }
        let mut line = join_command_line(&tokens, self.get_platform());
        for placeholder in flags::CLI_TEMPLATE {
            line.push(' ');
            line.push_str(placeholder);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::locator::Executable;
    use crate::platform::Platform;

    const FPR: &str = "0A1B2C3D4E5F6A7B8C9D0E1F2A3B4C5D6E7F8A9B";

    #[test]
    fn fingerprint_from_gpg_output() {
        let output = "pub   rsa3072 2021-01-01 [SC]\n      Key fingerprint = 0a1b 2c3d 4e5f \
                      6a7b 8c9d  0e1f 2a3b 4c5d 6e7f 8a9b\nuid           Test <t@example.com>\n";
        assert_eq!(extract_fingerprint(output).unwrap(), FPR);
    }

    #[test]
    fn fingerprint_anywhere_in_text() {
        for text in [
            "0A1B 2C3D 4E5F 6A7B 8C9D 0E1F 2A3B 4C5D 6E7F 8A9B".to_string(),
            "noise DEAD BEEF\n\n  0a1b 2c3d 4e5f 6a7b 8c9d 0e1f 2a3b 4c5d 6e7f 8a9b tail"
                .to_string(),
            format!("fpr:::::::::{}:\n", FPR.to_lowercase()),
        ] {
            assert_eq!(extract_fingerprint(&text).unwrap(), FPR);
        }
    }

    #[test]
    fn first_fingerprint_wins() {
        let text = format!("{}\n{}", FPR, "1111 2222 3333 4444 5555 6666 7777 8888 9999 AAAA");
        assert_eq!(extract_fingerprint(&text).unwrap(), FPR);
    }

    #[test]
    fn no_fingerprint() {
        let err = extract_fingerprint("gpg: no valid OpenPGP data found.").unwrap_err();
        assert_eq!(err.downcast_ref::<PGPErr>(), Some(&PGPErr::FingerprintNotFound));
        // nine groups are not enough
        assert!(extract_fingerprint("0A1B 2C3D 4E5F 6A7B 8C9D 0E1F 2A3B 4C5D 6E7F").is_err());
    }

    #[test]
    fn banner_is_stripped() {
        let listing = "/home/u/.gnupg/pubring.kbx\n-------------------------\npub   rsa2048\n";
        assert_eq!(strip_banner(listing), "pub   rsa2048\n");
        assert_eq!(strip_banner("only one line"), "");
        assert_eq!(strip_banner(""), "");
    }

    #[test]
    fn blocks_split_on_blank_lines() {
        let listing = "pub   rsa2048\nuid   A\nsub   rsa2048\n\npub   ed25519\nuid   B\n\n\n";
        assert_eq!(
            split_key_blocks(listing),
            vec!["pub   rsa2048\nuid   A\nsub   rsa2048", "pub   ed25519\nuid   B"]
        );
        assert!(split_key_blocks("\n\n").is_empty());
    }

    #[test]
    fn blocks_handle_crlf() {
        let listing = "pub   A\r\nuid   A\r\n\r\npub   B\r\n";
        assert_eq!(split_key_blocks(listing), vec!["pub   A\nuid   A", "pub   B"]);
    }

    #[test]
    fn valid_signature_status() {
        let status = "[GNUPG:] NEWSIG\n[GNUPG:] GOODSIG 8C9D0E1F Test\n[GNUPG:] VALIDSIG \
                      1111222233334444555566667777888899990000 2024-01-01 1704067200 0 4 0 1 \
                      10 00 0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b\n";
        let (signing, primary) = parse_valid_signature(status).unwrap();
        assert_eq!(signing, "1111222233334444555566667777888899990000");
        assert_eq!(primary.as_deref(), Some(FPR));
        assert_eq!(parse_valid_signature("[GNUPG:] BADSIG 8C9D0E1F Test\n"), None);
    }

    #[test]
    fn interactive_command_line() {
        let client = PGPClient::with_platform(
            Executable::parse("gpg"),
            Some(PathBuf::from("/tmp/my keys")),
            Platform::Linux,
        );
        assert_eq!(
            client.cli_interactive_command().unwrap(),
            "gpg --yes --batch --homedir '/tmp/my keys' %1 %2 %3 %4 %5 %6"
        );
    }

    #[test]
    fn interactive_command_needs_binary() {
        let client = PGPClient::with_platform(None, None, Platform::Linux);
        let err = client.cli_interactive_command().unwrap_err();
        assert_eq!(err.downcast_ref::<HarnessErr>(), Some(&HarnessErr::BinaryNotFound));
    }
}
