use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::default_constants::{
    LINUX_GPG_CANDIDATES, MAC_GPG_CANDIDATES, WINDOWS_GPG_CANDIDATES,
};
use crate::platform::Platform;

/// A resolved GnuPG binary: either an existing path or a bare command name
/// left for the OS search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executable(PathBuf);

impl Executable {
    /// Validate a user supplied token. Bare names are accepted as-is, paths must exist.
    pub fn parse<S: AsRef<OsStr>>(token: S) -> Option<Self> {
        let token = token.as_ref();
        if token.is_empty() {
            return None;
        }
        let path = Path::new(token);
        if is_bare_command(path) || path.exists() {
            Some(Executable(path.to_path_buf()))
        } else {
            None
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_os_str(&self) -> &OsStr {
        self.0.as_os_str()
    }

    pub fn is_bare_command(&self) -> bool {
        is_bare_command(&self.0)
    }
}

impl AsRef<OsStr> for Executable {
    fn as_ref(&self) -> &OsStr {
        self.as_os_str()
    }
}

impl Display for Executable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn is_bare_command(path: &Path) -> bool {
    path.components().count() == 1 && !path.is_absolute() && !path.has_root()
}

pub fn candidates_for(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => WINDOWS_GPG_CANDIDATES,
        Platform::Linux => LINUX_GPG_CANDIDATES,
        Platform::Mac => MAC_GPG_CANDIDATES,
        Platform::Solaris | Platform::Unknown => &[],
    }
}

/// Finds the GnuPG binary by probing a fixed, ordered candidate list.
#[derive(Debug, Clone, Copy)]
pub struct BinaryLocator {
    platform: Platform,
}

impl BinaryLocator {
    pub fn new(platform: Platform) -> Self {
        BinaryLocator { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn resolve(&self) -> Option<Executable> {
        let found = resolve_from(candidates_for(self.platform));
        match &found {
            Some(exe) => debug!("Resolved GnuPG binary for {}: {}", self.platform, exe),
            None => debug!("No GnuPG binary found for {}", self.platform),
        }
        found
    }
}

/// First candidate that exists, bare command names win without a filesystem probe.
pub fn resolve_from<S: AsRef<OsStr>>(candidates: &[S]) -> Option<Executable> {
    candidates.iter().find_map(|candidate| Executable::parse(candidate))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn first_existing_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let second = dir.path().join("gpg-second");
        let third = dir.path().join("gpg-third");
        fs::write(&second, "").unwrap();
        fs::write(&third, "").unwrap();
        let missing = dir.path().join("gpg-missing");

        let found = resolve_from(&[missing.as_os_str(), second.as_os_str(), third.as_os_str()]);
        assert_eq!(found.unwrap().as_path(), second.as_path());
    }

    #[test]
    fn none_when_nothing_exists() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a").join("gpg");
        let b = dir.path().join("b").join("gpg2");
        assert_eq!(resolve_from(&[a.as_os_str(), b.as_os_str()]), None);
        assert_eq!(resolve_from::<&str>(&[]), None);
    }

    #[test]
    fn bare_command_is_not_probed() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gpg");
        let found = resolve_from(&[missing.as_os_str(), OsStr::new("gpg2")]).unwrap();
        assert!(found.is_bare_command());
        assert_eq!(found.to_string(), "gpg2");
    }

    #[test]
    fn parse_rejects_empty_and_missing_paths() {
        assert_eq!(Executable::parse(""), None);
        assert_eq!(Executable::parse("/definitely/not/here/gpg"), None);
        assert!(Executable::parse("gpg").unwrap().is_bare_command());
    }

    #[test]
    fn platforms_without_list_resolve_to_none() {
        assert_eq!(BinaryLocator::new(Platform::Unknown).resolve(), None);
        assert_eq!(BinaryLocator::new(Platform::Solaris).resolve(), None);
    }

    #[test]
    fn resolve_is_stable() {
        let locator = BinaryLocator::new(Platform::current());
        assert_eq!(locator.resolve(), locator.resolve());
    }

    #[test]
    fn linux_list_ends_with_bare_names() {
        let list = candidates_for(Platform::Linux);
        assert_eq!(list.last(), Some(&"gpg"));
        assert!(BinaryLocator::new(Platform::Linux).resolve().is_some());
    }
}
