use std::env;
use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;

lazy_static! {
    static ref HOST_PLATFORM: Platform = Platform::classify(env::consts::OS);
}

/// Coarse host classification used to pick binary candidates and stream decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    Solaris,
    Unknown,
}

impl Platform {
    /// Classify a `std::env::consts::OS` style identifier (`windows`, `macos`, `linux`).
    /// Substrings are checked in order, so `uname -s` output such as `Darwin` counts as Windows.
    pub fn classify(os_name: &str) -> Self {
        let os_name = os_name.to_lowercase();
        if os_name.contains("win") {
            Platform::Windows
        } else if os_name.contains("mac") {
            Platform::Mac
        } else if ["nix", "nux", "aix"].iter().any(|s| os_name.contains(s)) {
            Platform::Linux
        } else if os_name.contains("sunos") {
            Platform::Solaris
        } else {
            Platform::Unknown
        }
    }

    /// The platform of the running process, classified once.
    pub fn current() -> Self {
        *HOST_PLATFORM
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Platform::*;
        match self {
            Windows => write!(f, "windows"),
            Mac => write!(f, "mac"),
            Linux => write!(f, "linux"),
            Solaris => write!(f, "solaris"),
            Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classify_known_names() {
        assert_eq!(Platform::classify("Windows 10"), Platform::Windows);
        assert_eq!(Platform::classify("windows"), Platform::Windows);
        assert_eq!(Platform::classify("Mac OS X"), Platform::Mac);
        assert_eq!(Platform::classify("macos"), Platform::Mac);
        assert_eq!(Platform::classify("Linux"), Platform::Linux);
        assert_eq!(Platform::classify("AIX"), Platform::Linux);
        assert_eq!(Platform::classify("unix"), Platform::Linux);
        assert_eq!(Platform::classify("SunOS"), Platform::Solaris);
    }

    #[test]
    fn win_substring_is_checked_first() {
        assert_eq!(Platform::classify("Darwin"), Platform::Windows);
        assert_eq!(Platform::classify("cygwin"), Platform::Windows);
    }

    #[test]
    fn classify_unmatched_is_unknown() {
        assert_eq!(Platform::classify("freebsd"), Platform::Unknown);
        assert_eq!(Platform::classify(""), Platform::Unknown);
    }

    #[test]
    fn current_is_stable() {
        let first = Platform::current();
        for _ in 0..8 {
            assert_eq!(first, Platform::current());
        }
        assert_eq!(first, Platform::classify(env::consts::OS));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn current_on_linux() {
        assert_eq!(Platform::current(), Platform::Linux);
    }
}
