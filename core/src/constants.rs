pub mod default_constants {
    pub const WINDOWS_GPG_CANDIDATES: &[&str] = &[
        r"C:\Program Files (x86)\GnuPG\bin\gpg.exe",
        r"C:\Program Files\GnuPG\bin\gpg.exe",
        r"C:\Program Files (x86)\Gpg4win\bin\gpg.exe",
        r"C:\Program Files\Gpg4win\bin\gpg.exe",
    ];

    pub const LINUX_GPG_CANDIDATES: &[&str] = &[
        "/usr/bin/gpg2",
        "/usr/bin/gpg",
        "/usr/local/bin/gpg2",
        "/usr/local/bin/gpg",
        "gpg2",
        "gpg",
    ];

    pub const MAC_GPG_CANDIDATES: &[&str] = &[
        "/opt/homebrew/bin/gpg",
        "/usr/local/bin/gpg",
        "/usr/local/MacGPG2/bin/gpg2",
        "gpg",
    ];

    pub const LOG_LEVEL: &str = "warn";
}

pub mod env_variables {
    pub const LOG_LEVEL_VAR: &str = "GPGW_LOG_LEVEL";
    pub const CONFIG_PATH_ENV: &str = "GPGW_CONFIG_PATH";
}
