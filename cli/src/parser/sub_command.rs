use clap::Subcommand;

#[derive(Subcommand)]
pub enum SubCommands {
    /// Print the GnuPG binary that would be used.
    Locate,

    /// Print a GnuPG command line for manual use with the same home directory.
    Interactive,

    /// List the keys in the keyring.
    #[command(alias = "list")]
    ListKeys {
        /// Drop the keyring banner and separate keys by a blank line.
        #[arg(short = 'b', long = "blocks")]
        blocks: bool,
    },

    /// Import keys from a file.
    Import {
        /// Key file, armored or binary.
        file: String,
    },

    /// Print the fingerprint of a key without importing it.
    #[command(alias = "fpr")]
    Fingerprint {
        /// Key file (reads key material from stdin if omitted).
        file: Option<String>,
    },

    /// Encrypt to a recipient, armored output on stdout.
    Encrypt {
        /// Recipient key ID, fingerprint or email.
        #[arg(short = 'r', long = "recipient", required = true)]
        recipient: String,
        /// Input file (stdin if omitted).
        file: Option<String>,
    },

    /// Decrypt an armored message to stdout.
    Decrypt {
        /// Input file (stdin if omitted).
        file: Option<String>,
    },

    /// Encrypt to a recipient and sign.
    EncryptSign {
        /// Recipient key ID, fingerprint or email.
        #[arg(short = 'r', long = "recipient", required = true)]
        recipient: String,
        /// Signing key (GnuPG's default key if omitted).
        #[arg(short = 'u', long = "local-user")]
        local_user: Option<String>,
        /// Input file (stdin if omitted).
        file: Option<String>,
    },

    /// Decrypt a message and require a valid signature.
    DecryptVerify {
        /// Input file (stdin if omitted).
        file: Option<String>,
    },
}
