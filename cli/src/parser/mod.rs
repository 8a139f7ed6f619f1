pub(crate) mod sub_command;

use anyhow::Error;
use clap::{ArgAction, Parser};
use gpgw_core::config::GpgwConfig;
use sub_command::SubCommands;

use crate::{command, util};

#[derive(Parser)]
#[command(
    name = "gpgw",
    about = "Runs GnuPG key and message operations through a checked process harness",
    version
)]
pub struct CliParser {
    #[command(subcommand)]
    pub command: SubCommands,

    /// GnuPG binary to use instead of auto-detection.
    #[arg(long = "gpg", value_name = "path", global = true)]
    pub gpg: Option<String>,

    /// GnuPG home directory (keyrings and configuration).
    #[arg(long = "homedir", value_name = "dir", global = true)]
    pub home_dir: Option<String>,

    /// Increase log verbosity, repeat for more.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

pub fn handle_cli(config: &GpgwConfig, cli: CliParser) -> Result<(), (i32, Error)> {
    let client = util::build_client(config, cli.gpg.as_deref(), cli.home_dir.as_deref());

    match cli.command {
        SubCommands::Locate => command::locate::cmd_locate(&client),
        SubCommands::Interactive => command::locate::cmd_interactive(&client),
        SubCommands::ListKeys { blocks } => command::keys::cmd_list_keys(&client, blocks),
        SubCommands::Import { file } => command::keys::cmd_import(&client, &file),
        SubCommands::Fingerprint { file } => {
            command::keys::cmd_fingerprint(&client, file.as_deref())
        }
        SubCommands::Encrypt { recipient, file } => {
            command::crypto::cmd_encrypt(&client, &recipient, file.as_deref())
        }
        SubCommands::Decrypt { file } => command::crypto::cmd_decrypt(&client, file.as_deref()),
        SubCommands::EncryptSign { recipient, local_user, file } => {
            command::crypto::cmd_encrypt_sign(
                &client,
                &recipient,
                local_user.as_deref(),
                file.as_deref(),
            )
        }
        SubCommands::DecryptVerify { file } => {
            command::crypto::cmd_decrypt_verify(&client, file.as_deref())
        }
    }
}
