use anyhow::Error;
use gpgw_core::harness::HarnessErr;
use gpgw_core::pgp::PGPClient;

use crate::util::with_exit_code;

pub fn cmd_locate(client: &PGPClient) -> Result<(), (i32, Error)> {
    let executable =
        with_exit_code(client.get_executable().ok_or(HarnessErr::BinaryNotFound.into()))?;
    println!("{}", executable);
    Ok(())
}

pub fn cmd_interactive(client: &PGPClient) -> Result<(), (i32, Error)> {
    println!("{}", with_exit_code(client.cli_interactive_command())?);
    Ok(())
}
