use anyhow::Error;
use gpgw_core::pgp::PGPClient;
use secrecy::ExposeSecret;

use crate::util::{read_input, with_exit_code};

pub fn cmd_encrypt(
    client: &PGPClient,
    recipient: &str,
    file: Option<&str>,
) -> Result<(), (i32, Error)> {
    let data = with_exit_code(read_input(file))?;
    print!("{}", with_exit_code(client.encrypt(&data, recipient))?);
    Ok(())
}

pub fn cmd_decrypt(client: &PGPClient, file: Option<&str>) -> Result<(), (i32, Error)> {
    let data = with_exit_code(read_input(file))?;
    let plaintext = with_exit_code(client.decrypt(&data))?;
    print!("{}", plaintext.expose_secret());
    Ok(())
}

pub fn cmd_encrypt_sign(
    client: &PGPClient,
    recipient: &str,
    local_user: Option<&str>,
    file: Option<&str>,
) -> Result<(), (i32, Error)> {
    let data = with_exit_code(read_input(file))?;
    print!("{}", with_exit_code(client.encrypt_and_sign(&data, recipient, local_user))?);
    Ok(())
}

pub fn cmd_decrypt_verify(client: &PGPClient, file: Option<&str>) -> Result<(), (i32, Error)> {
    let data = with_exit_code(read_input(file))?;
    let verified = with_exit_code(client.decrypt_and_verify(&data))?;
    let signer = verified.primary_fpr.as_ref().unwrap_or(&verified.signing_fpr);
    eprintln!("Good signature from {}", signer);
    print!("{}", verified.plaintext.expose_secret());
    Ok(())
}
