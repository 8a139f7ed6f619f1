use anyhow::Error;
use gpgw_core::pgp::PGPClient;

use crate::util::{read_input_bytes, with_exit_code};

pub fn cmd_list_keys(client: &PGPClient, blocks: bool) -> Result<(), (i32, Error)> {
    if blocks {
        let blocks = with_exit_code(client.list_key_blocks())?;
        println!("{}", blocks.join("\n\n"));
    } else {
        print!("{}", with_exit_code(client.list_keys())?);
    }
    Ok(())
}

pub fn cmd_import(client: &PGPClient, file: &str) -> Result<(), (i32, Error)> {
    print!("{}", with_exit_code(client.import_key_file(file))?);
    Ok(())
}

pub fn cmd_fingerprint(client: &PGPClient, file: Option<&str>) -> Result<(), (i32, Error)> {
    let fingerprint = match file {
        Some(path) => with_exit_code(client.fingerprint_key_file(path))?,
        None => {
            let key_data = with_exit_code(read_input_bytes(None))?;
            with_exit_code(client.fingerprint(key_data))?
        }
    };
    println!("{}", fingerprint);
    Ok(())
}
