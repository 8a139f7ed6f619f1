pub mod config;
pub mod constants;
pub mod harness;
pub mod locator;
pub mod pgp;
pub mod platform;
pub mod util;
