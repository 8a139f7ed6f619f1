pub(crate) mod crypto;
pub(crate) mod keys;
pub(crate) mod locate;
