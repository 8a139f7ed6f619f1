pub mod log;
pub mod str;

#[cfg(test)]
pub(crate) mod test_util;
