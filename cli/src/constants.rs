#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpgwExitCode {
    Error = 1,
    InvalidArgs = 2,
    ConfigError = 100,
    NotExecutable = 126,
    CommandNotFound = 127,
    PGPError = 199,
}

impl From<GpgwExitCode> for i32 {
    fn from(val: GpgwExitCode) -> Self {
        val as i32
    }
}
