use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open I2C bus or select address: {0}")]
    Transport(#[source] rppal::i2c::Error),

    /// A register transaction failed or moved fewer bytes than requested.
    #[error("I/O error on register 0x{register:02X}: {source}")]
    Io {
        register: u8,
        #[source]
        source: io::Error,
    },

    #[error("unexpected chip id 0x{found:02X} (expected 0x{expected:02X})")]
    IdentityMismatch { found: u8, expected: u8 },
}

impl Error {
    /// `false` only for conditions a session may log and carry on from.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::IdentityMismatch { .. })
    }

    pub(crate) fn io(register: u8, source: io::Error) -> Self {
        Error::Io { register, source }
    }

    pub(crate) fn short_read(register: u8, expected: usize, actual: usize) -> Self {
        Error::io(
            register,
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("read {} of {} bytes", actual, expected),
            ),
        )
    }

    pub(crate) fn short_write(register: u8, expected: usize, actual: usize) -> Self {
        Error::io(
            register,
            io::Error::new(
                io::ErrorKind::WriteZero,
                format!("wrote {} of {} bytes", actual, expected),
            ),
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
