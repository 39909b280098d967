use std::io;

use log::debug;
use rppal::i2c::I2c;

use crate::error::{Error, Result};

/// Raw byte pipe to one addressed device.
///
/// Both calls return the number of bytes actually moved; [`Transport`]
/// turns any mismatch into an error.
pub trait Bus {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize>;
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize>;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        (**self).write(buffer)
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        (**self).read(buffer)
    }
}

impl Bus for I2c {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        I2c::write(self, buffer).map_err(into_io)
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        I2c::read(self, buffer).map_err(into_io)
    }
}

fn into_io(err: rppal::i2c::Error) -> io::Error {
    match err {
        rppal::i2c::Error::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}

pub fn open(bus: u8, address: u16) -> Result<Transport<I2c>> {
    let mut i2c = I2c::with_bus(bus).map_err(Error::Transport)?;
    i2c.set_slave_address(address).map_err(Error::Transport)?;
    debug!("opened /dev/i2c-{} at 0x{:02X}", bus, address);

    Ok(Transport::new(i2c))
}

/// Register-level access on top of a [`Bus`].
///
/// Owns the bus exclusively for the lifetime of a session.
pub struct Transport<B> {
    bus: B,
}

impl<B: Bus> Transport<B> {
    pub fn new(bus: B) -> Self {
        Transport { bus }
    }

    pub fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        let buf = [register, value];
        let n = self.bus.write(&buf).map_err(|e| Error::io(register, e))?;
        if n != buf.len() {
            return Err(Error::short_write(register, buf.len(), n));
        }
        Ok(())
    }

    pub fn read_register(&mut self, register: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_registers(register, &mut buf)?;
        Ok(buf[0])
    }

    /// Burst read: one address write, then `buffer.len()` bytes. The device
    /// auto-increments its register pointer.
    pub fn read_registers(&mut self, start: u8, buffer: &mut [u8]) -> Result<()> {
        let n = self.bus.write(&[start]).map_err(|e| Error::io(start, e))?;
        if n != 1 {
            return Err(Error::short_write(start, 1, n));
        }
        let n = self.bus.read(buffer).map_err(|e| Error::io(start, e))?;
        if n != buffer.len() {
            return Err(Error::short_read(start, buffer.len(), n));
        }
        Ok(())
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}
