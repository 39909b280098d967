use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};
use rppal::hal::Delay;
use rppal::i2c::I2c;

use crate::calibration;
use crate::compensation;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::poller::{self, PollPolicy};
use crate::profile;
use crate::registers::{CHIP_ID, REG_ID};
use crate::sample;
use crate::structs::{CalibrationSet, PhysicalReading};
use crate::transport::{self, Bus, Transport};

/// Returns [`Error::IdentityMismatch`] (non-fatal) when the id is not the
/// BME280's; clones and related parts report other values.
pub fn check_identity<B: Bus>(transport: &mut Transport<B>) -> Result<u8> {
    let id = transport.read_register(REG_ID)?;
    if id != CHIP_ID {
        return Err(Error::IdentityMismatch {
            found: id,
            expected: CHIP_ID,
        });
    }
    Ok(id)
}

/// One configured sensor with its calibration.
///
/// Owns the bus exclusively. Calibration is read and the warm-up is slept
/// once in [`Session::start`]; every [`Session::measure`] only polls.
pub struct Session<B, D = Delay> {
    transport: Transport<B>,
    delay: D,
    calib: CalibrationSet,
    poll: PollPolicy,
}

impl Session<I2c, Delay> {
    pub fn open(config: &Config) -> Result<Self> {
        let transport = transport::open(config.bus, config.address)?;
        Session::start(transport, Delay::new(), config)
    }
}

impl<B: Bus, D: DelayNs> Session<B, D> {
    pub fn start(mut transport: Transport<B>, mut delay: D, config: &Config) -> Result<Self> {
        match check_identity(&mut transport) {
            Ok(id) => info!("BME280 detected (chip-id 0x{:02X})", id),
            Err(e) if !e.is_fatal() => warn!("{}, continuing", e),
            Err(e) => return Err(e),
        }

        if config.soft_reset {
            profile::soft_reset(&mut transport, &mut delay)?;
        }

        let calib = calibration::load(&mut transport)?;
        profile::configure(&mut transport)?;
        poller::warm_up(&mut delay, &config.poll);

        Ok(Session {
            transport,
            delay,
            calib,
            poll: config.poll,
        })
    }

    /// Waits for a finished conversion, reads it and compensates it.
    pub fn measure(&mut self) -> Result<PhysicalReading> {
        poller::poll(&mut self.transport, &mut self.delay, &self.poll);

        let raw = sample::read(&mut self.transport)?;
        debug!("raw: {:?}", raw);

        Ok(compensation::compensate(&raw, &self.calib))
    }

    pub fn calibration(&self) -> &CalibrationSet {
        &self.calib
    }

    pub fn transport(&self) -> &Transport<B> {
        &self.transport
    }

    pub fn into_parts(self) -> (Transport<B>, D) {
        (self.transport, self.delay)
    }
}
