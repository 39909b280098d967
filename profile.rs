use embedded_hal::delay::DelayNs;
use log::debug;

use crate::error::Result;
use crate::registers::{REG_CONFIG, REG_CTRL_HUM, REG_CTRL_MEAS, REG_RESET, RESET_COMMAND};
use crate::transport::{Bus, Transport};

const OSRS_T: u8 = 1; // Temperature oversampling x 1
const OSRS_P: u8 = 1; // Pressure oversampling x 1
const OSRS_H: u8 = 1; // Humidity oversampling x 1
const MODE: u8 = 3; // Normal mode
const T_SB: u8 = 4; // Tstandby 500ms
const FILTER: u8 = 0; // Filter off
const SPI3W_EN: u8 = 0; // 3-wire SPI Disable

const RESET_DELAY_MS: u32 = 3; // Start-up time after reset

pub const fn ctrl_hum() -> u8 {
    OSRS_H
}

/// ctrl_meas value: osrs_t in bits 7:5, osrs_p in 4:2, mode in 1:0.
pub const fn ctrl_meas() -> u8 {
    (OSRS_T << 5) | (OSRS_P << 2) | MODE
}

/// config value: t_sb in bits 7:5, filter in 4:2, spi3w_en in bit 0.
pub const fn config() -> u8 {
    (T_SB << 5) | (FILTER << 2) | SPI3W_EN
}

/// Puts the sensor into continuous sampling with the fixed profile.
///
/// ctrl_hum is written first: the device only latches it on the following
/// ctrl_meas write. Any failure leaves the device half-configured, so the
/// caller must drop the session.
pub fn configure<B: Bus>(transport: &mut Transport<B>) -> Result<()> {
    transport.write_register(REG_CTRL_HUM, ctrl_hum())?;
    transport.write_register(REG_CTRL_MEAS, ctrl_meas())?;
    transport.write_register(REG_CONFIG, config())?;
    debug!(
        "configured ctrl_hum=0x{:02X} ctrl_meas=0x{:02X} config=0x{:02X}",
        ctrl_hum(),
        ctrl_meas(),
        config()
    );

    Ok(())
}

/// Runs the power-on-reset procedure and waits for the device to come back.
pub fn soft_reset<B, D>(transport: &mut Transport<B>, delay: &mut D) -> Result<()>
where
    B: Bus,
    D: DelayNs,
{
    transport.write_register(REG_RESET, RESET_COMMAND)?;
    delay.delay_ms(RESET_DELAY_MS);
    debug!("soft reset");

    Ok(())
}
