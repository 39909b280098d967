use log::debug;

use crate::error::Result;
use crate::registers::{REG_CALIB_00, REG_CALIB_00_LEN, REG_CALIB_26, REG_CALIB_26_LEN};
use crate::structs::CalibrationSet;
use crate::transport::{Bus, Transport};

pub fn load<B: Bus>(transport: &mut Transport<B>) -> Result<CalibrationSet> {
    let mut block_a = [0u8; REG_CALIB_00_LEN];
    let mut block_b = [0u8; REG_CALIB_26_LEN];

    // 0x88 - 0xA1
    transport.read_registers(REG_CALIB_00, &mut block_a)?;
    // 0xE1 - 0xE7
    transport.read_registers(REG_CALIB_26, &mut block_b)?;

    let calib = decode(&block_a, &block_b);
    debug!("calibration: {:?}", calib);

    Ok(calib)
}

/// `block_a` starts at 0x88: nine little-endian words for dig_T1..dig_P9
/// (offsets 0..24), a reserved byte at 0xA0, then dig_H1 at 0xA1.
/// `block_b` starts at 0xE1, see [`h4`] and [`h5`] for the shared byte.
pub fn decode(
    block_a: &[u8; REG_CALIB_00_LEN],
    block_b: &[u8; REG_CALIB_26_LEN],
) -> CalibrationSet {
    let a = block_a;
    let b = block_b;

    CalibrationSet {
        dig_t1: u16_le(a[0], a[1]),
        dig_t2: i16_le(a[2], a[3]),
        dig_t3: i16_le(a[4], a[5]),

        dig_p1: u16_le(a[6], a[7]),
        dig_p2: i16_le(a[8], a[9]),
        dig_p3: i16_le(a[10], a[11]),
        dig_p4: i16_le(a[12], a[13]),
        dig_p5: i16_le(a[14], a[15]),
        dig_p6: i16_le(a[16], a[17]),
        dig_p7: i16_le(a[18], a[19]),
        dig_p8: i16_le(a[20], a[21]),
        dig_p9: i16_le(a[22], a[23]),

        dig_h1: a[25],
        dig_h2: i16_le(b[0], b[1]),
        dig_h3: b[2],
        dig_h4: h4(b[3], b[4]),
        dig_h5: h5(b[4], b[5]),
        dig_h6: b[6] as i8,
    }
}

fn u16_le(lsb: u8, msb: u8) -> u16 {
    u16::from_le_bytes([lsb, msb])
}

fn i16_le(lsb: u8, msb: u8) -> i16 {
    i16::from_le_bytes([lsb, msb])
}

/// dig_H4: 0xE4 holds bits 11:4, the low nibble of 0xE5 holds bits 3:0.
pub fn h4(e4: u8, e5: u8) -> i16 {
    (i16::from(e4) << 4) | i16::from(low_nibble(e5))
}

/// dig_H5: 0xE6 holds bits 11:4, the high nibble of 0xE5 holds bits 3:0.
pub fn h5(e5: u8, e6: u8) -> i16 {
    (i16::from(e6) << 4) | i16::from(high_nibble(e5))
}

fn low_nibble(byte: u8) -> u8 {
    byte & 0x0F
}

fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}
