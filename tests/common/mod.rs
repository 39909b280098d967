//! Fake BME280 register file and a recording delay for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use rpbme280::registers::{
    CHIP_ID, REG_ADC_VALUE, REG_CALIB_00, REG_CALIB_26, REG_ID, REG_STATUS,
};
use rpbme280::{Bus, CalibrationSet};

/// Calibration block at 0x88: datasheet example T/P trimming, reserved byte,
/// dig_H1 = 75.
pub const BLOCK_A: [u8; 26] = [
    0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B, 0x27, 0x0B, 0x8C, 0x00,
    0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17, 0x00, 0x4B,
];

/// Calibration block at 0xE1: H2 = 362, H3 = 0, H4 = 313, H5 = 50, H6 = 30.
pub const BLOCK_B: [u8; 7] = [0x6A, 0x01, 0x00, 0x13, 0x29, 0x03, 0x1E];

/// adc_P = 415148, adc_T = 519888, adc_H = 30000
pub const BURST: [u8; 8] = [0x65, 0x5A, 0xC0, 0x7E, 0xED, 0x00, 0x75, 0x30];

pub fn reference_calibration() -> CalibrationSet {
    CalibrationSet {
        dig_t1: 27504,
        dig_t2: 26435,
        dig_t3: -1000,
        dig_p1: 36477,
        dig_p2: -10685,
        dig_p3: 3024,
        dig_p4: 2855,
        dig_p5: 140,
        dig_p6: -7,
        dig_p7: 15500,
        dig_p8: -14600,
        dig_p9: 6000,
        dig_h1: 75,
        dig_h2: 362,
        dig_h3: 0,
        dig_h4: 313,
        dig_h5: 50,
        dig_h6: 30,
    }
}

/// 256 registers behind an auto-incrementing pointer.
pub struct FakeSensor {
    pub regs: [u8; 256],
    pointer: u8,
    /// Register writes, in order.
    pub writes: Vec<(u8, u8)>,
    /// Start register of every read.
    pub reads: Vec<u8>,
    /// Served for status reads before falling back to `regs[REG_STATUS]`.
    pub status_script: VecDeque<u8>,
    pub status_reads: usize,
    /// Reads starting here return half the requested bytes.
    pub short_read_at: Option<u8>,
    /// Writes to this register only move one byte.
    pub short_write_at: Option<u8>,
}

impl FakeSensor {
    pub fn blank() -> Self {
        FakeSensor {
            regs: [0; 256],
            pointer: 0,
            writes: Vec::new(),
            reads: Vec::new(),
            status_script: VecDeque::new(),
            status_reads: 0,
            short_read_at: None,
            short_write_at: None,
        }
    }

    /// A genuine chip with the reference calibration and a finished
    /// conversion of the reference sample.
    pub fn reference() -> Self {
        let mut fake = FakeSensor::blank();
        fake.regs[REG_ID as usize] = CHIP_ID;
        fake.load(REG_CALIB_00, &BLOCK_A);
        fake.load(REG_CALIB_26, &BLOCK_B);
        fake.load(REG_ADC_VALUE, &BURST);
        fake
    }

    pub fn load(&mut self, start: u8, bytes: &[u8]) {
        let start = start as usize;
        self.regs[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn reads_at(&self, register: u8) -> usize {
        self.reads.iter().filter(|&&r| r == register).count()
    }
}

impl Bus for FakeSensor {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        match *buffer {
            [register] => {
                self.pointer = register;
                Ok(1)
            }
            [register, value] => {
                if self.short_write_at == Some(register) {
                    return Ok(1);
                }
                self.pointer = register;
                self.regs[register as usize] = value;
                self.writes.push((register, value));
                Ok(2)
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unexpected write length",
            )),
        }
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let start = self.pointer;
        self.reads.push(start);

        if start == REG_STATUS && buffer.len() == 1 {
            self.status_reads += 1;
            buffer[0] = self
                .status_script
                .pop_front()
                .unwrap_or(self.regs[REG_STATUS as usize]);
            return Ok(1);
        }

        let n = if self.short_read_at == Some(start) {
            buffer.len() / 2
        } else {
            buffer.len()
        };
        for (i, b) in buffer.iter_mut().take(n).enumerate() {
            *b = self.regs[start.wrapping_add(i as u8) as usize];
        }
        Ok(n)
    }
}

/// Records every requested delay instead of blocking.
#[derive(Debug, Default)]
pub struct RecordingDelay(pub Vec<Duration>);

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Duration::from_nanos(ns.into()));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.push(Duration::from_micros(us.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Duration::from_millis(ms.into()));
    }
}

pub fn ms(n: u32) -> Duration {
    Duration::from_millis(n.into())
}
