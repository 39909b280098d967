use crate::error::Result;
use crate::registers::{REG_ADC_VALUE, REG_ADC_VALUE_LEN};
use crate::structs::RawSample;
use crate::transport::{Bus, Transport};

pub fn read<B: Bus>(transport: &mut Transport<B>) -> Result<RawSample> {
    let mut data = [0u8; REG_ADC_VALUE_LEN];
    // 0xF7 - 0xFE
    transport.read_registers(REG_ADC_VALUE, &mut data)?;

    Ok(RawSample::from_burst(&data))
}

impl RawSample {
    /// Unpacks the 8 data registers. The xlsb bytes carry their 4 valid bits
    /// in the high nibble.
    pub fn from_burst(data: &[u8; REG_ADC_VALUE_LEN]) -> Self {
        RawSample {
            pressure: adc20(data[0], data[1], data[2]),
            temperature: adc20(data[3], data[4], data[5]),
            humidity: u16::from_be_bytes([data[6], data[7]]),
        }
    }
}

fn adc20(msb: u8, lsb: u8, xlsb: u8) -> u32 {
    (u32::from(msb) << 12) | (u32::from(lsb) << 4) | (u32::from(xlsb) >> 4)
}
