// BME280 register addresses.
// cf. https://trac.switch-science.com/wiki/BME280

pub const ADDR_BME280: u16 = 0x76; // SDO to GND (0x77 when pulled up)
pub const CHIP_ID: u8 = 0x60;

pub const REG_ID: u8 = 0xD0;
pub const REG_RESET: u8 = 0xE0;
pub const REG_CTRL_HUM: u8 = 0xF2;
pub const REG_STATUS: u8 = 0xF3;
pub const REG_CTRL_MEAS: u8 = 0xF4;
pub const REG_CONFIG: u8 = 0xF5;

// 0xF7 - 0xFE: press_msb, press_lsb, press_xlsb, temp_msb, temp_lsb, temp_xlsb, hum_msb, hum_lsb
pub const REG_ADC_VALUE: u8 = 0xF7;
pub const REG_ADC_VALUE_LEN: usize = 8;

// 0x88 - 0xA1: dig_T1..dig_P9, one reserved byte, dig_H1
pub const REG_CALIB_00: u8 = 0x88;
pub const REG_CALIB_00_LEN: usize = 26;

// 0xE1 - 0xE7: dig_H2..dig_H6
pub const REG_CALIB_26: u8 = 0xE1;
pub const REG_CALIB_26_LEN: usize = 7;

pub const RESET_COMMAND: u8 = 0xB6;
pub const STATUS_MEASURING: u8 = 0x08; // status bit 3
