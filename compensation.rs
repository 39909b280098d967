//! Integer compensation formulas from the BME280 datasheet (section 4.2.3).
//!
//! Every step wraps on overflow and shifts arithmetically, matching the
//! reference code on a two's-complement machine bit for bit. Do not
//! "simplify" the shifts: the truncation is part of the calibration.

use std::num::Wrapping as W;

use crate::structs::{CalibrationSet, PhysicalReading, RawSample, TFine};

/// Upper clamp for the humidity accumulator, 100 %RH in Q22.10.
const HUMIDITY_MAX: i32 = 419_430_400;

/// Compensates all three channels, temperature first.
pub fn compensate(raw: &RawSample, calib: &CalibrationSet) -> PhysicalReading {
    let (temperature_c, t_fine) = compensate_temperature(raw.temperature, calib);

    PhysicalReading {
        temperature_c,
        pressure_hpa: compensate_pressure(raw.pressure, calib, t_fine),
        humidity_rh: compensate_humidity(raw.humidity, calib, t_fine),
    }
}

/// Returns degrees Celsius and the fine temperature needed by the other two
/// channels.
pub fn compensate_temperature(raw: u32, calib: &CalibrationSet) -> (f64, TFine) {
    let adc = W(raw as i32);
    let t1 = W(i32::from(calib.dig_t1));
    let t2 = W(i32::from(calib.dig_t2));
    let t3 = W(i32::from(calib.dig_t3));

    let var1 = (((adc >> 3) - (t1 << 1)) * t2) >> 11;
    let var2 = (((((adc >> 4) - t1) * ((adc >> 4) - t1)) >> 12) * t3) >> 14;
    let t_fine = var1 + var2;

    // 0.01 degC
    let t = (t_fine * W(5) + W(128)) >> 8;

    (f64::from(t.0) / 100.0, TFine(t_fine.0))
}

/// Returns hectopascal. Yields exactly `0.0` when the calibration drives the
/// divisor to zero.
pub fn compensate_pressure(raw: u32, calib: &CalibrationSet, t_fine: TFine) -> f64 {
    let p1 = W(i64::from(calib.dig_p1));
    let p2 = W(i64::from(calib.dig_p2));
    let p3 = W(i64::from(calib.dig_p3));
    let p4 = W(i64::from(calib.dig_p4));
    let p5 = W(i64::from(calib.dig_p5));
    let p6 = W(i64::from(calib.dig_p6));
    let p7 = W(i64::from(calib.dig_p7));
    let p8 = W(i64::from(calib.dig_p8));
    let p9 = W(i64::from(calib.dig_p9));

    let mut var1 = W(i64::from(t_fine.0)) - W(128_000);
    let mut var2 = var1 * var1 * p6;
    var2 = var2 + ((var1 * p5) << 17);
    var2 = var2 + (p4 << 35);
    var1 = ((var1 * var1 * p3) >> 8) + ((var1 * p2) << 12);
    var1 = ((W(1i64 << 47) + var1) * p1) >> 33;

    if var1.0 == 0 {
        return 0.0;
    }

    let mut p = W(1_048_576) - W(i64::from(raw));
    p = (((p << 31) - var2) * W(3125)) / var1;
    var1 = (p9 * (p >> 13) * (p >> 13)) >> 25;
    var2 = (p8 * p) >> 19;
    // Q24.8 Pa
    p = ((p + var1 + var2) >> 8) + (p7 << 4);

    p.0 as f64 / 25600.0
}

/// Returns percent relative humidity, always within `0.0..=100.0`.
pub fn compensate_humidity(raw: u16, calib: &CalibrationSet, t_fine: TFine) -> f64 {
    let adc = W(i32::from(raw));
    let h1 = W(i32::from(calib.dig_h1));
    let h2 = W(i32::from(calib.dig_h2));
    let h3 = W(i32::from(calib.dig_h3));
    let h4 = W(i32::from(calib.dig_h4));
    let h5 = W(i32::from(calib.dig_h5));
    let h6 = W(i32::from(calib.dig_h6));

    let x = W(t_fine.0) - W(76_800);

    let offset = ((adc << 14) - (h4 << 20) - (h5 * x) + W(16_384)) >> 15;
    let curve = ((x * h6) >> 10) * (((x * h3) >> 11) + W(32_768));
    let gain = ((((curve >> 10) + W(2_097_152)) * h2) + W(8_192)) >> 14;

    let mut v = offset * gain;
    v = v - (((((v >> 15) * (v >> 15)) >> 7) * h1) >> 4);

    let v = v.0.max(0).min(HUMIDITY_MAX);

    f64::from(v >> 12) / 1024.0
}
