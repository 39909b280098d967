use std::fmt;

/// Factory trimming parameters, read once per session.
///
/// Field widths follow the datasheet's `dig_*` table. `dig_h4` and `dig_h5`
/// are 12-bit values assembled from nibbles shared in register 0xE5.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationSet {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,

    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,

    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    pub dig_h4: i16,
    pub dig_h5: i16,
    pub dig_h6: i8,
}

// pressure and temperature are 20-bit counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    pub pressure: u32,
    pub temperature: u32,
    pub humidity: u16,
}

/// Fine temperature carried from temperature compensation into the
/// pressure and humidity formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TFine(pub i32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalReading {
    pub temperature_c: f64,
    pub pressure_hpa: f64,
    pub humidity_rh: f64,
}

impl fmt::Display for PhysicalReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Temperature: {:.2} C", self.temperature_c)?;
        writeln!(f, "Pressure: {:.2} hPa", self.pressure_hpa)?;
        write!(f, "Humidity: {:.2} %", self.humidity_rh)
    }
}
