//! BME280 temperature / pressure / humidity driver for the Raspberry Pi I2C bus.
//!
//! ```no_run
//! use rpbme280::{Config, Session};
//!
//! let config = Config::default();
//! let mut session = Session::open(&config)?;
//! println!("{}", session.measure()?);
//! # Ok::<(), rpbme280::Error>(())
//! ```
//!
//! The sensor is put into normal mode with x1 oversampling on every
//! channel, 500 ms standby and the IIR filter off. Compensation uses the
//! datasheet's integer formulas.

pub mod calibration;
pub mod compensation;
pub mod config;
pub mod error;
pub mod poller;
pub mod profile;
pub mod registers;
pub mod sample;
pub mod session;
mod structs;
pub mod transport;

pub use compensation::compensate;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use poller::{PollPolicy, Readiness, StatusSource};
pub use session::Session;
pub use structs::{CalibrationSet, PhysicalReading, RawSample, TFine};
pub use transport::{Bus, Transport};
