use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::error::Result;
use crate::registers::{REG_STATUS, STATUS_MEASURING};
use crate::transport::{Bus, Transport};

pub trait StatusSource {
    fn read_status(&mut self) -> Result<u8>;
}

impl<B: Bus> StatusSource for Transport<B> {
    fn read_status(&mut self) -> Result<u8> {
        self.read_register(REG_STATUS)
    }
}

/// Timing of the readiness wait. This is the only timeout in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Sleep once after configuration, before the first status read.
    pub warm_up_ms: u32,
    /// Sleep after each status read that still shows a conversion running.
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy {
            warm_up_ms: 100,
            interval_ms: 20,
            max_attempts: 10,
        }
    }
}

/// Outcome of a readiness wait. Neither variant is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready { attempts: u32 },
    Exhausted { attempts: u32 },
}

pub fn warm_up(delay: &mut impl DelayNs, policy: &PollPolicy) {
    delay.delay_ms(policy.warm_up_ms);
}

/// Polls the status register until the measuring bit clears.
///
/// A failed status read counts as "still measuring". Running out of
/// attempts is logged and reported, never raised: the caller reads the
/// data registers anyway and may get the previous conversion.
pub fn poll<S, D>(status: &mut S, delay: &mut D, policy: &PollPolicy) -> Readiness
where
    S: StatusSource,
    D: DelayNs,
{
    for attempt in 1..=policy.max_attempts {
        match status.read_status() {
            Ok(st) if st & STATUS_MEASURING == 0 => {
                debug!("ready after {} status read(s)", attempt);
                return Readiness::Ready { attempts: attempt };
            }
            Ok(st) => debug!("measuring (status=0x{:02X})", st),
            Err(e) => debug!("status read failed: {}", e),
        }
        delay.delay_ms(policy.interval_ms);
    }

    warn!(
        "measuring bit still set after {} reads, reading data anyway",
        policy.max_attempts
    );
    Readiness::Exhausted {
        attempts: policy.max_attempts,
    }
}

/// [`warm_up`] followed by [`poll`], for a freshly configured device.
pub fn wait_until_ready<S, D>(status: &mut S, delay: &mut D, policy: &PollPolicy) -> Readiness
where
    S: StatusSource,
    D: DelayNs,
{
    warm_up(delay, policy);
    poll(status, delay, policy)
}
