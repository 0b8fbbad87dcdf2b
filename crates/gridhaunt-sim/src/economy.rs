//! Soul economy: time-based regeneration gating ghost summons.

use thiserror::Error;

use gridhaunt_core::constants::DEFAULT_REGEN_PERIOD;
use gridhaunt_core::state::SoulView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EconomyError {
    #[error("no souls available to consume")]
    Underflow,
}

/// Soul pool. Invariant: `current <= max`.
#[derive(Debug, Clone, PartialEq)]
pub struct SoulEconomy {
    current: u32,
    max: u32,
    regen_accumulator: f32,
    regen_period: f32,
}

impl Default for SoulEconomy {
    fn default() -> Self {
        Self::new(0, DEFAULT_REGEN_PERIOD)
    }
}

impl SoulEconomy {
    pub fn new(max: u32, regen_period: f32) -> Self {
        let mut economy = Self {
            current: 0,
            max: 0,
            regen_accumulator: 0.0,
            regen_period: DEFAULT_REGEN_PERIOD,
        };
        economy.initialize(max, regen_period);
        economy
    }

    /// Empty pool with the given ceiling and period.
    pub fn initialize(&mut self, max: u32, regen_period: f32) {
        self.current = 0;
        self.max = max;
        self.regen_accumulator = 0.0;
        self.regen_period = regen_period;
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn regen_accumulator(&self) -> f32 {
        self.regen_accumulator
    }

    pub fn regen_period(&self) -> f32 {
        self.regen_period
    }

    /// Fraction of the way to the next soul, 0.0 when nothing regenerates.
    pub fn regen_progress(&self) -> f32 {
        if self.max == 0 || self.regen_period <= 0.0 {
            return 0.0;
        }
        (self.regen_accumulator / self.regen_period).clamp(0.0, 1.0)
    }

    /// Accumulate elapsed time and award whole periods as souls. Several souls
    /// can arrive in one call; `current` is clamped to `max`. Returns the
    /// number of souls awarded.
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.current >= self.max || self.max == 0 || self.regen_period <= 0.0 {
            return 0;
        }

        self.regen_accumulator += dt.max(0.0);
        let whole_periods = (self.regen_accumulator / self.regen_period).floor();
        if whole_periods < 1.0 {
            return 0;
        }

        self.regen_accumulator -= whole_periods * self.regen_period;
        let headroom = self.max - self.current;
        let awarded = (whole_periods.min(u32::MAX as f32) as u32).min(headroom);
        self.current += awarded;
        if self.current == self.max {
            self.regen_accumulator = 0.0;
        }
        awarded
    }

    pub fn can_consume(&self) -> bool {
        self.current > 0
    }

    /// Spend one soul. Returns the remaining count.
    pub fn try_consume(&mut self) -> Result<u32, EconomyError> {
        if self.current == 0 {
            return Err(EconomyError::Underflow);
        }
        self.current -= 1;
        Ok(self.current)
    }

    /// Spend one soul; with none left, log and leave state unchanged.
    pub fn consume(&mut self) {
        if let Err(err) = self.try_consume() {
            tracing::warn!(%err, "soul consume ignored");
        }
    }

    /// Raise the ceiling, e.g. when a human is converted.
    pub fn increase_max(&mut self, amount: u32) {
        self.max = self.max.saturating_add(amount);
    }

    pub fn view(&self) -> SoulView {
        SoulView {
            current: self.current,
            max: self.max,
            regen_progress: self.regen_progress(),
        }
    }
}
