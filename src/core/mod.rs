//! Time-accounting engine: pure functions of the entries, sessions and
//! projects handed in, plus an injected clock.

pub mod calculator;
pub mod clock;
pub mod logic;
pub mod period;

pub use calculator::target::DAILY_TARGET_MS;
pub use clock::{Clock, FixedClock, SystemClock};
pub use logic::PresenceCalculator;
pub use period::{DateRange, PeriodAggregator, PeriodQuery};
