//! Active period resolution
//!
//! Statistics and listings only consider transactions dated inside the
//! active period. Which month that is gets decided here, so the views never
//! read the clock themselves.

use crate::config::settings::Settings;
use crate::error::FinanceResult;
use crate::models::Period;

/// Decides which month the views are showing
pub trait PeriodResolver {
    fn active_period(&self) -> Period;
}

/// The month containing today's date in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentMonth;

impl PeriodResolver for CurrentMonth {
    fn active_period(&self) -> Period {
        Period::current_month()
    }
}

/// A month fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPeriod(pub Period);

impl PeriodResolver for FixedPeriod {
    fn active_period(&self) -> Period {
        self.0
    }
}

/// Pick the resolver for this run
///
/// An explicit `--period` flag wins over the `period_override` setting;
/// with neither, the current month is used.
pub fn resolver_for(
    flag: Option<Period>,
    settings: &Settings,
) -> FinanceResult<Box<dyn PeriodResolver>> {
    let pinned = match flag {
        Some(period) => Some(period),
        None => settings.pinned_period()?,
    };

    Ok(match pinned {
        Some(period) => Box::new(FixedPeriod(period)),
        None => Box::new(CurrentMonth),
    })
}
