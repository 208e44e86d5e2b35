pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::{FixedClock, PresenceCalculator};
use crate::dataset::Dataset;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// What every command needs: configuration, the dataset location and a
/// calculator whose clock is read once per invocation.
pub struct Context {
    pub cfg: Config,
    pub json: bool,
    pub data_path: PathBuf,
    pub calculator: PresenceCalculator<FixedClock>,
}

impl Context {
    /// Load the dataset and check it against this run's "now".
    pub fn dataset(&self) -> AppResult<Dataset> {
        let data = Dataset::load(&self.data_path)?;
        data.validate(self.calculator.now())?;
        Ok(data)
    }

    pub fn today(&self) -> NaiveDate {
        self.calculator.now().date()
    }

    pub fn separator(&self) -> char {
        self.cfg.separator_char.chars().next().unwrap_or('-')
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
