use chrono::NaiveDate;
use log::{debug, error};
use std::sync::RwLock;

use super::pay_cycle_model::{PayCycleConfig, PayCycleInput, PayCycleView};
use super::pay_cycle_projector::{project_next_pay_date, upcoming_pay_dates};
use crate::constants::PAY_CYCLE_STORAGE_KEY;
use crate::errors::{Error, Result};
use crate::persistence::PersistenceAdapter;
use crate::stores::WriteOutcome;

/// Number of future pay dates included in a [`PayCycleView`].
const UPCOMING_PAY_DATES: usize = 3;

/// Owns the singleton pay-cycle config.
///
/// The projection is recomputed from the current config on every call and
/// never cached.
pub struct PayCycleService {
    persistence: PersistenceAdapter,
    config: RwLock<PayCycleConfig>,
}

impl PayCycleService {
    pub fn load(persistence: PersistenceAdapter) -> Self {
        let config: PayCycleConfig = persistence.load_or_default(PAY_CYCLE_STORAGE_KEY);
        debug!("Loaded pay cycle config: {:?}", config);
        Self {
            persistence,
            config: RwLock::new(config),
        }
    }

    pub fn config(&self) -> Result<PayCycleConfig> {
        self.config
            .read()
            .map(|config| *config)
            .map_err(|_| Error::Unexpected("pay cycle lock poisoned".to_string()))
    }

    pub fn view(&self) -> Result<PayCycleView> {
        Ok(Self::view_of(self.config()?))
    }

    pub fn next_pay_date(&self) -> Result<Option<NaiveDate>> {
        let config = self.config()?;
        Ok(project_next_pay_date(config.last_pay_date, config.frequency))
    }

    /// Validates and stores new settings, returning the fresh projection.
    pub fn update(&self, input: PayCycleInput) -> Result<WriteOutcome<PayCycleView>> {
        let new_config = input.into_config()?;
        let mut config = self
            .config
            .write()
            .map_err(|_| Error::Unexpected("pay cycle lock poisoned".to_string()))?;
        *config = new_config;

        let storage_error = match self.persistence.save(PAY_CYCLE_STORAGE_KEY, &*config) {
            Ok(()) => None,
            Err(e) => {
                error!("Could not save pay cycle config: {}", e);
                Some(e)
            }
        };
        Ok(WriteOutcome::new(Self::view_of(*config), storage_error))
    }

    fn view_of(config: PayCycleConfig) -> PayCycleView {
        PayCycleView {
            config,
            next_pay_date: project_next_pay_date(config.last_pay_date, config.frequency),
            upcoming_pay_dates: upcoming_pay_dates(
                config.last_pay_date,
                config.frequency,
                UPCOMING_PAY_DATES,
            ),
        }
    }
}
