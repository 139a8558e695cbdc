//! Pay cycle module - pay frequency, the next-payday projector and its service.

mod pay_cycle_model;
mod pay_cycle_projector;
mod pay_cycle_service;


pub use pay_cycle_model::{PayCycleConfig, PayCycleInput, PayCycleView, PayFrequency};
pub use pay_cycle_projector::{project_next_pay_date, project_with_raw_frequency, upcoming_pay_dates};
pub use pay_cycle_service::PayCycleService;
