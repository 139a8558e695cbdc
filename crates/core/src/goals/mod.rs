//! Goals module - savings goals and their derived progress.

mod goals_model;
mod goals_progress;


pub use goals_model::{Goal, GoalInput};
pub use goals_progress::{goal_progress_percent, GoalProgress, GoalsOverview};

use crate::stores::EntityStore;

pub type GoalStore = EntityStore<Goal>;
