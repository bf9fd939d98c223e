//! Town action pipeline.
//!
//! Input sources (keyboard, pointer, scripts) never touch the [`Town`]
//! directly. They push [`TownAction`]s onto the [`TownActionQueue`]; the
//! executor drains the queue once per frame in `TownSet::Edit`, applies each
//! action, and records the outcome in the [`ActionResultLog`].
//!
//! [`Town`]: crate::town::Town

pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::*;
pub use executor::{execute_action, execute_queued_actions};
pub use plugin::TownActionsPlugin;
pub use queue::*;
pub use result_log::ActionResultLog;
pub use results::*;
