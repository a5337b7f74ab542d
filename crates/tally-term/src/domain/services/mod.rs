mod app_state;
mod events;

pub use app_state::*;
pub use events::*;
