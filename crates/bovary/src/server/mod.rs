pub mod logging;
pub mod reactions;
