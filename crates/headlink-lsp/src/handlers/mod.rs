mod configuration;
mod lifecycle;
mod links;
mod notifications;
mod search;

pub use configuration::*;
pub use lifecycle::*;
pub use links::*;
pub use notifications::*;
pub use search::*;
