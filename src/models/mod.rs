pub mod chain;
pub mod condition;
pub mod reward;

pub use chain::*;
pub use condition::*;
pub use reward::*;
