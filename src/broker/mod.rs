pub mod engine;
pub mod message;
pub mod topic;

pub use engine::{Step, step, transition};
pub use message::{BrokerState, Outbound};
pub use topic::{ClientId, ClientSet};
