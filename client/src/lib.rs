pub mod agent;
pub mod client_config;
pub mod session_client;

pub use agent::Agent;
pub use session_client::{ClientError, SessionClient, SessionEvent};
