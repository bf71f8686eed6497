pub mod identifiers;
pub mod participant;
pub mod server_config;
pub mod session;
pub mod session_server;

pub use session::{Session, SessionError};
pub use session_server::SessionServer;
