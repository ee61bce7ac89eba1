pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod session;
pub mod subnet;
pub mod validate;

pub use models::{calculate_mask, Ipv4};
pub use session::Session;
pub use subnet::is_same_subnet;
pub use validate::{split_cidr, validate_cidr, validate_ip};
