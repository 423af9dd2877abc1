pub mod config;
pub mod issue;

pub use config::Config;
pub use issue::Issue;
