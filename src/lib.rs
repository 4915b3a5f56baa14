pub mod config;
pub mod content;
pub mod logger;
pub mod messages;
pub mod server;
mod test_data;
mod view;
