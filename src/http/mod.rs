pub mod builder;
pub mod client;
pub mod dispatch;
pub mod executor;
