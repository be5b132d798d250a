pub mod cli;
pub mod conf;
pub mod files;
pub mod logging;
pub mod pipeline;
mod proxy;
pub mod query;
pub mod server;
pub mod source;

pub use proxy::LINE_COUNT_HEADER;
