mod handlers;
mod query_gateway;
mod response;

pub use handlers::QueryHandler;
pub use query_gateway::QueryGateway;
pub use response::LINE_COUNT_HEADER;
