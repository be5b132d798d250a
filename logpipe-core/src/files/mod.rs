mod resolve;


pub use resolve::{ResolveError, resolve_data_file};
