mod error;
mod execute;
mod params;


pub use error::*;
pub use execute::*;
pub use params::*;
