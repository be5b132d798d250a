mod command;
mod error;
pub mod operators;
mod output;
mod run;

#[cfg(test)]
mod tests;

pub use command::*;
pub use error::*;
pub use operators::{Lines, Operator, apply};
pub use output::*;
pub use run::*;
