mod line_source;

#[cfg(test)]
mod tests;

pub use line_source::LineSource;
