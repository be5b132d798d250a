/// Final text produced by a pipeline run.
///
/// An empty result set is a successful run with `line_count == 0`, never an
/// error and never placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub body: String,
    pub line_count: usize,
}

impl PipelineOutput {
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}
