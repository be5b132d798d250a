use crate::pipeline::PipelineError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Forward-only reader yielding one line at a time, terminator included.
///
/// The underlying file is closed when the source is dropped.
pub struct LineSource {
    reader: BufReader<File>,
    buf: Vec<u8>,
    done: bool,
}

impl LineSource {
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path)?;
        if !file.metadata()?.is_file() {
            return Err(PipelineError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )));
        }

        Ok(Self {
            reader: BufReader::new(file),
            buf: Vec::new(),
            done: false,
        })
    }
}

impl Iterator for LineSource {
    type Item = Result<String, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            // Log files are not guaranteed to be UTF-8.
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => {
                self.done = true;
                Some(Err(PipelineError::Io(e)))
            }
        }
    }
}
