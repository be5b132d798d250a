use crate::pipeline::PipelineError;
use crate::source::LineSource;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn collect(source: LineSource) -> Vec<String> {
    source.collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn yields_lines_in_file_order_with_terminators() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "GET /a 200\nGET /b 404\nPOST /a 200\n").unwrap();

    // Act
    let lines = collect(LineSource::open(&path).unwrap());

    // Assert
    assert_eq!(lines, vec!["GET /a 200\n", "GET /b 404\n", "POST /a 200\n"]);
}

#[test]
fn last_line_without_terminator_is_kept_as_is() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tail.log");
    fs::write(&path, "first\r\nsecond").unwrap();

    let lines = collect(LineSource::open(&path).unwrap());

    assert_eq!(lines, vec!["first\r\n", "second"]);
}

#[test]
fn empty_file_yields_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();

    let mut source = LineSource::open(&path).unwrap();

    assert!(source.next().is_none());
    assert!(source.next().is_none());
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.log");
    fs::write(&path, b"ok \xff\n").unwrap();

    let lines = collect(LineSource::open(&path).unwrap());

    assert_eq!(lines, vec!["ok \u{fffd}\n"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();

    let result = LineSource::open(&dir.path().join("nope.log"));

    assert!(matches!(result, Err(PipelineError::Io(_))));
}

#[test]
fn directory_is_rejected() {
    let dir = tempdir().unwrap();

    let result = LineSource::open(dir.path());

    assert!(matches!(result, Err(PipelineError::Io(_))));
}
