use derive_more::Display;
use std::path::Path;

// Which step of the CSV output failed, so that
// the error message can say it. Closing the file
// happens when it's dropped.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
pub enum IoStage {
  #[display(fmt = "open")]
  Open,
  #[display(fmt = "write")]
  Write,
  #[display(fmt = "flush")]
  Flush
}

// Every variant is fatal, there is nothing we
// could retry. The binary prints these and exits.
#[derive(Debug, Display)]
pub enum NotesError {
  #[display(fmt = "Network error requesting {}: {}", url, cause)]
  Network { url: String, cause: String },
  #[display(fmt = "HTTP status <{}> not expected", _0)]
  HttpStatus(String),
  #[display(fmt = "Could not read response body: {}", _0)]
  Body(String),
  #[display(fmt = "Could not decode notes JSON: {}", _0)]
  Decode(String),
  #[display(fmt = "Notes type <{}> unexpected", _0)]
  UnexpectedType(String),
  #[display(fmt = "I/O error at {} on file <{}>: {}", stage, path, cause)]
  Io { stage: IoStage, path: String, cause: String }
}

// Standard way to implement the Error trait is
// to not actually implement any function at all.
impl std::error::Error for NotesError {}

impl From<serde_json::Error> for NotesError {
  fn from(error: serde_json::Error) -> Self {
    NotesError::Decode(error.to_string())
  }
}

impl NotesError {

  pub fn io(stage: IoStage, path: &Path, cause: impl ToString) -> Self {
    NotesError::Io {
      stage,
      path: path.display().to_string(),
      cause: cause.to_string()
    }
  }

}

// The csv crate wraps io::Error, we want its
// message rather than the wrapper's when we can.
pub fn csv_cause(error: csv::Error) -> String {
  match error.into_kind() {
    csv::ErrorKind::Io(e) => e.to_string(),
    other => format!("{:?}", other)
  }
}
