mod rows;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use derive_more::Display;
use log::{error, info};
use crate::error::{csv_cause, IoStage, NotesError};
use crate::notes::FeatureCollection;
pub use rows::{header, note_rows, Permalink};

#[derive(Debug, Display, Default, Clone, Copy, PartialEq)]
#[display(fmt = "{} notes, {} records", notes, records)]
pub struct ExportSummary {
  pub notes: usize,
  pub records: usize
}

// Writes the flattened notes to a CSV file. The file
// handle lives inside the csv writer so it's closed
// whenever we leave, error or not.
pub struct CsvExporter {
  path: PathBuf,
  permalink: Option<Permalink>
}

impl CsvExporter {

  pub fn new(path: &Path, permalink: Option<Permalink>) -> Self {
    Self {
      path: path.to_path_buf(),
      permalink
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn export(
    &self,
    notes: &FeatureCollection
  ) -> Result<ExportSummary, NotesError> {
    let file = OpenOptions::new()
      .write(true)
      .create(true)
      .truncate(true)
      .open(&self.path)
      .map_err(|e| {
        error!("Could not open {}: {}", self.path.display(), e);
        NotesError::io(IoStage::Open, &self.path, e)
      })?;
    let summary = self.write_to(file, notes)?;
    info!("Wrote {} to {}", summary, self.path.display());
    Ok(summary)
  }

  pub fn write_to<W: Write>(
    &self,
    out: W,
    notes: &FeatureCollection
  ) -> Result<ExportSummary, NotesError> {
    let mut writer = csv::Writer::from_writer(out);
    let permalink = self.permalink.as_ref();

    writer.write_record(header(permalink))
      .map_err(|e| self.write_error(e))?;

    let mut summary = ExportSummary::default();
    for feature in &notes.features {
      summary.notes += 1;
      for row in note_rows(feature, permalink) {
        writer.write_record(row.fields())
          .map_err(|e| self.write_error(e))?;
        summary.records += 1;
      }
    }

    // Rows sit in the csv buffer until here, so this is
    // where most write errors actually show up.
    writer.flush()
      .map_err(|e| NotesError::io(IoStage::Flush, &self.path, e))?;
    Ok(summary)
  }

  fn write_error(&self, e: csv::Error) -> NotesError {
    NotesError::io(IoStage::Write, &self.path, csv_cause(e))
  }

}
