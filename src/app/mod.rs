use log::info;
use crate::cli::CliArgs;
// Needs the crate prefix, there's also the
// config crate in scope.
use crate::config::Config;
use crate::error::NotesError;
use crate::export::{CsvExporter, ExportSummary, Permalink};
use crate::notes::{decode_notes, print_notes, NotesClient, NotesQuery};

// Everything one run needs, built once from the
// command line and the config. No globals.
pub struct Job {
  pub query: NotesQuery,
  pub client: NotesClient,
  pub exporter: CsvExporter,
  pub debug: bool
}

impl Job {

  pub fn new(args: &CliArgs, config: &Config) -> Self {
    // The command line can only turn the link off.
    let permalink = if config.permalink && !args.no_link {
      Some(Permalink {
        viewer_url: config.viewer_url.clone(),
        zoom: config.permalink_zoom
      })
    } else {
      None
    };
    Self {
      query: NotesQuery::new(&args.bbox, args.limit, args.closed),
      client: NotesClient::new(&config.api_url, config.timeout(), config.max_body_bytes),
      exporter: CsvExporter::new(&args.output, permalink),
      debug: args.debug
    }
  }

  pub fn run(&self) -> Result<ExportSummary, NotesError> {
    let url = self.client.url_for(&self.query);
    println!("\nRequesting OSM notes ...");
    println!("  URI  : {}", url);
    info!("Fetching notes for bbox {}", self.query.bbox);
    let body = self.client.fetch(&self.query, self.debug)?;

    println!("\nWriting CSV file ...");
    println!("  FILE : {}", self.exporter.path().display());
    convert(&body, &self.exporter, self.debug)
  }

}

// Decoding happens before the file is opened, an
// error payload from the API leaves the file alone.
pub fn convert(
  body: &[u8],
  exporter: &CsvExporter,
  debug: bool
) -> Result<ExportSummary, NotesError> {
  let notes = decode_notes(body)?;
  if debug {
    print_notes(&notes);
  }
  exporter.export(&notes)
}
