mod entities;
mod client;
mod query;
use log::{debug, error};
use crate::error::NotesError;
pub use client::NotesClient;
pub use entities::*;
pub use query::NotesQuery;

// The API returns a different kind of payload when
// something goes wrong on their end, checking the type
// is the only validation we do on the document.
pub fn decode_notes(body: &[u8]) -> Result<FeatureCollection, NotesError> {
  let notes: FeatureCollection = serde_json::from_slice(body)
    .map_err(|e| {
      error!("JSON parsing error on notes response: {}", e);
      NotesError::from(e)
    })?;
  if !notes.is_feature_collection() {
    return Err(NotesError::UnexpectedType(notes.kind));
  }
  debug!(
    "Decoded {} notes with {} comments",
    notes.features.len(),
    notes.comment_count()
  );
  Ok(notes)
}

// Debug output of everything we decoded, one block per
// note with its comments indented under it.
pub fn print_notes(notes: &FeatureCollection) {
  for feature in &notes.features {
    println!("----------------------------------------\n");
    println!("feature.type                     = {}", feature.kind);
    println!("feature.geometry.type            = {}", feature.geometry.kind);
    println!("feature.geometry.coordinates     = {:?}", feature.geometry.coordinates);
    println!("feature.properties.id            = {}", feature.properties.id);
    println!("feature.properties.url           = {}", feature.properties.url);
    println!("feature.properties.comment_url   = {}", feature.properties.comment_url);
    println!("feature.properties.close_url     = {}", feature.properties.close_url);
    println!("feature.properties.date_created  = {}", feature.properties.date_created);
    println!("feature.properties.status        = {}", feature.properties.status);
    println!();
    for comment in feature.comments() {
      println!("  comment.date     = {}", comment.date);
      println!("  comment.uid      = {}", comment.uid);
      println!("  comment.user     = {}", comment.user);
      println!("  comment.user_url = {}", comment.user_url);
      println!("  comment.action   = {}", comment.action);
      println!("  comment.text     = {}", comment.text);
      println!("  comment.html     = {}", comment.html);
      println!();
    }
  }
}
