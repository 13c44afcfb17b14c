use crate::notes::{Comment, Feature};
use crate::utils::text_utils::{coordinate_to_string, user_or_anonymous};

pub const HEADER_WITH_LINK: [&'static str; 8] =
  ["Note", "Longitude", "Latitude", "Timestamp", "User", "Action", "Link", "Text"];
pub const HEADER_WITHOUT_LINK: [&'static str; 7] =
  ["Note", "Longitude", "Latitude", "Timestamp", "User", "Action", "Text"];

// Builds links to the note on the map viewer,
// centered on the note with the notes layer on.
#[derive(Debug, Clone, PartialEq)]
pub struct Permalink {
  pub viewer_url: String,
  pub zoom: u32
}

impl Permalink {

  pub fn for_note(&self, feature: &Feature) -> String {
    format!(
      "{}/note/{}#map={}/{}/{}&layers=N",
      self.viewer_url,
      feature.id(),
      self.zoom,
      coordinate_to_string(feature.geometry.latitude()),
      coordinate_to_string(feature.geometry.longitude())
    )
  }

}

// One CSV line. The note part is the same for
// every comment of that note.
#[derive(Debug, PartialEq)]
pub struct NoteRow<'a> {
  pub note: String,
  pub longitude: String,
  pub latitude: String,
  pub timestamp: &'a str,
  pub user: &'a str,
  pub action: &'a str,
  pub link: Option<String>,
  pub text: &'a str
}

impl<'a> NoteRow<'a> {

  fn new(feature: &Feature, comment: &'a Comment, link: Option<String>) -> Self {
    Self {
      note: feature.id().to_string(),
      longitude: coordinate_to_string(feature.geometry.longitude()),
      latitude: coordinate_to_string(feature.geometry.latitude()),
      timestamp: &comment.date,
      user: user_or_anonymous(&comment.user),
      action: &comment.action,
      link,
      text: &comment.text
    }
  }

  // Same order as the headers. The Link column is
  // only there when the row has a link.
  pub fn fields(&self) -> Vec<&str> {
    let mut fields = vec![
      self.note.as_str(),
      self.longitude.as_str(),
      self.latitude.as_str(),
      self.timestamp,
      self.user,
      self.action
    ];
    if let Some(link) = &self.link {
      fields.push(link.as_str());
    }
    fields.push(self.text);
    fields
  }

}

pub fn header(permalink: Option<&Permalink>) -> &'static [&'static str] {
  match permalink {
    Some(_) => &HEADER_WITH_LINK,
    None => &HEADER_WITHOUT_LINK
  }
}

// A note without comments gives no rows at all.
pub fn note_rows<'a>(
  feature: &'a Feature,
  permalink: Option<&Permalink>
) -> Vec<NoteRow<'a>> {
  let link = permalink.map(|p| p.for_note(feature));
  feature.comments()
    .iter()
    .map(|comment| NoteRow::new(feature, comment, link.clone()))
    .collect()
}
