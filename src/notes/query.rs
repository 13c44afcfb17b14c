use crate::utils::bool_to_i32;

// Parameters of the notes search. The bounding box
// isn't checked here, if it's garbage the API will
// tell us with a 400. It still has to be encoded so
// that it can't break the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesQuery {
  pub bbox: String,
  pub limit: u32,
  pub closed: bool
}

impl NotesQuery {

  pub fn new(bbox: &str, limit: u32, closed: bool) -> Self {
    Self {
      bbox: bbox.to_string(),
      limit,
      closed
    }
  }

  pub fn to_url(&self, base_url: &str) -> String {
    format!(
      "{}?bbox={}&limit={}&closed={}",
      base_url,
      urlencoding::encode(&self.bbox),
      self.limit,
      bool_to_i32(self.closed)
    )
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  const BASE: &'static str = "https://api.openstreetmap.org/api/0.6/notes.json";

  #[test]
  fn url_with_open_notes_only() {
    let sut = NotesQuery::new("7.47,51.84,7.78,52.06", 999, false);
    assert_eq!(
      "https://api.openstreetmap.org/api/0.6/notes.json?bbox=7.47%2C51.84%2C7.78%2C52.06&limit=999&closed=0",
      sut.to_url(BASE)
    );
  }

  #[test]
  fn url_including_closed_notes() {
    let sut = NotesQuery::new("1,2,3,4", 10, true);
    assert!(sut.to_url(BASE).ends_with("?bbox=1%2C2%2C3%2C4&limit=10&closed=1"));
  }

  #[test]
  fn bbox_is_encoded_but_not_validated() {
    let sut = NotesQuery::new("1, 2#,3&x=4", 5, true);
    assert_eq!(
      "https://api.openstreetmap.org/api/0.6/notes.json?bbox=1%2C%202%23%2C3%26x%3D4&limit=5&closed=1",
      sut.to_url(BASE)
    );
  }
}
