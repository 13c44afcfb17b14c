use serde::Deserialize;

// Shapes of the notes.json document. The API
// sends a GeoJSON FeatureCollection where every
// note is a Point feature.

// Everything defaults so that a missing field
// just gives us an empty value instead of failing
// the whole document.

pub const FEATURE_COLLECTION: &'static str = "FeatureCollection";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeatureCollection {
  #[serde(rename = "type")]
  pub kind: String,
  pub features: Vec<Feature>
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Feature {
  #[serde(rename = "type")]
  pub kind: String,
  pub geometry: Geometry,
  pub properties: Properties
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Geometry {
  #[serde(rename = "type")]
  pub kind: String,
  // GeoJSON order: longitude first.
  pub coordinates: Vec<f64>
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Properties {
  pub id: i64,
  pub url: String,
  pub comment_url: String,
  pub close_url: String,
  pub date_created: String,
  pub status: String,
  pub comments: Vec<Comment>
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Comment {
  pub date: String,
  pub uid: i64,
  // Empty for anonymous comments.
  pub user: String,
  pub user_url: String,
  pub action: String,
  pub text: String,
  pub html: String
}

impl Geometry {

  pub fn longitude(&self) -> f64 {
    self.coordinates.get(0).copied().unwrap_or_default()
  }

  pub fn latitude(&self) -> f64 {
    self.coordinates.get(1).copied().unwrap_or_default()
  }

}

impl Feature {

  pub fn id(&self) -> i64 {
    self.properties.id
  }

  pub fn comments(&self) -> &[Comment] {
    &self.properties.comments
  }

}

impl FeatureCollection {

  pub fn is_feature_collection(&self) -> bool {
    self.kind == FEATURE_COLLECTION
  }

  // Sum of all the comments, which is also how many
  // CSV records we're going to write.
  pub fn comment_count(&self) -> usize {
    self.features.iter()
      .map(|f| f.comments().len())
      .sum()
  }

}
