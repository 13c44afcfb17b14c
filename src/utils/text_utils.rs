// What we write in the User column when the
// comment was made without being logged in.
pub const ANONYMOUS_USER: &'static str = "anonym";

pub fn user_or_anonymous(user: &str) -> &str {
  if user.is_empty() {
    ANONYMOUS_USER
  } else {
    user
  }
}

// Display for f64 already drops the useless ".0"
// so 52.0 comes out as "52", which is what we want
// in the CSV.
pub fn coordinate_to_string(value: f64) -> String {
  value.to_string()
}
