pub mod text_utils;

pub fn bool_to_i32(value: bool) -> i32 {
  match value {
    true => 1,
    false => 0
  }
}
