/// Cuts `input` down to at most `length` characters, marking the cut with `...`.
pub fn ellipsis(input: String, length: usize) -> String {
  if input.chars().count() <= length {
    return input;
  }

  let truncated: String = input.chars().take(length.saturating_sub(3)).collect();
  format!("{truncated}...")
}
