/// `<script type="module">` pointing at `{public_path}{file}`.
pub fn module_script(public_path: &str, file: &str) -> String {
  format!(r#"<script type="module" src="{public_path}{file}"></script>"#)
}

/// Stylesheet link for `{public_path}{file}`.
pub fn stylesheet_link(public_path: &str, file: &str) -> String {
  format!(r#"<link rel="stylesheet" href="{public_path}{file}" />"#)
}

/// Module preload hint for `{public_path}{file}`.
pub fn modulepreload_link(public_path: &str, file: &str) -> String {
  format!(r#"<link rel="modulepreload" href="{public_path}{file}" />"#)
}

/// Join tags with a single space; no tags yields an empty string.
pub fn join_tags<I>(tags: I) -> String
where
  I: IntoIterator<Item = String>,
{
  tags.into_iter().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_tags_without_escaping() {
    assert_eq!(
      module_script("/public/dist/", "src/app/main.ts"),
      r#"<script type="module" src="/public/dist/src/app/main.ts"></script>"#
    );
    assert_eq!(
      stylesheet_link("https://static.example.com/", "assets/a&b.css"),
      r#"<link rel="stylesheet" href="https://static.example.com/assets/a&b.css" />"#
    );
    assert_eq!(
      modulepreload_link("/", "assets/main.js"),
      r#"<link rel="modulepreload" href="/assets/main.js" />"#
    );
  }

  #[test]
  fn joins_with_single_space() {
    assert_eq!(join_tags(Vec::new()), "");
    assert_eq!(join_tags(vec!["<a>".to_string()]), "<a>");
    assert_eq!(join_tags(vec!["<a>".to_string(), "<b>".to_string()]), "<a> <b>");
  }
}
