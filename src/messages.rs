//! Localized user-facing messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the user-facing messages are available in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Locale {
  /// English.
  #[default]
  #[serde(rename = "en", alias = "en-US")]
  En,
  /// Simplified Chinese.
  #[serde(rename = "zh-CN", alias = "zh")]
  ZhCn,
}

/// Keys into the message catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
  /// `input` or `public_path` was empty.
  InvalidArgument,
  /// The production manifest could not be read or parsed.
  ManifestNotFound,
  /// The requested entry is missing from the manifest.
  EntryNotFound,
}

impl Message {
  /// Text for this message in the requested locale.
  pub fn text(self, locale: Locale) -> &'static str {
    match (self, locale) {
      (Message::InvalidArgument, Locale::En) => "Invalid parameters",
      (Message::InvalidArgument, Locale::ZhCn) => "参数有误",
      (Message::ManifestNotFound, Locale::En) => {
        "In the production environment, the manifest.json file was not found"
      }
      (Message::ManifestNotFound, Locale::ZhCn) => "生产环境下未找到manifest.json文件",
      (Message::EntryNotFound, Locale::En) => "Entry not found in the manifest.json file",
      (Message::EntryNotFound, Locale::ZhCn) => "manifest.json文件中未发现入口",
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Locale::En => f.write_str("en"),
      Locale::ZhCn => f.write_str("zh-CN"),
    }
  }
}

/// Error returned when a locale tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}', expected 'en' or 'zh-CN'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.to_ascii_lowercase().as_str() {
      "en" | "en-us" => Ok(Locale::En),
      "zh" | "zh-cn" => Ok(Locale::ZhCn),
      _ => Err(UnknownLocale(value.to_string())),
    }
  }
}
