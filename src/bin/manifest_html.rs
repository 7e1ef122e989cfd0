//! Print the HTML fragments for a Vite manifest entry.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use manifest_html::{Locale, ManifestResolver, ResolveError, ResolvedOutput, ResolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "manifest-html", version, about)]
struct Cli {
  /// Manifest entry key, e.g. `src/app/main.ts`.
  input: String,
  /// Build directory containing `manifest.json`.
  #[arg(long)]
  out_dir: Option<PathBuf>,
  /// Prefix prepended to every emitted URL.
  #[arg(long)]
  public_path: Option<String>,
  /// Point at the dev server instead of reading the manifest.
  #[arg(long)]
  dev: bool,
  /// JSON configuration file; defaults to `manifest-html.config.json` in the working directory.
  #[arg(long)]
  config: Option<PathBuf>,
  /// Language for error messages (`en` or `zh-CN`).
  #[arg(long)]
  locale: Option<Locale>,
  /// Print a single fragment instead of the JSON object.
  #[arg(long, value_enum)]
  fragment: Option<Fragment>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fragment {
  Preload,
  Css,
  Js,
}

fn main() -> ExitCode {
  init_logging();
  let cli = Cli::parse();

  let config = match settings(&cli) {
    Ok(config) => config,
    Err(err) => {
      eprintln!("{err:#}");
      return ExitCode::FAILURE;
    }
  };

  match run(&cli, &config) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{}", describe(&err, config.locale));
      ExitCode::FAILURE
    }
  }
}

fn init_logging() {
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .init();
}

/// Configuration file values with command-line flags applied on top.
fn settings(cli: &Cli) -> Result<ResolverConfig> {
  let mut config = load_config(cli.config.as_deref())?;
  if let Some(out_dir) = &cli.out_dir {
    config.out_dir = out_dir.to_string_lossy().into_owned();
  }
  if let Some(public_path) = &cli.public_path {
    config.public_path = public_path.clone();
  }
  if cli.dev {
    config.dev = true;
  }
  if let Some(locale) = cli.locale {
    config.locale = locale;
  }
  Ok(config)
}

fn run(cli: &Cli, config: &ResolverConfig) -> Result<()> {
  let output = ManifestResolver::from_config(config).resolve(&cli.input)?;
  println!("{}", render(&output, cli.fragment)?);
  Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ResolverConfig> {
  match path {
    Some(path) => {
      let config = ResolverConfig::from_path(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
      let base = path.parent().unwrap_or_else(|| Path::new(""));
      Ok(config.relative_to(base))
    }
    None => {
      let cwd = std::env::current_dir().context("failed to read working directory")?;
      Ok(ResolverConfig::discover(&cwd))
    }
  }
}

fn render(output: &ResolvedOutput, fragment: Option<Fragment>) -> Result<String> {
  Ok(match fragment {
    Some(Fragment::Preload) => output.preload.clone(),
    Some(Fragment::Css) => output.css.clone(),
    Some(Fragment::Js) => output.js.clone(),
    None => serde_json::to_string_pretty(output).context("failed to serialise output")?,
  })
}

/// Full error chain, prefixed with the translated message outside English.
fn describe(err: &anyhow::Error, locale: Locale) -> String {
  match err.downcast_ref::<ResolveError>() {
    Some(resolve_err) if locale != Locale::En => {
      format!("{}: {err:#}", resolve_err.localized(locale))
    }
    _ => format!("{err:#}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn output() -> ResolvedOutput {
    ResolvedOutput {
      preload: "<p>".into(),
      css: "<c>".into(),
      js: "<j>".into(),
    }
  }

  #[test]
  fn renders_single_fragment() {
    assert_eq!(render(&output(), Some(Fragment::Css)).unwrap(), "<c>");
    assert_eq!(render(&output(), Some(Fragment::Js)).unwrap(), "<j>");
  }

  #[test]
  fn renders_json_object_by_default() {
    let json: serde_json::Value = serde_json::from_str(&render(&output(), None).unwrap()).unwrap();
    assert_eq!(json["preload"], "<p>");
    assert_eq!(json["css"], "<c>");
    assert_eq!(json["js"], "<j>");
  }

  #[test]
  fn flags_override_config() {
    let cli = Cli::parse_from([
      "manifest-html",
      "src/app/main.ts",
      "--config",
      "/definitely/missing/manifest-html.config.json",
    ]);
    assert!(settings(&cli).is_err());

    let cli = Cli::parse_from([
      "manifest-html",
      "src/app/main.ts",
      "--out-dir",
      "dist",
      "--public-path",
      "/static/",
      "--dev",
      "--locale",
      "zh-CN",
    ]);
    let config = settings(&cli).unwrap();
    assert_eq!(config.out_dir, "dist");
    assert_eq!(config.public_path, "/static/");
    assert!(config.dev);
    assert_eq!(config.locale, Locale::ZhCn);
  }

  #[test]
  fn prefixes_translated_message() {
    let err = anyhow::Error::new(ResolveError::EntryNotFound {
      entry: "x.ts".into(),
    });
    assert!(describe(&err, Locale::ZhCn).starts_with("manifest.json文件中未发现入口: "));
    assert_eq!(
      describe(&err, Locale::En),
      "Entry not found in the manifest.json file: x.ts"
    );
  }
}
