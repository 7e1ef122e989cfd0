//! Dual-path loader choosing between the modern and the SystemJS legacy bundle.
//!
//! Backend templates match on this markup, so the text (including the inert
//! `noModule` probe) has to stay exactly as rendered here.

use crate::manifest::LegacyAssets;

/// Render the feature-detecting loader for `modern_file` with its legacy fallback.
///
/// The first script probes module, dynamic import and async generator support and
/// injects the modern bundle when all of them work. The second runs on `window.onload`
/// and, if the modern path did not run, loads the polyfills and then imports the
/// legacy entry through `System.import`.
pub fn legacy_loader_script(public_path: &str, modern_file: &str, legacy: &LegacyAssets) -> String {
  format!(
    r#"<script type="module">const script=document.createElement("script");try {{if(!"noModule" in HTMLScriptElement.prototype) throw "";import.meta.url;import("_").catch(()=>1);(async function*(){{}})().next();script.type = "module";script.src="{public_path}{modern_file}";document.body.appendChild(script);window._isRunManifestJs = true;}}catch(error) {{}}</script><script>window.onload=function(){{if(window._isRunManifestJs) return;const script = document.createElement("script");script.src = "{public_path}{polyfills}",script.onload=function(){{System.import("{public_path}{legacy_entry}");}},document.body.appendChild(script);}}</script>"#,
    polyfills = legacy.polyfills_file,
    legacy_entry = legacy.entry_file,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_loader_byte_for_byte() {
    let legacy = LegacyAssets {
      entry_file: "assets/main-legacy.abc123.js",
      polyfills_file: "assets/legacy-polyfills.ghi789.js",
    };
    let expected = concat!(
      r#"<script type="module">const script=document.createElement("script");"#,
      r#"try {if(!"noModule" in HTMLScriptElement.prototype) throw "";"#,
      r#"import.meta.url;import("_").catch(()=>1);(async function*(){})().next();"#,
      r#"script.type = "module";script.src="/public/dist/assets/main.123abc.js";"#,
      r#"document.body.appendChild(script);window._isRunManifestJs = true;}catch(error) {}</script>"#,
      r#"<script>window.onload=function(){if(window._isRunManifestJs) return;"#,
      r#"const script = document.createElement("script");"#,
      r#"script.src = "/public/dist/assets/legacy-polyfills.ghi789.js","#,
      r#"script.onload=function(){System.import("/public/dist/assets/main-legacy.abc123.js");},"#,
      r#"document.body.appendChild(script);}</script>"#,
    );

    assert_eq!(
      legacy_loader_script("/public/dist/", "assets/main.123abc.js", &legacy),
      expected
    );
  }
}
