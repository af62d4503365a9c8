//! Reading [`SiteConfig`] overrides from the page.

use titan_behavior::SiteConfig;
use web_sys::Document;

/// Id of the `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "siteConfig";

/// The page's configuration: defaults, overridden by the JSON in
/// `#siteConfig` when present.
///
/// Malformed JSON is logged and ignored rather than breaking the page.
#[must_use]
pub fn load(document: &Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("loaded site config overrides");
            config
        }
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            SiteConfig::default()
        }
    }
}
