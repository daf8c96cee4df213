//! Display names of the supported chat sites.

use url::Url;

pub const UNKNOWN_SITE: &str = "Unknown";

/// Hostname fragments and the name shown for them, checked in order.
const SITE_NAMES: &[(&str, &str)] = &[
    ("huggingface.co", "HuggingFace"),
    ("openai.com", "OpenAI"),
    ("claude.ai", "Claude"),
    ("gemini.google.com", "Gemini"),
    ("grok.com", "Grok"),
    ("mistral.ai", "Mistral"),
    ("poe.com", "Poe"),
    ("perplexity.ai", "Perplexity"),
];

/// Resolves the display name for a hostname.
pub fn site_name_for_host(hostname: &str) -> &'static str {
    SITE_NAMES
        .iter()
        .find(|&&(fragment, _)| hostname.contains(fragment))
        .map_or(UNKNOWN_SITE, |&(_, name)| name)
}

/// Resolves the display name for the active tab's URL.
///
/// A missing or unparseable URL, or one without a host, is `Unknown`.
pub fn site_name_for_url(url: Option<&str>) -> &'static str {
    url.and_then(|raw| Url::parse(raw).ok())
        .and_then(|parsed| parsed.host_str().map(site_name_for_host))
        .unwrap_or(UNKNOWN_SITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sites() {
        assert_eq!(site_name_for_url(Some("https://chat.openai.com/c/abc")), "OpenAI");
        assert_eq!(site_name_for_url(Some("https://claude.ai/new")), "Claude");
        assert_eq!(
            site_name_for_url(Some("https://huggingface.co/chat/")),
            "HuggingFace"
        );
        assert_eq!(
            site_name_for_url(Some("https://www.perplexity.ai/search")),
            "Perplexity"
        );
    }

    #[test]
    fn test_unknown_sites() {
        assert_eq!(site_name_for_url(Some("https://example.org/")), "Unknown");
        assert_eq!(site_name_for_url(Some("not a url")), "Unknown");
        assert_eq!(site_name_for_url(Some("about:blank")), "Unknown");
        assert_eq!(site_name_for_url(None), "Unknown");
    }
}
