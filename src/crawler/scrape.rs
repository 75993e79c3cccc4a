//! HTML link extraction
//!
//! The scraper feeds the recursion with directories, not files: every link
//! on a found page is resolved, restricted to the crawled host, and cut
//! back to its parent directory. Each emitted directory later becomes the
//! root of its own wordlist sweep, so extraction is about seeding further
//! probing rather than re-fetching the exact linked resource.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Tags whose href/src attributes may reference same-host resources
const LINK_TAGS: &str =
    "a, area, base, link, audio, embed, iframe, img, input, script, source, track, video";

/// Extracts same-host directory URLs referenced by a page
///
/// Both `href` and `src` are inspected on every matching tag. Values that
/// fail to resolve, point off-host, or collapse to the bare root are
/// skipped. The result is deduplicated, in document order.
pub fn extract_targets(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse(LINK_TAGS) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let base = directory_base(page_url);
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for element in document.select(&selector) {
        for attr in ["href", "src"] {
            let Some(value) = element.value().attr(attr) else {
                continue;
            };
            let Some(target) = resolve_directory(value, &base, page_url) else {
                continue;
            };
            if seen.insert(target.clone()) {
                targets.push(target);
            }
        }
    }

    targets
}

/// Returns the page URL with a trailing slash on its path
///
/// Relative references are resolved against the page as a directory, so a
/// link `sub/file.html` on page `/admin` lands under `/admin/sub`.
fn directory_base(page_url: &Url) -> Url {
    if page_url.path().ends_with('/') {
        return page_url.clone();
    }

    let mut base = page_url.clone();
    base.set_path(&format!("{}/", page_url.path()));
    base
}

/// Resolves one attribute value to a same-host directory URL
fn resolve_directory(value: &str, base: &Url, page_url: &Url) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "#" {
        return None;
    }

    let resolved = base.join(value).ok()?;
    if resolved.host_str() != page_url.host_str() {
        return None;
    }

    let directory = parent_directory(resolved.path());
    if directory.len() <= 1 {
        // The bare root seeds nothing new
        return None;
    }

    let mut target = format!("{}://{}", resolved.scheme(), resolved.host_str()?);
    if let Some(port) = resolved.port() {
        target.push_str(&format!(":{}", port));
    }
    target.push_str(&directory);
    Some(target)
}

/// Strips the final path segment, keeping the leading slash
fn parent_directory(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(index) => path[..index].to_string(),
    }
}
