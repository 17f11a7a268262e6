//! URL helpers for resolving catalog links.

use url::Url;

/// Resolve a possibly relative `href` against `base`.
///
/// Returns `None` for empty hrefs and for links that cannot be parsed.
#[must_use]
pub fn absolutize(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().map(String::from)
}

/// Append `page=N` to a listing URL, keeping any existing query.
#[must_use]
pub fn with_page_param(listing_url: &str, page: u32) -> String {
    match Url::parse(listing_url) {
        Ok(mut url) => {
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| k != "page")
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            {
                let mut pairs = url.query_pairs_mut();
                pairs.clear();
                for (k, v) in &kept {
                    pairs.append_pair(k, v);
                }
                pairs.append_pair("page", &page.to_string());
            }
            url.into()
        }
        Err(_) => format!("{listing_url}?page={page}"),
    }
}

/// Scheme and host of `url` as a base for relative links.
#[must_use]
pub fn origin_of(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    Url::parse(&parsed.origin().ascii_serialization()).ok()
}
