use std::borrow::Cow;

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

fn decoded(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

/// Identifier of the page being viewed, taken from the location path.
/// A path ending in `/` maps to `home_page`.
pub fn current_page(pathname: &str, home_page: &str) -> String {
    match last_segment(pathname) {
        "" => home_page.to_string(),
        segment => decoded(segment).into_owned(),
    }
}

/// Whether a navigation link's `href` points at `current`.
pub fn links_to(href: &str, current: &str) -> bool {
    decoded(last_segment(href)) == current
}
