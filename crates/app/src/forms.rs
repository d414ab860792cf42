//! Assembly of raw form inputs into request bodies.
//!
//! Kept target-independent so the trimming and line-splitting rules are
//! unit-tested natively; the wasm pages only wire signals into these.

use spnportal_core::CreateSpnRequest;

/// Build a create-SPN request from the form's raw field values.
///
/// Whitespace-only optional fields become absent rather than empty.
/// Reply URLs are entered one per line; blank lines are skipped.
pub fn create_spn_request(
    display_name: &str,
    description: &str,
    homepage_url: &str,
    reply_urls: &str,
) -> CreateSpnRequest {
    let mut request = CreateSpnRequest::new(display_name.trim());

    let description = description.trim();
    if !description.is_empty() {
        request.description = Some(description.to_string());
    }

    let homepage_url = homepage_url.trim();
    if !homepage_url.is_empty() {
        request.homepage_url = Some(homepage_url.to_string());
    }

    let urls: Vec<String> = reply_urls
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if !urls.is_empty() {
        request.reply_urls = Some(urls);
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_are_absent() {
        let request = create_spn_request("  my-app  ", "   ", "", "\n  \n");
        assert_eq!(request.display_name, "my-app");
        assert_eq!(request.description, None);
        assert_eq!(request.homepage_url, None);
        assert_eq!(request.reply_urls, None);
    }

    #[test]
    fn reply_urls_are_read_one_per_line() {
        let request = create_spn_request(
            "my-app",
            "ci pipeline",
            " https://example.com ",
            "https://example.com/auth\n\n  https://example.com/callback  \n",
        );
        assert_eq!(request.description.as_deref(), Some("ci pipeline"));
        assert_eq!(request.homepage_url.as_deref(), Some("https://example.com"));
        assert_eq!(
            request.reply_urls,
            Some(vec![
                "https://example.com/auth".to_string(),
                "https://example.com/callback".to_string(),
            ])
        );
    }
}
