use std::path::PathBuf;

use url::Url;

use crate::error::Result;

/// Relative output path for `url`.
///
/// Pages whose path ends in `shtml` or `html` keep their location with the
/// extension replaced by `txt`. Other URLs become a directory tree of host
/// and path segments holding `<parent-segment>.txt` when the URL ends with a
/// slash, `default.txt` otherwise (a bare host included).
pub fn get_path_from_url(url: &str) -> Result<PathBuf> {
    let parsed = Url::parse(url)?;
    let full_path = format!("{}{}", parsed.authority(), parsed.path());

    for extension in ["shtml", "html"] {
        if let Some(stem) = full_path.strip_suffix(extension) {
            return Ok(PathBuf::from(format!("{stem}txt")));
        }
    }

    // `Url` turns a missing path into "/", which would read as a trailing slash.
    let has_written_path = url
        .split_once("://")
        .map_or(url, |(_, rest)| rest)
        .split(['?', '#'])
        .next()
        .is_some_and(|rest| rest.contains('/'));

    let mut splitted = vec![parsed.authority().to_string()];
    if let Some(segments) = parsed.path_segments().filter(|_| has_written_path) {
        splitted.extend(segments.map(str::to_string));
    }

    let last_item = splitted.last().map(String::as_str).unwrap_or_default();
    let filename = if last_item.is_empty() {
        let parent = splitted.iter().rev().nth(1).map(String::as_str).unwrap_or_default();
        format!("{parent}.txt")
    } else {
        "default.txt".to_string()
    };

    let mut path: PathBuf = splitted.iter().filter(|s| !s.is_empty()).collect();
    path.push(filename);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn path_of(url: &str) -> PathBuf {
        get_path_from_url(url).unwrap()
    }

    #[test]
    fn html_extension_is_replaced() {
        assert_eq!(path_of("https://example.com/a/b/page.html"), Path::new("example.com/a/b/page.txt"));
    }

    #[test]
    fn shtml_extension_is_replaced() {
        assert_eq!(path_of("https://example.com/a/b.shtml"), Path::new("example.com/a/b.txt"));
    }

    #[test]
    fn only_trailing_extension_is_replaced() {
        assert_eq!(path_of("http://example.com/html/news.html"), Path::new("example.com/html/news.txt"));
    }

    #[test]
    fn trailing_slash_names_file_after_parent() {
        assert_eq!(path_of("https://example.com/a/b/"), Path::new("example.com/a/b/b.txt"));
    }

    #[test]
    fn bare_host_names_file_after_host() {
        assert_eq!(path_of("https://example.com/"), Path::new("example.com/example.com.txt"));
    }

    #[test]
    fn host_without_slash_uses_default_name() {
        assert_eq!(path_of("https://example.com"), Path::new("example.com/default.txt"));
        assert_eq!(path_of("https://example.com?page=2"), Path::new("example.com/default.txt"));
    }

    #[test]
    fn non_html_segment_uses_default_name() {
        assert_eq!(path_of("https://example.com/a/story"), Path::new("example.com/a/story/default.txt"));
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(path_of("https://example.com/a/page.php?id=3"), Path::new("example.com/a/page.php/default.txt"));
    }

    #[test]
    fn port_is_part_of_the_host_directory() {
        assert_eq!(path_of("http://127.0.0.1:8080/index.html"), Path::new("127.0.0.1:8080/index.txt"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(get_path_from_url("not a url").is_err());
    }
}
