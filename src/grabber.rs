use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::article::Article;
use crate::config::GrabberConfig;
use crate::error::{GrabError, Result};
use crate::fetch::{Fetcher, check_scheme, decode};
use crate::paths::get_path_from_url;

/// One page, from download to the text file on disk.
pub struct TextGrabber {
    url: String,
    config: GrabberConfig,
    content: Option<Vec<u8>>,
    article: Option<Article>,
}

impl TextGrabber {
    pub fn new(url: &str, config: GrabberConfig) -> Self {
        check_scheme(url);
        Self {
            url: url.to_string(),
            config,
            content: None,
            article: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub fn download(&mut self) -> Result<()> {
        let fetcher = Fetcher::new(&self.config.user_agent)?;
        self.content = Some(fetcher.download(&self.url)?);
        Ok(())
    }

    /// Uses `content` as the page body instead of downloading it.
    pub fn load(&mut self, content: Vec<u8>) {
        self.content = Some(content);
        self.article = None;
    }

    pub fn parse(&mut self) -> Result<&Article> {
        let content = self
            .content
            .as_deref()
            .ok_or(GrabError::State("content is None, run download first"))?;

        let article = Article::from_html(&decode(content), &self.url, self.config.wrap_width)?;
        if self.config.verbose {
            println!("{}", article.text);
        }
        Ok(self.article.insert(article))
    }

    /// Output location: the URL-derived path under the configured root.
    pub fn output_path(&self) -> Result<PathBuf> {
        Ok(self.config.output_root.join(get_path_from_url(&self.url)?))
    }

    pub fn save_result(&self) -> Result<PathBuf> {
        let article = self
            .article
            .as_ref()
            .ok_or(GrabError::State("article was not parsed, run parse first"))?;
        if article.text.trim().is_empty() {
            return Err(GrabError::State("article is empty, nothing to save"));
        }

        let path = self.output_path()?;
        if let Some(directories) = path.parent() {
            fs::create_dir_all(directories)?;
        }
        fs::write(&path, &article.text)?;

        info!("File was successfully stored as {}", path.display());
        Ok(path)
    }

    /// Download, parse and save in one go.
    pub fn build(&mut self) -> Result<PathBuf> {
        self.download()?;
        self.parse()?;
        self.save_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>Site | Hello</title></head>\
        <body><h1>Hello</h1><div><p>First paragraph of the story.</p><p>Second one.</p></div></body></html>";

    fn grabber_in(dir: &std::path::Path, url: &str) -> TextGrabber {
        let config = GrabberConfig {
            output_root: dir.to_path_buf(),
            ..GrabberConfig::default()
        };
        TextGrabber::new(url, config)
    }

    #[test]
    fn parse_before_download_is_a_state_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut grabber = grabber_in(dir.path(), "https://example.com/a.html");

        let err = grabber.parse().unwrap_err();

        assert!(matches!(err, GrabError::State(_)));
    }

    #[test]
    fn save_before_parse_is_a_state_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut grabber = grabber_in(dir.path(), "https://example.com/a.html");
        grabber.load(PAGE.as_bytes().to_vec());

        let err = grabber.save_result().unwrap_err();

        assert!(matches!(err, GrabError::State(_)));
        assert!(!dir.path().join("example.com").exists());
    }

    #[test]
    fn parse_then_save_writes_derived_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut grabber = grabber_in(dir.path(), "https://example.com/news/hello.html");
        grabber.load(PAGE.as_bytes().to_vec());

        grabber.parse().unwrap();
        let path = grabber.save_result().unwrap();

        assert_eq!(path, dir.path().join("example.com/news/hello.txt"));
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, "Hello\n\nFirst paragraph of the story.\n\nSecond one.\n\n");
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("example.com/hello.txt");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "stale content that is longer than the new one").unwrap();

        let mut grabber = grabber_in(dir.path(), "https://example.com/hello.html");
        grabber.load(PAGE.as_bytes().to_vec());
        grabber.parse().unwrap();
        grabber.save_result().unwrap();

        assert!(fs::read_to_string(target).unwrap().starts_with("Hello\n\n"));
    }

    #[test]
    fn failed_extraction_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut grabber = grabber_in(dir.path(), "https://example.com/empty.html");
        grabber.load(b"<html><body><div>no paragraphs</div></body></html>".to_vec());

        assert!(matches!(grabber.parse().unwrap_err(), GrabError::Extraction(_)));
        assert!(matches!(grabber.save_result().unwrap_err(), GrabError::State(_)));
        assert!(!dir.path().join("example.com").exists());
    }
}
