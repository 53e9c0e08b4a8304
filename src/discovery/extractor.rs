use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::UTF8;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::Result;
use crate::core::types::UrlIndex;
use crate::reporting::logging;

use std::path::{Path, PathBuf};

/// Pattern for URL candidates. The character class is deliberately narrow:
/// anything outside it, a closing parenthesis or an anchor fragment for
/// example, terminates the match.
const URL_PATTERN: &str = r"https?://[A-Za-z0-9./?=_-]*";

/// Characters stripped repeatedly from the end of a candidate to clean
/// sentence-trailing punctuation.
const TRAILING_PUNCTUATION: &[char] = &['?', ':', '!', '.', ',', ';'];

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("Failed to compile URL pattern"));

static LINE_MATCHER: Lazy<RegexMatcher> =
    Lazy::new(|| RegexMatcher::new(URL_PATTERN).expect("Failed to compile URL pattern"));

pub trait ExtractUrls {
    fn extract_urls(&self, files: &[PathBuf]) -> UrlIndex;
}

#[derive(Default, Debug)]
pub struct Extractor {}

impl ExtractUrls for Extractor {
    /// Build the URL index for `files`, processed in the given order.
    ///
    /// A file that cannot be read is skipped with a warning; one bad file
    /// must not sink the whole scan.
    fn extract_urls(&self, files: &[PathBuf]) -> UrlIndex {
        let mut index = UrlIndex::new();

        for file in files {
            let file_name = file.display().to_string();
            match Self::scan_file(file) {
                Ok(urls) => {
                    for url in urls {
                        index.record(url, &file_name);
                    }
                }
                Err(err) => {
                    logging::log_warning(&format!("Skipping unreadable file '{file_name}': {err}"));
                }
            }
        }

        index
    }
}

impl Extractor {
    /// Collect cleaned URL candidates from one file, in match order.
    ///
    /// The searcher streams the file line by line, so large files never
    /// land in memory whole.
    fn scan_file(path: &Path) -> Result<Vec<String>> {
        let mut urls = Vec::new();

        Searcher::new().search_path(
            &*LINE_MATCHER,
            path,
            UTF8(|_line_number, line| {
                for candidate in URL_REGEX.find_iter(line) {
                    urls.push(strip_trailing_punctuation(candidate.as_str()).to_string());
                }
                Ok(true)
            }),
        )?;

        Ok(urls)
    }
}

/// Strip sentence punctuation from the end of a URL candidate.
///
/// Only the tail is touched; interior `?` and `.` survive, so
/// `http://example.com/a?b=c` comes through unchanged while
/// `http://example.com/path.` loses its final period.
pub fn strip_trailing_punctuation(candidate: &str) -> &str {
    candidate.trim_end_matches(TRAILING_PUNCTUATION)
}
