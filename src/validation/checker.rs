use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::redirect::Policy;

use crate::config::Config;
use crate::core::constants::http;
use crate::core::error::Result;
use crate::core::types::UrlEntry;
use crate::reporting::logging;

use std::cmp::Ordering;
use std::fmt;

/// Outcome of checking a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A response was received; holds the final status after redirects
    Status(u16),
    /// The request failed below the HTTP layer
    Transport(String),
}

/// A checked URL with its referencing files and outcome.
#[derive(Debug, Clone, Eq)]
pub struct CheckResult {
    pub url: String,
    pub files: Vec<String>,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// A URL is valid only when the final response status is exactly 200.
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Status(http::STATUS_OK))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Short reason string for logs and structured output.
    pub fn reason(&self) -> String {
        match &self.outcome {
            CheckOutcome::Status(code) => format!("status {code}"),
            CheckOutcome::Transport(description) => description.clone(),
        }
    }
}

impl Ord for CheckResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.url.cmp(&other.url)
    }
}

impl PartialOrd for CheckResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CheckResult {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.outcome == other.outcome
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.url, self.files.join(" "))
    }
}

#[async_trait]
pub trait CheckUrls {
    async fn check_urls(&self, entries: Vec<UrlEntry>, config: &Config) -> Result<Vec<CheckResult>>;
}

#[derive(Default, Debug)]
pub struct Checker {}

#[async_trait]
impl CheckUrls for Checker {
    /// Check every entry with one GET each.
    ///
    /// Redirects are followed up to a fixed hop limit; a URL counts as
    /// valid only if the chain ends in a 200, and exceeding the limit
    /// surfaces as a transport failure. Requests run through a bounded
    /// pool sized by the concurrency setting; results arrive in
    /// completion order and are sorted by URL before returning.
    async fn check_urls(&self, entries: Vec<UrlEntry>, config: &Config) -> Result<Vec<CheckResult>> {
        let user_agent = config.user_agent.clone().unwrap_or_else(|| {
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
        });

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(http::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        let mut entries_and_responses = stream::iter(entries)
            .map(|entry| {
                let client = &client;
                async move {
                    let response = client.get(&entry.url).send().await;
                    (entry, response)
                }
            })
            .buffer_unordered(config.concurrency_or_cores());

        let mut results = Vec::new();
        while let Some((entry, response)) = entries_and_responses.next().await {
            let outcome = match response {
                Ok(response) => CheckOutcome::Status(response.status().as_u16()),
                Err(err) => CheckOutcome::Transport(describe_transport_error(&err)),
            };

            let result = CheckResult {
                url: entry.url,
                files: entry.files,
                outcome,
            };
            logging::log_check_result(&result);
            results.push(result);
        }

        results.sort();
        Ok(results)
    }
}

/// Prefer the underlying cause, usually a DNS or connect error, over
/// reqwest's outer wrapper text.
fn describe_transport_error(err: &reqwest::Error) -> String {
    std::error::Error::source(err)
        .map(|source| source.to_string())
        .unwrap_or_else(|| err.to_string())
}


#[cfg(test)]
mod integration_tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;

    fn entry(url: String) -> UrlEntry {
        UrlEntry {
            url,
            files: vec!["readme.md".to_string()],
        }
    }

    #[tokio::test]
    async fn test_check_urls__200_is_valid() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/200")
            .with_status(200)
            .create_async()
            .await;
        let endpoint = server.url() + "/200";

        let results = Checker::default()
            .check_urls(vec![entry(endpoint.clone())], &Config::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, endpoint);
        assert_eq!(results[0].outcome, CheckOutcome::Status(200));
        assert!(results[0].is_valid());
    }

    #[tokio::test]
    async fn test_check_urls__404_is_invalid() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/404")
            .with_status(404)
            .create_async()
            .await;
        let endpoint = server.url() + "/404";

        let results = Checker::default()
            .check_urls(vec![entry(endpoint)], &Config::default())
            .await
            .unwrap();

        assert_eq!(results[0].outcome, CheckOutcome::Status(404));
        assert!(results[0].is_invalid());
    }

    #[tokio::test]
    async fn test_check_urls__redirect_chain_ending_in_200_is_valid() {
        let mut server = Server::new_async().await;
        let _target = server
            .mock("GET", "/target")
            .with_status(200)
            .create_async()
            .await;
        let _redirect = server
            .mock("GET", "/moved")
            .with_status(301)
            .with_header("location", &format!("{}/target", server.url()))
            .create_async()
            .await;
        let endpoint = server.url() + "/moved";

        let results = Checker::default()
            .check_urls(vec![entry(endpoint)], &Config::default())
            .await
            .unwrap();

        assert_eq!(results[0].outcome, CheckOutcome::Status(200));
        assert!(results[0].is_valid());
    }

    #[tokio::test]
    async fn test_check_urls__connection_refused_is_transport_failure() {
        // Port 1 is never listening locally, so this fails without DNS
        let results = Checker::default()
            .check_urls(
                vec![entry("http://127.0.0.1:1/missing".to_string())],
                &Config::default(),
            )
            .await
            .unwrap();

        assert!(results[0].is_invalid());
        assert!(matches!(results[0].outcome, CheckOutcome::Transport(_)));
    }

    #[tokio::test]
    async fn test_check_urls__results_sorted_by_url() {
        let mut server = Server::new_async().await;
        let _ma = server
            .mock("GET", "/a")
            .with_status(200)
            .create_async()
            .await;
        let _mb = server
            .mock("GET", "/b")
            .with_status(404)
            .create_async()
            .await;
        let entries = vec![
            entry(server.url() + "/b"),
            entry(server.url() + "/a"),
        ];

        let results = Checker::default()
            .check_urls(entries, &Config::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].url < results[1].url);
    }

    #[tokio::test]
    async fn test_check_urls__referencing_files_travel_with_the_result() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/404")
            .with_status(404)
            .create_async()
            .await;

        let entries = vec![UrlEntry {
            url: server.url() + "/404",
            files: vec!["docs/a.md".to_string(), "docs/b.md".to_string()],
        }];

        let results = Checker::default()
            .check_urls(entries, &Config::default())
            .await
            .unwrap();

        assert_eq!(
            results[0].files,
            vec!["docs/a.md".to_string(), "docs/b.md".to_string()]
        );
    }

    #[tokio::test]
    async fn test_check_urls__empty_input_yields_empty_output() {
        let results = Checker::default()
            .check_urls(Vec::new(), &Config::default())
            .await
            .unwrap();

        assert!(results.is_empty());
    }
}
