use chrono::{Local, NaiveDate};
use derive_builder::Builder;
use reqwest::header;
use scraper::Html;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{error, info, warn};

use crate::error::FetchError;
use crate::extract::{Chain, Strategy};

pub const HTML_URL: &str = "https://www.geeksforgeeks.org/problem-of-the-day";
pub const API_URL: &str =
    "https://practiceapi.geeksforgeeks.org/api/v1/problems-of-day/problem/today";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TITLE: &str = "Problem of the Day";
pub const DESCRIPTION_PLACEHOLDER: &str = "Problem description not found";
pub const DESCRIPTION_SELECTOR: &str = "div.problems_problem_content__Xm_eO";
pub const DIRECTORY_ROOT: &str = "ProblemOfTheDay";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const PROBLEM_FIELD: &str = "problem";

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
pub enum SourceKind {
    #[default]
    #[strum(serialize = "html")]
    #[serde(rename = "HTML_SCRAPE")]
    HtmlScrape,
    #[strum(serialize = "api")]
    #[serde(rename = "JSON_API")]
    JsonApi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub kind: SourceKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemRecord {
    pub title: String,
    pub description: String,
    pub example: String,
    pub constraints: Option<String>,
    pub date: NaiveDate,
    pub source_kind: SourceKind,
    pub directory: Option<String>,
}

/// Fetches today's problem from one source with a single GET.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ProblemFetcher {
    #[builder(default = "USER_AGENT.to_string()")]
    user_agent: String,
    #[builder(default)]
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    problem: Option<ApiProblem>,
}

#[derive(Debug, Deserialize)]
struct ApiProblem {
    title: String,
    problem_statement: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    constraints: Option<String>,
}

impl Source {
    pub fn new(kind: SourceKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

impl From<SourceKind> for Source {
    fn from(kind: SourceKind) -> Self {
        let url = match kind {
            SourceKind::HtmlScrape => HTML_URL,
            SourceKind::JsonApi => API_URL,
        };
        Self::new(kind, url)
    }
}

impl ProblemRecord {
    /// Suggested location, relative to the working directory.
    pub fn directory_path(&self) -> Option<String> {
        self.directory
            .as_ref()
            .map(|name| format!("{}/{}", DIRECTORY_ROOT, name))
    }
}

impl Default for ProblemFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemFetcher {
    pub fn new() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch(&self, source: &Source) -> Result<ProblemRecord, FetchError> {
        let body = self.get(&source.url).await?;
        let today = Local::now().date_naive();

        match source.kind {
            SourceKind::HtmlScrape => parse_html(&body, today),
            SourceKind::JsonApi => parse_api(&body, today),
        }
    }

    /// Runs [`fetch`](Self::fetch) and turns every failure into a logged `None`.
    pub async fn fetch_or_log(&self, source: &Source) -> Option<ProblemRecord> {
        match self.fetch(source).await {
            Ok(record) => {
                info!(title = %record.title, kind = %source.kind, "fetched problem");
                Some(record)
            }
            Err(e) => {
                log_failure(source, &e);
                None
            }
        }
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        info!(%url, "requesting");
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

/// Logs a failed fetch: a missing payload at `warn`, anything else at `error`.
pub fn log_failure(source: &Source, e: &FetchError) {
    if e.is_absent() {
        warn!(url = %source.url, "{}", e);
    } else {
        error!(url = %source.url, "error fetching problem: {}", e);
    }
}

pub fn title_chain() -> Chain {
    Chain::new(
        "title",
        vec![
            Strategy::Css("h1"),
            Strategy::Css("title"),
            Strategy::Fixed(DEFAULT_TITLE),
        ],
    )
}

pub fn description_chain() -> Chain {
    Chain::new(
        "description",
        vec![
            Strategy::Css(DESCRIPTION_SELECTOR),
            Strategy::ClassPattern {
                tag: "div",
                parts: &["problem", "content"],
            },
            Strategy::Fixed(DESCRIPTION_PLACEHOLDER),
        ],
    )
}

pub fn example_chain() -> Chain {
    Chain::new(
        "example",
        vec![Strategy::AfterHeading {
            tag: "div",
            needle: "example",
        }],
    )
}

pub fn parse_html(body: &str, date: NaiveDate) -> Result<ProblemRecord, FetchError> {
    let document = Html::parse_document(body);
    let title = title_chain()
        .run(&document)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let description = description_chain()
        .run(&document)
        .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());
    let example = example_chain().run(&document).unwrap_or_default();

    Ok(ProblemRecord {
        title,
        description,
        example,
        constraints: None,
        date,
        source_kind: SourceKind::HtmlScrape,
        directory: None,
    })
}

pub fn parse_api(body: &str, date: NaiveDate) -> Result<ProblemRecord, FetchError> {
    let envelope: ApiEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Api(e.to_string()))?;
    let problem = envelope
        .problem
        .ok_or(FetchError::MissingField(PROBLEM_FIELD))?;
    let directory = directory_name(date, &problem.title);

    Ok(ProblemRecord {
        title: problem.title,
        description: problem.problem_statement,
        example: problem.example.unwrap_or_default(),
        constraints: Some(problem.constraints.unwrap_or_default()),
        date,
        source_kind: SourceKind::JsonApi,
        directory: Some(directory),
    })
}

/// `{YYYY-MM-DD}_{title}` with every whitespace character dropped from the title.
pub fn directory_name(date: NaiveDate, title: &str) -> String {
    format!(
        "{}_{}",
        date.format(DATE_FORMAT),
        title.split_whitespace().collect::<String>()
    )
}
