//! Client for the remote diff service.
//!
//! The service owns all comparison semantics. This module only sends the
//! request and maps the response body onto [`DiffResult`].

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::domain::{
    DiffLine, DiffMode, DiffRequest, DiffResult, DiffServiceError, DiffSummary, LineClass,
};

/// Labels the service uses for plain line-oriented comparisons.
const TEXT_LABELS: [&str; 2] = ["texto", "text"];

#[async_trait]
pub trait DiffService: Send + Sync {
    async fn compare(&self, request: &DiffRequest) -> Result<DiffResult, DiffServiceError>;
}

pub struct HttpDiffService {
    client: reqwest::Client,
    url: String,
}

impl HttpDiffService {
    pub fn new(
        url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DiffServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DiffService for HttpDiffService {
    async fn compare(&self, request: &DiffRequest) -> Result<DiffResult, DiffServiceError> {
        log::debug!(
            "POST {} (structured: {}, {} + {} bytes)",
            self.url,
            request.structured_mode,
            request.original.len(),
            request.altered.len()
        );

        let res = self.client.post(&self.url).json(request).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(DiffServiceError::status(status));
        }

        let body = res.text().await?;
        parse_response(&body).inspect_err(|err| {
            log::error!("{}: {}\n{}", self.url, err, body);
        })
    }
}

/// Older service versions answer with the whole diff as one text block.
#[derive(Debug, Deserialize)]
struct LegacyResponse {
    diff: String,
    #[serde(rename = "type")]
    diff_type: String,
}

fn malformed(path: &str, err: serde_json::Error) -> DiffServiceError {
    DiffServiceError::Malformed(format!("could not deserialize response [{path}: {err}]"))
}

/// Removes `name` from the body and decodes it. Absent and `null` fields take
/// their default.
fn take_field<T>(
    body: &mut serde_json::Map<String, Value>,
    name: &str,
) -> Result<T, DiffServiceError>
where
    T: DeserializeOwned + Default,
{
    match body.remove(name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(|err| malformed(name, err)),
    }
}

fn take_lines(
    body: &mut serde_json::Map<String, Value>,
    name: &str,
) -> Result<Vec<DiffLine>, DiffServiceError> {
    let lines: Vec<Value> = take_field(body, name)?;
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_value(line).map_err(|err| malformed(&format!("{name}[{index}]"), err))
        })
        .collect()
}

/// Bodies carrying `diff_type` are line responses; anything else must be the
/// legacy single-block shape. Errors name the field that failed to decode.
pub fn parse_response(body: &str) -> Result<DiffResult, DiffServiceError> {
    let value: Value = serde_json::from_str(body).map_err(|err| malformed("body", err))?;
    let Value::Object(mut body) = value else {
        return Err(DiffServiceError::Malformed(
            "could not deserialize response [body: expected a JSON object]".to_string(),
        ));
    };

    if !body.contains_key("diff_type") {
        let legacy: LegacyResponse = serde_json::from_value(Value::Object(body))
            .map_err(|err| malformed("legacy response", err))?;
        return Ok(DiffResult {
            mode: DiffMode::Structured,
            diff_type: legacy.diff_type,
            original_lines: vec![DiffLine::new(None, legacy.diff, LineClass::Unchanged)],
            altered_lines: Vec::new(),
            summary: DiffSummary::default(),
        });
    }

    let diff_type = match body.remove("diff_type") {
        Some(value) => serde_json::from_value::<String>(value)
            .map_err(|err| malformed("diff_type", err))?,
        None => String::new(),
    };
    let mode = mode_for_label(&diff_type);
    let original_lines = take_lines(&mut body, "diff_lines_original")?;
    let altered_lines = match mode {
        DiffMode::LineText => take_lines(&mut body, "diff_lines_altered")?,
        DiffMode::Structured => Vec::new(),
    };
    let summary: DiffSummary = take_field(&mut body, "summary")?;

    Ok(DiffResult {
        mode,
        diff_type,
        original_lines,
        altered_lines,
        summary,
    })
}

pub fn mode_for_label(label: &str) -> DiffMode {
    let label = label.trim().to_lowercase();
    if TEXT_LABELS.contains(&label.as_str()) {
        DiffMode::LineText
    } else {
        DiffMode::Structured
    }
}
