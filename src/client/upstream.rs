//! The upstream employee directory client.
//!
//! This is the core of the service: it issues HTTP calls to the upstream
//! REST API, unwraps its `{status, data, message}` envelope, classifies
//! rate-limit and not-found conditions into distinct outcomes, and derives
//! aggregate views from the list result.
//!
//! The client performs no retries and holds no cache; every derived
//! operation re-fetches the list, so two concurrent derived queries may
//! observe different upstream snapshots.

use reqwest::header::RETRY_AFTER;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::UpstreamConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, EmployeeRow};

use super::derived;
use super::outcome::{DeleteOutcome, FetchOutcome};

/// The upstream's wrapping JSON object. Transient wire shape only.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Pre-classified upstream response, shared by all operations.
enum UpstreamReply<T> {
    Success(Envelope<T>),
    NotFound,
    RateLimited(Option<String>),
    Failed(DirectoryError),
}

/// Client for the upstream employee directory REST API.
///
/// Holds one pooled `reqwest` client; constructing the client once and
/// sharing it gives connection reuse across calls. All operations are
/// stateless between calls and safe to invoke concurrently.
///
/// # Example
///
/// ```no_run
/// use employee_directory::client::UpstreamEmployeeClient;
/// use employee_directory::config::UpstreamConfig;
///
/// let client = UpstreamEmployeeClient::new(&UpstreamConfig::default()).unwrap();
/// # drop(client);
/// ```
#[derive(Debug, Clone)]
pub struct UpstreamEmployeeClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamEmployeeClient {
    /// Creates a client for the configured upstream.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] if the underlying HTTP client
    /// cannot be initialized.
    pub fn new(config: &UpstreamConfig) -> DirectoryResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DirectoryError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches all employees from the upstream list endpoint.
    ///
    /// Employees come back in upstream order, fields copied verbatim with
    /// salary and age parsed as integers. A row that fails parsing fails
    /// the whole call (fail-fast; no partial lists).
    pub async fn list_employees(&self) -> FetchOutcome<Vec<Employee>> {
        let url = format!("{}/employees", self.base_url);
        match self.exchange::<Vec<EmployeeRow>>(self.http.get(&url)).await {
            UpstreamReply::Success(envelope) => {
                // Upstream omits `data` for an empty collection.
                let rows = envelope.data.unwrap_or_default();
                let mut employees = Vec::with_capacity(rows.len());
                for row in rows {
                    match Employee::try_from(row) {
                        Ok(employee) => employees.push(employee),
                        Err(error) => {
                            warn!(error = %error, "discarding upstream list: malformed row");
                            return FetchOutcome::Transient(error);
                        }
                    }
                }
                FetchOutcome::Ok(employees)
            }
            // A 404 on the collection endpoint is not a keyed miss.
            UpstreamReply::NotFound => {
                FetchOutcome::Transient(DirectoryError::UpstreamHttp { status: 404 })
            }
            UpstreamReply::RateLimited(retry_after) => FetchOutcome::RateLimited { retry_after },
            UpstreamReply::Failed(error) => {
                warn!(error = %error, "failed to fetch employee list");
                FetchOutcome::Transient(error)
            }
        }
    }

    /// Fetches a single employee by id.
    ///
    /// Returns [`FetchOutcome::Absent`] when the upstream answers 404.
    pub async fn employee_by_id(&self, id: &str) -> FetchOutcome<Employee> {
        let url = format!("{}/employee/{}", self.base_url, id);
        match self.exchange::<EmployeeRow>(self.http.get(&url)).await {
            UpstreamReply::Success(envelope) => self.map_single(envelope),
            UpstreamReply::NotFound => {
                warn!(employee_id = id, "employee not found upstream");
                FetchOutcome::Absent
            }
            UpstreamReply::RateLimited(retry_after) => FetchOutcome::RateLimited { retry_after },
            UpstreamReply::Failed(error) => {
                warn!(employee_id = id, error = %error, "failed to fetch employee");
                FetchOutcome::Transient(error)
            }
        }
    }

    /// Case-insensitive name search over the full list.
    ///
    /// Any non-Ok list outcome degrades to an empty result; availability
    /// of a "no data" answer is preferred over hard failure here.
    pub async fn search_by_name(&self, query: &str) -> Vec<Employee> {
        match self.list_employees().await.into_ok() {
            Some(employees) => derived::filter_by_name(&employees, query),
            None => Vec::new(),
        }
    }

    /// The maximum salary across all employees; 0 on an empty or failed list.
    pub async fn highest_salary(&self) -> i64 {
        match self.list_employees().await.into_ok() {
            Some(employees) => derived::highest_salary(&employees),
            None => 0,
        }
    }

    /// Names of the ten highest-paid employees, salary descending.
    pub async fn top_ten_earning_names(&self) -> Vec<String> {
        match self.list_employees().await.into_ok() {
            Some(employees) => derived::top_earning_names(&employees, 10),
            None => Vec::new(),
        }
    }

    /// Creates an employee by forwarding `input` verbatim to the upstream.
    ///
    /// No local validation is performed; the upstream is the sole validator.
    pub async fn create_employee(
        &self,
        input: serde_json::Map<String, serde_json::Value>,
    ) -> FetchOutcome<Employee> {
        let url = format!("{}/create", self.base_url);
        match self
            .exchange::<EmployeeRow>(self.http.post(&url).json(&input))
            .await
        {
            UpstreamReply::Success(envelope) => self.map_single(envelope),
            UpstreamReply::NotFound => {
                FetchOutcome::Transient(DirectoryError::UpstreamHttp { status: 404 })
            }
            UpstreamReply::RateLimited(retry_after) => FetchOutcome::RateLimited { retry_after },
            UpstreamReply::Failed(error) => {
                warn!(error = %error, "failed to create employee");
                FetchOutcome::Transient(error)
            }
        }
    }

    /// Deletes an employee by id.
    pub async fn delete_employee_by_id(&self, id: &str) -> DeleteOutcome {
        let url = format!("{}/delete/{}", self.base_url, id);
        match self.exchange::<serde_json::Value>(self.http.delete(&url)).await {
            UpstreamReply::Success(envelope) => {
                DeleteOutcome::Succeeded(envelope.message.unwrap_or_default())
            }
            UpstreamReply::NotFound => {
                warn!(employee_id = id, "delete target not found upstream");
                DeleteOutcome::NotFound
            }
            UpstreamReply::RateLimited(retry_after) => DeleteOutcome::RateLimited { retry_after },
            UpstreamReply::Failed(error) => {
                warn!(employee_id = id, error = %error, "failed to delete employee");
                DeleteOutcome::Failed
            }
        }
    }

    /// Sends a request and classifies the response.
    ///
    /// 429 and 404 are split out before body handling; everything else
    /// non-2xx, plus undecodable bodies and non-"success" envelope
    /// statuses, collapses into `Failed` with a typed cause.
    async fn exchange<T: DeserializeOwned>(&self, request: RequestBuilder) -> UpstreamReply<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                return UpstreamReply::Failed(DirectoryError::Transport {
                    message: error.to_string(),
                });
            }
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = retry_after_header(&response);
            warn!(retry_after = ?retry_after, "upstream rate limit exceeded");
            return UpstreamReply::RateLimited(retry_after);
        }
        if status == StatusCode::NOT_FOUND {
            return UpstreamReply::NotFound;
        }
        if !status.is_success() {
            return UpstreamReply::Failed(DirectoryError::UpstreamHttp {
                status: status.as_u16(),
            });
        }

        let envelope: Envelope<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(error) => {
                return UpstreamReply::Failed(DirectoryError::MalformedBody {
                    message: error.to_string(),
                });
            }
        };

        if !envelope.status.eq_ignore_ascii_case("success") {
            return UpstreamReply::Failed(DirectoryError::UpstreamStatus {
                status: envelope.status,
            });
        }

        UpstreamReply::Success(envelope)
    }

    /// Maps a successful single-record envelope into an employee.
    fn map_single(&self, envelope: Envelope<EmployeeRow>) -> FetchOutcome<Employee> {
        let Some(row) = envelope.data else {
            return FetchOutcome::Transient(DirectoryError::MalformedBody {
                message: "success envelope with no data field".to_string(),
            });
        };
        match Employee::try_from(row) {
            Ok(employee) => FetchOutcome::Ok(employee),
            Err(error) => {
                warn!(error = %error, "malformed employee record");
                FetchOutcome::Transient(error)
            }
        }
    }
}

fn retry_after_header(response: &Response) -> Option<String> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
