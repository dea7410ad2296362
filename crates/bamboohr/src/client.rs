//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{EmployeesApi, FilesApi};
use crate::error::{Error, Result};

/// Scheme and host the company gateway path is appended to.
pub const DEFAULT_API_ROOT: &str = "https://api.bamboohr.com";

/// Default overall timeout for the built-in transport.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connect timeout for the built-in transport.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// BambooHR API client.
///
/// Cloning is cheap; clones share the same transport and credential. The
/// base URL and credential never change after construction, so build a new
/// client to rotate keys or target another company.
///
/// # Example
///
/// ```no_run
/// use bamboohr::BambooClient;
///
/// # async fn example() -> bamboohr::Result<()> {
/// let client = BambooClient::new("my-api-key", "acme")?;
///
/// let people = client.employees().directory().await?;
/// println!("{} employees", people.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BambooClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// `<api root>/api/gateway.php/<company>/v1`
    base_url: Url,
    /// Precomputed `Authorization` header value.
    auth: HeaderValue,
}

impl BambooClient {
    /// Create a client with the default transport.
    pub fn new(api_key: impl Into<String>, company: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).company(company).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The `Authorization` header value sent with every request.
    pub fn authorization(&self) -> &str {
        // Built from a base64 string, always visible ASCII.
        self.inner.auth.to_str().unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the employees API.
    pub fn employees(&self) -> EmployeesApi {
        EmployeesApi::new(self.clone())
    }

    /// Access the employee files API.
    pub fn files(&self) -> FilesApi {
        FilesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL below the company gateway from path segments.
    ///
    /// Each segment is percent-encoded on its own, so `/`, `?` and `#` inside
    /// a caller-supplied ID stay inside that segment. An empty final segment
    /// produces a trailing slash.
    pub(crate) fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        append_segments(&mut url, segments)?;
        Ok(url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Send a request and decode its JSON body.
    ///
    /// Every endpoint goes through here. Statuses outside `[200, 400)` become
    /// [`Error::Api`] without reading the body. `201 Created` returns
    /// `Ok(None)` without decoding; any other success decodes into `T`
    /// (use [`serde::de::IgnoredAny`] when the shape doesn't matter).
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>> {
        let request = request
            .header(AUTHORIZATION, self.inner.auth.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .build()?;

        tracing::debug!(method = %request.method(), url = %request.url(), "Sending BambooHR request");

        let response = self.inner.http.execute(request).await?;
        let status = response.status();

        tracing::debug!(status = status.as_u16(), "Received BambooHR response");

        if status.as_u16() < 200 || status.as_u16() >= 400 {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        if status == StatusCode::CREATED {
            tracing::debug!("Created, skipping body");
            return Ok(None);
        }

        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }
}

/// Check that a caller-supplied identifier can stand as one path segment.
///
/// `.` and `..` would be dropped or resolved against the gateway path, and an
/// empty ID would address a different endpoint.
pub(crate) fn path_segment(id: &str) -> Result<&str> {
    match id {
        "" | "." | ".." => Err(Error::InvalidId(id.to_string())),
        _ => Ok(id),
    }
}

fn append_segments<'a>(url: &mut Url, segments: impl IntoIterator<Item = &'a str>) -> Result<()> {
    url.path_segments_mut()
        .map_err(|_| Error::Config("API root cannot be a base URL".to_string()))?
        .extend(segments);
    Ok(())
}

impl fmt::Debug for BambooClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BambooClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("auth", &"<redacted>")
            .finish()
    }
}

/// Builder for creating a BambooClient.
pub struct ClientBuilder {
    api_key: Option<String>,
    company: Option<String>,
    api_root: String,
    http: Option<reqwest::Client>,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            api_key: None,
            company: None,
            api_root: DEFAULT_API_ROOT.to_string(),
            http: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the company subdomain (`acme` for `acme.bamboohr.com`).
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Override the scheme and host the gateway path is appended to.
    pub fn api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into();
        self
    }

    /// Use a caller-supplied HTTP client.
    ///
    /// The timeout and user agent settings on this builder only apply to the
    /// built-in client and are ignored when one is supplied here.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Set the overall request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BambooClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;
        let company = self
            .company
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Error::Config("company is required".to_string()))?;

        let company = path_segment(&company)
            .map_err(|_| Error::Config(format!("Invalid company: {:?}", company)))?;
        let mut base_url = Url::parse(self.api_root.trim_end_matches('/'))?;
        append_segments(&mut base_url, ["api", "gateway.php", company, "v1"])?;

        // The service pairs the key with a throwaway password.
        let encoded = STANDARD.encode(format!("{}:x", api_key));
        let mut auth = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|_| Error::Config("Invalid api_key".to_string()))?;
        auth.set_sensitive(true);

        let http = match self.http {
            Some(http) => http,
            None => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("bamboohr-rs/{}", env!("CARGO_PKG_VERSION")));
                reqwest::Client::builder()
                    .timeout(self.timeout)
                    .connect_timeout(self.connect_timeout)
                    .user_agent(user_agent)
                    .build()?
            }
        };

        Ok(BambooClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                auth,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("company", &self.company)
            .field("api_root", &self.api_root)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
