//! Asynchronous vhost directory client.
//!
//! A [`VhostClient`] owns one transport handle to one server. Each operation
//! is a single request/response exchange against `{base_path}/vhost/`: no
//! caching, no retries, and no work left running once the call returns.

use crate::models::{AddRequest, AddResponse, ListHost, ListResponse};
use crate::Result;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;
use vhost_core::client::ClientConfig;
use vhost_core::config::VhostClientConfig;
use vhost_core::Error;

/// Builder for [`VhostClient`].
#[derive(Debug, Clone)]
pub struct VhostClientBuilder {
    origin: Url,
    base_path: String,
    http_config: ClientConfig,
    http: Option<Client>,
}

impl VhostClientBuilder {
    /// Create a builder from the server URL.
    ///
    /// The URL is split into its network location and its path; the path
    /// (without a trailing `/`) becomes the prefix of every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL cannot be parsed, has no
    /// host, carries credentials, or is not an `http`/`https` URL.
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        let (origin, base_path) = split_url(url.as_ref())?;
        Ok(Self {
            origin,
            base_path,
            http_config: ClientConfig::new(),
            http: None,
        })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Bound every request by a timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.http_config = self.http_config.with_timeout(timeout);
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &'static str) -> Self {
        self.http_config = self.http_config.with_user_agent(user_agent);
        self
    }

    /// Use a pre-built `reqwest` client instead of building one.
    ///
    /// The HTTP configuration is ignored when a client is supplied. `reqwest`
    /// handles are shared, so the connection pool stays alive for as long as
    /// the caller keeps its own clone; dropping or closing the built
    /// [`VhostClient`] only releases this client's reference.
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client, acquiring its transport handle.
    pub fn build(self) -> Result<VhostClient> {
        let http = match self.http {
            Some(http) => http,
            None => self.http_config.build_http()?,
        };

        info!(origin = %self.origin, base_path = %self.base_path, "vhost client ready");

        Ok(VhostClient {
            http,
            origin: self.origin,
            base_path: self.base_path,
        })
    }
}

/// Client for the vhost directory API.
///
/// The transport handle is released when the client is dropped or
/// [`closed`](VhostClient::close), whichever comes first.
#[derive(Debug)]
pub struct VhostClient {
    http: Client,
    origin: Url,
    base_path: String,
}

impl VhostClient {
    /// Construct a client from the server URL, e.g. `http://gw:8083/api`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL is not a usable server
    /// location. No connection is attempted in that case.
    pub fn from_url(url: impl AsRef<str>) -> Result<Self> {
        VhostClientBuilder::new(url)?.build()
    }

    /// Construct a client from a loaded configuration.
    pub fn from_config(config: &VhostClientConfig) -> Result<Self> {
        VhostClientBuilder::new(&config.api_url)?
            .with_http_config(config.http_config())
            .build()
    }

    /// Path prefix prepended to every request, without a trailing `/`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Scheme, host and port of the server.
    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Register `target` under a hostname derived from `host_prefix`.
    ///
    /// Returns the full hostname assigned by the server.
    pub async fn add(&self, host_prefix: &str, target: &str) -> Result<String> {
        let payload = AddRequest::new(host_prefix, target);
        let path = self.vhost_path("");
        let request = self.request(Method::POST, &path).json(&payload);
        let response = self.execute(request, &path).await?;
        let body: AddResponse = decode(&path, response).await?;
        Ok(body.hostname)
    }

    /// Remove the mapping for `hostname`.
    ///
    /// The hostname is appended to `{base_path}/vhost/` without any escaping
    /// of its own. Characters that cannot appear in a URL path are still
    /// percent-encoded by the URL layer (`"a b?c"` is sent as
    /// `/vhost/a%20b%3Fc`), while `/` and `.` segments pass through and are
    /// interpreted by the server. No escaping policy for hostnames is defined
    /// yet; callers should only pass hostnames returned by [`add`](Self::add)
    /// or [`list`](Self::list).
    pub async fn remove(&self, hostname: &str) -> Result<()> {
        let path = self.vhost_path(hostname);
        let request = self.request(Method::DELETE, &path);
        self.execute(request, &path).await.map(|_| ())
    }

    /// List all mappings, in the order the server returns them.
    pub async fn list(&self) -> Result<Vec<ListHost>> {
        let path = self.vhost_path("");
        let request = self.request(Method::GET, &path);
        let response = self.execute(request, &path).await?;
        let body: ListResponse = decode(&path, response).await?;
        Ok(body.hosts)
    }

    /// Release the transport handle.
    ///
    /// A handle injected with [`VhostClientBuilder::with_http_client`] is
    /// only released here if the caller holds no other clone of it.
    pub fn close(self) {
        debug!(origin = %self.origin, "closing vhost client");
    }

    fn vhost_path(&self, hostname: &str) -> String {
        format!("{}/vhost/{hostname}", self.base_path)
    }

    fn build_url(&self, path: &str) -> Url {
        let mut url = self.origin.clone();
        url.set_path(path);
        url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.build_url(path);
        debug!(%method, path, "vhost request");
        self.http.request(method, url)
    }

    async fn execute(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "vhost response");

        // Non-200 bodies are never read.
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

async fn decode<R>(path: &str, response: Response) -> Result<R>
where
    R: DeserializeOwned,
{
    let bytes = response.bytes().await.map_err(Error::Transport)?;
    serde_json::from_slice(&bytes).map_err(|err| {
        Error::MalformedResponse(format!("Failed to parse vhost response for `{path}`: {err}"))
    })
}

fn split_url(raw: &str) -> Result<(Url, String)> {
    let url = Url::parse(raw)
        .map_err(|err| Error::ConfigError(format!("Invalid vhost API URL `{raw}`: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigError(format!(
            "Unsupported scheme `{}` in vhost API URL `{raw}`",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::ConfigError(format!(
            "Missing host in vhost API URL `{raw}`"
        )));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(Error::ConfigError(
            "Credentials are not supported in the vhost API URL".to_string(),
        ));
    }

    let base_path = url.path().trim_end_matches('/').to_string();
    let mut origin = url;
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);

    Ok((origin, base_path))
}
