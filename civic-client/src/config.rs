//! Client configuration

use std::time::Duration;

/// Per-attempt timeout for one external source
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long resolved records stay cached
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Upper bound on caching seed or sentinel records, so sources are retried
/// soon after an outage
pub const LOCAL_CACHE_TTL: Duration = Duration::from_secs(30);

/// Base URLs of the external data providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub open_data_stack: String,
    /// data.gov.in CKAN endpoints (village list and Census 2011)
    pub data_gov: String,
    pub wikipedia: String,
    pub world_bank: String,
    /// Local Government Directory
    pub lgd: String,
    pub local_body_data: String,
}

impl SourceUrls {
    /// Every provider on one host (mock servers)
    pub fn all(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            open_data_stack: base.clone(),
            data_gov: base.clone(),
            wikipedia: base.clone(),
            world_bank: base.clone(),
            lgd: base.clone(),
            local_body_data: base,
        }
    }
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            open_data_stack: "https://opendatastack.in".into(),
            data_gov: "https://www.data.gov.in".into(),
            wikipedia: "https://en.wikipedia.org".into(),
            world_bank: "https://api.worldbank.org".into(),
            lgd: "https://lgdweb.nic.in".into(),
            local_body_data: "https://localbodydata.com".into(),
        }
    }
}

/// Civic client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-source timeout, also used as the HTTP request timeout
    pub timeout: Duration,

    /// Resolver cache TTL; `None` disables caching
    pub cache_ttl: Option<Duration>,

    pub urls: SourceUrls,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: Some(DEFAULT_CACHE_TTL),
            urls: SourceUrls::default(),
        }
    }

    /// Set the per-source timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the cache TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Always go to the sources
    pub fn without_cache(mut self) -> Self {
        self.cache_ttl = None;
        self
    }

    /// Override provider URLs
    pub fn with_urls(mut self, urls: SourceUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
