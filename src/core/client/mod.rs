//! Public client surface + builder.
//! Endpoint defaults live in `constants`; every base is overridable so tests
//! can point a platform at a local mock server.

mod constants;

use crate::core::CpError;
use constants::{
    DEFAULT_BASE_CODECHEF, DEFAULT_BASE_CODEFORCES_API, DEFAULT_BASE_GEEKSFORGEEKS,
    DEFAULT_BASE_INTERVIEWBIT, DEFAULT_BASE_LEETCODE, DEFAULT_BASE_SPOJ,
    DEFAULT_LEETCODE_GRAPHQL, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP client plus the per-platform endpoint bases.
///
/// Cheap to clone; holds no mutable state, so one instance can serve any
/// number of concurrent lookups.
#[derive(Debug, Clone)]
pub struct CpClient {
    http: Client,
    base_codechef: Url,
    base_codeforces_api: Url,
    base_spoj: Url,
    base_geeksforgeeks: Url,
    base_interviewbit: Url,
    base_leetcode: Url,
    leetcode_graphql: Url,
}

impl Default for CpClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl CpClient {
    /// Create a new builder.
    pub fn builder() -> CpClientBuilder {
        CpClientBuilder::default()
    }

    /* -------- internal getters used by the platform modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_codechef(&self) -> &Url {
        &self.base_codechef
    }
    pub(crate) fn base_codeforces_api(&self) -> &Url {
        &self.base_codeforces_api
    }
    pub(crate) fn base_spoj(&self) -> &Url {
        &self.base_spoj
    }
    pub(crate) fn base_geeksforgeeks(&self) -> &Url {
        &self.base_geeksforgeeks
    }
    pub(crate) fn base_interviewbit(&self) -> &Url {
        &self.base_interviewbit
    }
    pub(crate) fn base_leetcode(&self) -> &Url {
        &self.base_leetcode
    }
    pub(crate) fn leetcode_graphql(&self) -> &Url {
        &self.leetcode_graphql
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct CpClientBuilder {
    user_agent: Option<String>,
    base_codechef: Option<Url>,
    base_codeforces_api: Option<Url>,
    base_spoj: Option<Url>,
    base_geeksforgeeks: Option<Url>,
    base_interviewbit: Option<Url>,
    base_leetcode: Option<Url>,
    leetcode_graphql: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl CpClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the CodeChef profile base (e.g., `https://www.codechef.com/users/`).
    pub fn base_codechef(mut self, url: Url) -> Self {
        self.base_codechef = Some(url);
        self
    }

    /// Override the Codeforces API base (e.g., `https://codeforces.com/api/`).
    pub fn base_codeforces_api(mut self, url: Url) -> Self {
        self.base_codeforces_api = Some(url);
        self
    }

    /// Override the SPOJ profile base (e.g., `https://www.spoj.com/users/`).
    pub fn base_spoj(mut self, url: Url) -> Self {
        self.base_spoj = Some(url);
        self
    }

    /// Override the GeeksForGeeks profile base.
    pub fn base_geeksforgeeks(mut self, url: Url) -> Self {
        self.base_geeksforgeeks = Some(url);
        self
    }

    /// Override the InterviewBit profile base.
    pub fn base_interviewbit(mut self, url: Url) -> Self {
        self.base_interviewbit = Some(url);
        self
    }

    /// Override the LeetCode site base used for the existence probe.
    pub fn base_leetcode(mut self, url: Url) -> Self {
        self.base_leetcode = Some(url);
        self
    }

    /// Override the LeetCode GraphQL endpoint.
    pub fn leetcode_graphql(mut self, url: Url) -> Self {
        self.leetcode_graphql = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `CpError` if a default endpoint fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<CpClient, CpError> {
        let base_codechef = self
            .base_codechef
            .unwrap_or(Url::parse(DEFAULT_BASE_CODECHEF)?);
        let base_codeforces_api = self
            .base_codeforces_api
            .unwrap_or(Url::parse(DEFAULT_BASE_CODEFORCES_API)?);
        let base_spoj = self.base_spoj.unwrap_or(Url::parse(DEFAULT_BASE_SPOJ)?);
        let base_geeksforgeeks = self
            .base_geeksforgeeks
            .unwrap_or(Url::parse(DEFAULT_BASE_GEEKSFORGEEKS)?);
        let base_interviewbit = self
            .base_interviewbit
            .unwrap_or(Url::parse(DEFAULT_BASE_INTERVIEWBIT)?);
        let base_leetcode = self
            .base_leetcode
            .unwrap_or(Url::parse(DEFAULT_BASE_LEETCODE)?);
        let leetcode_graphql = self
            .leetcode_graphql
            .unwrap_or(Url::parse(DEFAULT_LEETCODE_GRAPHQL)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(CpClient {
            http,
            base_codechef,
            base_codeforces_api,
            base_spoj,
            base_geeksforgeeks,
            base_interviewbit,
            base_leetcode,
            leetcode_graphql,
        })
    }
}
