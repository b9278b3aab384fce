// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client configuration and per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the configuration.
//! Notably the default region does not work for most applications. The
//! [ClientBuilder][crate::client_builder::ClientBuilder] captures these
//! settings, and each client resolves them into the [RequestOptions] passed
//! to every request.

use crate::client_builder::internal::ClientConfig;
use crate::client_builder::{Error as BuilderError, Result as BuilderResult};
use regex::Regex;

/// The environment variable that enables tracing in all clients.
pub const LOGGING_VAR: &str = "GEOSDK_RUST_LOGGING";

/// The region used when the application does not configure one.
pub const DEFAULT_REGION: &str = "us-east-1";

lazy_static::lazy_static! {
    static ref REGION: Regex = Regex::new(r"^[a-z]{2}(-[a-z]+)+-[0-9]+$").unwrap();
}

/// The options for each request.
///
/// The clients resolve these options once, when they are constructed, and
/// pass them to the stub with each request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    endpoint: String,
    region: String,
}

impl std::default::Default for RequestOptions {
    fn default() -> Self {
        Self {
            endpoint: format!("https://geo.{DEFAULT_REGION}.amazonaws.com/"),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl RequestOptions {
    /// Resolves the options for a client configuration.
    ///
    /// # Example
    /// ```
    /// # use geosdk_gax::options::RequestOptions;
    /// # use geosdk_gax::client_builder::internal::ClientConfig;
    /// let mut config = ClientConfig::default();
    /// config.region = Some("eu-central-1".to_string());
    /// let options = RequestOptions::new(&config)?;
    /// assert_eq!(options.endpoint(), "https://geo.eu-central-1.amazonaws.com/");
    /// assert_eq!(options.region(), "eu-central-1");
    /// # Ok::<(), geosdk_gax::client_builder::Error>(())
    /// ```
    pub fn new(config: &ClientConfig) -> BuilderResult<Self> {
        let region = resolve_region(config)?;
        let endpoint = resolve_endpoint(config)?;
        Ok(Self {
            endpoint: endpoint.into(),
            region: region.to_string(),
        })
    }

    /// The service endpoint, always a valid URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The region used to sign requests.
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Computes the endpoint for a client configuration.
///
/// An endpoint override takes precedence, `https://` is assumed if it has no
/// scheme. Otherwise the endpoint is the regional service endpoint.
pub fn resolve_endpoint(config: &ClientConfig) -> BuilderResult<url::Url> {
    let region = resolve_region(config)?;
    let endpoint = match config.endpoint.as_deref() {
        Some(e) if e.contains("://") => e.to_string(),
        Some(e) => format!("https://{e}"),
        None => format!("https://geo.{region}.amazonaws.com"),
    };
    let url = url::Url::parse(&endpoint).map_err(BuilderError::endpoint)?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(BuilderError::endpoint(format!(
            "missing host in endpoint {endpoint}"
        )));
    }
    Ok(url)
}

fn resolve_region(config: &ClientConfig) -> BuilderResult<&str> {
    let region = config.region.as_deref().unwrap_or(DEFAULT_REGION);
    if !REGION.is_match(region) {
        return Err(BuilderError::region(region));
    }
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    fn config(endpoint: Option<&str>, region: Option<&str>) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = endpoint.map(str::to_string);
        config.region = region.map(str::to_string);
        config
    }

    #[test_case(None, None, "https://geo.us-east-1.amazonaws.com/"; "default")]
    #[test_case(None, Some("ap-southeast-2"), "https://geo.ap-southeast-2.amazonaws.com/"; "region")]
    #[test_case(None, Some("us-gov-west-1"), "https://geo.us-gov-west-1.amazonaws.com/"; "gov region")]
    #[test_case(Some("geo.eu-west-1.amazonaws.com"), None, "https://geo.eu-west-1.amazonaws.com/"; "bare host")]
    #[test_case(Some("localhost:8080"), None, "https://localhost:8080/"; "bare host and port")]
    #[test_case(Some("http://localhost:8080"), Some("eu-west-1"), "http://localhost:8080/"; "endpoint wins")]
    fn endpoint(endpoint: Option<&str>, region: Option<&str>, want: &str) -> anyhow::Result<()> {
        let got = resolve_endpoint(&config(endpoint, region))?;
        assert_eq!(got.as_str(), want);
        Ok(())
    }

    #[test_case(Some("http://[::1"), None; "bad url")]
    #[test_case(Some("file:///tmp/socket"), None; "no host")]
    fn endpoint_error(endpoint: Option<&str>, region: Option<&str>) {
        let err = resolve_endpoint(&config(endpoint, region)).unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[test_case("Mars")]
    #[test_case("us-east")]
    #[test_case("US-EAST-1")]
    #[test_case("")]
    fn region_error(region: &str) {
        let err = RequestOptions::new(&config(None, Some(region))).unwrap_err();
        assert!(err.is_region(), "{err:?}");
    }

    #[test]
    fn request_options() -> anyhow::Result<()> {
        let got = RequestOptions::new(&config(Some("http://localhost:8080"), None))?;
        assert_eq!(got.endpoint(), "http://localhost:8080/");
        assert_eq!(got.region(), DEFAULT_REGION);
        Ok(())
    }

    #[test]
    fn default_matches_default_config() -> anyhow::Result<()> {
        let got = RequestOptions::new(&ClientConfig::default())?;
        assert_eq!(got, RequestOptions::default());
        Ok(())
    }

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        let config = config;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }
}
