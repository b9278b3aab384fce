// Copyright 2025 Google LLC
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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the region. The
//! geolocation client libraries for Rust use a generic builder type to provide
//! such functionality. The types in this module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use geosdk_gax::client_builder::examples;
//! # use geosdk_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client for a different region
//!
//! ```
//! # use geosdk_gax::client_builder::examples;
//! # use geosdk_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_region("eu-west-1")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for client builders.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use geosdk_gax::client_builder::examples;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = match Client::builder().with_endpoint("http://[::1").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_endpoint() => {
///         println!("the endpoint is not a valid URL {e:?}");
///         return;
///     }
///     Err(e) => {
///         println!("some other error {e}");
///         return;
///     }
/// };
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the endpoint override is not a valid URL.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    /// If true, the region is not a valid region name.
    pub fn is_region(&self) -> bool {
        matches!(&self.0, ErrorKind::Region(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn region<T: Into<String>>(region: T) -> Self {
        Self(ErrorKind::Region(region.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the endpoint is not a valid URL")]
    Endpoint(#[source] BoxError),
    #[error("the region ({0}) is not a valid region name")]
    Region(String),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the geolocation client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use geosdk_gax::client_builder::examples;
/// # use geosdk_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint may be a host name, `https://` is assumed in that case, or
    /// a full URL. An endpoint takes precedence over the region.
    ///
    /// ```
    /// # use geosdk_gax::client_builder::examples;
    /// # use geosdk_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("http://localhost:8080")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the region, such as `us-west-2`.
    ///
    /// The client sends requests to the regional endpoint for the service.
    /// The default region is `us-east-1`.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use geosdk_gax::client_builder::examples;
    /// # use geosdk_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// // Observe spans and events in your tracing subscriber.
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Disables the client-side validation of requests.
    ///
    /// By default the client checks each request against the constraints
    /// documented by the service, and fails without sending the request if
    /// any are violated. With this option all requests are sent, and the
    /// service reports any problems.
    pub fn without_validation(mut self) -> Self {
        self.config.validation = false;
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A common implementation used by all the clients. Each client library
    /// converts this into the options used by the stubs.
    #[derive(Clone, Debug, PartialEq)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub tracing: bool,
        pub validation: bool,
    }

    impl std::default::Default for ClientConfig {
        fn default() -> Self {
            Self {
                endpoint: None,
                region: None,
                tracing: false,
                validation: true,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            crate::options::resolve_endpoint(&config)?;
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

}
