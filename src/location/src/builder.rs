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

pub mod location {
    /// A builder for [Location][crate::client::Location].
    ///
    /// ```
    /// # use geosdk_location::builder::location::ClientBuilder;
    /// # use geosdk_location::client::Location;
    /// # #[derive(Debug)]
    /// # struct MyStub;
    /// # impl geosdk_location::stub::Location for MyStub {}
    /// # tokio_test::block_on(async {
    /// let builder: ClientBuilder<MyStub> = Location::builder(MyStub);
    /// let client = builder
    ///     .with_region("eu-central-1")
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder<T> = gax::client_builder::ClientBuilder<client::Factory<T>>;

    pub(crate) mod client {
        use crate::client::Location;
        use gax::client_builder::internal::{ClientConfig, ClientFactory};

        pub struct Factory<T>(pub T);

        impl<T> ClientFactory for Factory<T>
        where
            T: crate::stub::Location + 'static,
        {
            type Client = Location;
            async fn build(
                self,
                config: ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, self.0)
            }
        }
    }
}
