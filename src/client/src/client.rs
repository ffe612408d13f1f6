// Copyright 2022 The Engula Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use suga_api::storage::v2::storage_client::StorageClient;
use tonic::transport::{Channel, Endpoint};
use tracing::info;

use crate::{Bucket, Result};

/// Environment variable holding the address of the storage service.
pub const SERVICE_ADDRESS_ENV: &str = "SUGA_SERVICE_ADDRESS";

pub const DEFAULT_SERVICE_ADDRESS: &str = "127.0.0.1:50051";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// `host:port` of the storage service, optionally with a scheme.
    pub service_address: String,
}

impl ClientOptions {
    /// Reads options from the process environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_address = lookup(SERVICE_ADDRESS_ENV)
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_ADDRESS.to_owned());
        ClientOptions { service_address }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            service_address: DEFAULT_SERVICE_ADDRESS.to_owned(),
        }
    }
}

/// A connection to the storage service, handing out bucket handles that
/// share it.
#[derive(Debug, Clone)]
pub struct Client {
    client: StorageClient<Channel>,
}

impl Client {
    pub fn new(client: StorageClient<Channel>) -> Self {
        Client { client }
    }

    pub async fn connect(addr: &str) -> Result<Self> {
        let uri = endpoint_uri(addr);
        let channel = Endpoint::from_shared(uri.clone())?.connect().await?;
        info!("connected to storage service {uri}");
        Ok(Self::new(StorageClient::new(channel)))
    }

    /// Like [`Client::connect`], but the channel connects on first use.
    pub fn connect_lazy(addr: &str) -> Result<Self> {
        let channel = Endpoint::from_shared(endpoint_uri(addr))?.connect_lazy();
        Ok(Self::new(StorageClient::new(channel)))
    }

    pub async fn with_options(opts: ClientOptions) -> Result<Self> {
        Self::connect(&opts.service_address).await
    }

    /// Connects to the address named by `SUGA_SERVICE_ADDRESS`.
    pub async fn from_env() -> Result<Self> {
        Self::with_options(ClientOptions::from_env()).await
    }

    pub fn bucket(&self, name: impl Into<String>) -> Bucket {
        Bucket::new(self.client.clone(), name)
    }
}

fn endpoint_uri(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_owned()
    } else {
        format!("http://{}", addr)
    }
}
