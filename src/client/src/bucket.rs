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

use suga_api::storage::v2::{storage_client::StorageClient, *};
use tonic::transport::Channel;
use tracing::{debug, warn};

use crate::{Error, PresignOptions, Result};

/// A handle to a named bucket of the storage service.
///
/// Every request issued through a bucket carries its name. The handle is
/// cheap to clone and the underlying channel is shared, so one bucket can
/// serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Bucket {
    name: String,
    client: StorageClient<Channel>,
}

impl Bucket {
    pub fn new(client: StorageClient<Channel>, name: impl Into<String>) -> Self {
        Bucket {
            name: name.into(),
            client,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the content of `key`.
    pub async fn read(&self, key: &str) -> Result<Vec<u8>> {
        debug!("bucket {} read {key}", self.name);
        let mut client = self.client.clone();
        let req = StorageReadRequest {
            bucket_name: self.name.clone(),
            key: key.to_owned(),
        };
        let res = client
            .read(req)
            .await
            .map_err(|status| self.remote_error("read", key, status))?;
        Ok(res.into_inner().body)
    }

    /// Writes `data` to `key`, replacing any existing content.
    pub async fn write(&self, key: &str, data: impl Into<Vec<u8>>) -> Result<()> {
        let body = data.into();
        debug!("bucket {} write {key} with {} bytes", self.name, body.len());
        let mut client = self.client.clone();
        let req = StorageWriteRequest {
            bucket_name: self.name.clone(),
            key: key.to_owned(),
            body,
        };
        client
            .write(req)
            .await
            .map_err(|status| self.remote_error("write", key, status))?;
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        debug!("bucket {} delete {key}", self.name);
        let mut client = self.client.clone();
        let req = StorageDeleteRequest {
            bucket_name: self.name.clone(),
            key: key.to_owned(),
        };
        client
            .delete(req)
            .await
            .map_err(|status| self.remote_error("delete", key, status))?;
        Ok(())
    }

    /// Lists the keys starting with `prefix`, in the order the service
    /// returns them. An empty prefix lists the whole bucket.
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        debug!("bucket {} list prefix {prefix:?}", self.name);
        let mut client = self.client.clone();
        let req = StorageListBlobsRequest {
            bucket_name: self.name.clone(),
            prefix: prefix.to_owned(),
        };
        let res = client
            .list_blobs(req)
            .await
            .map_err(|status| self.remote_error("list", prefix, status))?;
        Ok(res.into_inner().into_keys())
    }

    pub async fn exists(&self, key: &str) -> Result<bool> {
        debug!("bucket {} exists {key}", self.name);
        let mut client = self.client.clone();
        let req = StorageExistsRequest {
            bucket_name: self.name.clone(),
            key: key.to_owned(),
        };
        let res = client
            .exists(req)
            .await
            .map_err(|status| self.remote_error("exists", key, status))?;
        Ok(res.into_inner().exists)
    }

    /// Returns a presigned url for downloading `key`. Without options the url
    /// grants read access for five minutes.
    pub async fn get_download_url(
        &self,
        key: &str,
        options: Option<PresignOptions>,
    ) -> Result<String> {
        let options = options.unwrap_or_else(PresignOptions::read);
        self.presign_url(key, options).await
    }

    /// Returns a presigned url for uploading `key`. Without options the url
    /// grants write access for five minutes.
    pub async fn get_upload_url(
        &self,
        key: &str,
        options: Option<PresignOptions>,
    ) -> Result<String> {
        let options = options.unwrap_or_else(PresignOptions::write);
        self.presign_url(key, options).await
    }

    async fn presign_url(&self, key: &str, options: PresignOptions) -> Result<String> {
        debug!(
            "bucket {} presign {key} mode {} expiry {:?}",
            self.name,
            options.mode(),
            options.expiry(),
        );
        let mut client = self.client.clone();
        let req = options.to_request(&self.name, key);
        let res = client
            .pre_sign_url(req)
            .await
            .map_err(|status| self.remote_error("presign", key, status))?;
        Ok(res.into_inner().url)
    }

    fn remote_error(&self, op: &str, key: &str, status: tonic::Status) -> Error {
        warn!("bucket {} {op} {key:?}: {status}", self.name);
        Error::Remote(status)
    }
}
