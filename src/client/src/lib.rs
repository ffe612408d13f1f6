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

//! A client for buckets of the Suga storage service.
//!
//! ```no_run
//! # async fn run() -> suga_client::Result<()> {
//! use std::time::Duration;
//!
//! use suga_client::{Client, PresignOptions};
//!
//! let client = Client::from_env().await?;
//! let images = client.bucket("images");
//! images.write("cat.png", vec![0u8; 16]).await?;
//! let opts = PresignOptions::write().with_expiry(Duration::from_secs(60));
//! let _url = images.get_upload_url("cat.png", Some(opts)).await?;
//! # Ok(())
//! # }
//! ```

mod bucket;
mod client;
mod error;
mod presign;

pub use suga_api::storage::v2 as proto;

pub use self::{
    bucket::Bucket,
    client::{Client, ClientOptions, DEFAULT_SERVICE_ADDRESS, SERVICE_ADDRESS_ENV},
    error::{Error, Result},
    presign::{Mode, PresignOptions, DEFAULT_PRESIGN_EXPIRY},
};
