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

use std::time::Duration;

use anyhow::Result;
use suga_client::{Client, PresignOptions};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::from_env().await?;
    let bucket = client.bucket("images");

    bucket.write("cat.png", vec![1, 2, 3]).await?;
    println!("cat.png = {:?}", bucket.read("cat.png").await?);
    println!("exists = {}", bucket.exists("cat.png").await?);
    println!("keys = {:?}", bucket.list("").await?);

    println!("download = {}", bucket.get_download_url("cat.png", None).await?);
    let opts = PresignOptions::write().with_expiry(Duration::from_secs(60));
    println!("upload = {}", bucket.get_upload_url("dog.png", Some(opts)).await?);

    bucket.delete("cat.png").await?;
    println!("exists = {}", bucket.exists("cat.png").await?);
    Ok(())
}
