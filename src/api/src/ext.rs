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

use crate::storage::v2::*;

impl StorageListBlobsResponse {
    /// Consumes the response and returns blob keys in the order the service
    /// reported them.
    #[inline]
    pub fn into_keys(self) -> Vec<String> {
        self.blobs.into_iter().map(|blob| blob.key).collect()
    }
}

impl StoragePreSignUrlRequest {
    /// Returns the requested expiry as a std duration, treating a missing or
    /// negative value as zero.
    pub fn expiry_duration(&self) -> std::time::Duration {
        match &self.expiry {
            Some(d) if d.seconds >= 0 && d.nanos >= 0 => {
                std::time::Duration::new(d.seconds as u64, d.nanos as u32)
            }
            _ => std::time::Duration::ZERO,
        }
    }
}
