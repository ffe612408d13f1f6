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

use std::{fmt, str::FromStr, time::Duration};

use suga_api::storage::v2::{storage_pre_sign_url_request::Operation, StoragePreSignUrlRequest};

use crate::Error;

/// Lifetime of a presigned url when the caller does not choose one.
pub const DEFAULT_PRESIGN_EXPIRY: Duration = Duration::from_secs(300);

/// The operation a presigned url authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Read,
    Write,
}

impl Mode {
    fn operation(self) -> Operation {
        match self {
            Mode::Read => Operation::Read,
            Mode::Write => Operation::Write,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => f.write_str("READ"),
            Mode::Write => f.write_str("WRITE"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("read") {
            Ok(Mode::Read)
        } else if s.eq_ignore_ascii_case("write") {
            Ok(Mode::Write)
        } else {
            Err(Error::UnknownMode(s.to_owned()))
        }
    }
}

/// Options of a presigned url request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresignOptions {
    mode: Mode,
    expiry: Duration,
}

impl PresignOptions {
    pub fn new(mode: Mode) -> Self {
        PresignOptions {
            mode,
            expiry: DEFAULT_PRESIGN_EXPIRY,
        }
    }

    #[inline]
    pub fn read() -> Self {
        Self::new(Mode::Read)
    }

    #[inline]
    pub fn write() -> Self {
        Self::new(Mode::Write)
    }

    pub fn with_expiry(self, expiry: Duration) -> Self {
        PresignOptions { expiry, ..self }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Builds the wire request for `key` in `bucket`.
    pub fn to_request(&self, bucket: &str, key: &str) -> StoragePreSignUrlRequest {
        StoragePreSignUrlRequest {
            bucket_name: bucket.to_owned(),
            key: key.to_owned(),
            operation: self.mode.operation() as i32,
            expiry: Some(prost_types::Duration {
                seconds: self.expiry.as_secs() as i64,
                nanos: self.expiry.subsec_nanos() as i32,
            }),
        }
    }
}

impl Default for PresignOptions {
    fn default() -> Self {
        Self::read()
    }
}
