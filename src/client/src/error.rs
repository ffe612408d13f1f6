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

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The storage service or the channel reported a failure. The status is
    /// carried as received.
    #[error("rpc {0}")]
    Remote(tonic::Status),

    #[error("transport {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("unknown presign mode {0:?}, expect READ or WRITE")]
    UnknownMode(String),
}

impl Error {
    /// Returns the remote status if this error came from an rpc.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::Remote(status) => Some(status),
            _ => None,
        }
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        Error::Remote(status)
    }
}
