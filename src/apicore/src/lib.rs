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

//! Support types for the discovery-based Google Cloud model crates.
//!
//! The `google-cloud-healthcare-v1` and `google-cloud-workloadmanager-v1`
//! crates contain nothing but message definitions. The message definitions
//! rely on this crate for:
//!
//! * the [Message][message::Message] trait, and the partial update merge
//!   offered by [MessageExt][message::MessageExt],
//! * the JSON encoding of 64-bit integers in [internal],
//! * converting list RPCs into streams via [Paginator][paginator::Paginator],
//! * decoding the results of long-running operations, see [lro],
//! * parsing the timestamp and duration strings used in resources.

mod error;
pub use error::*;

pub mod duration;
pub mod internal;
pub mod lro;
pub mod message;
pub mod paginator;
pub mod timestamp;

/// A JSON object, as used by free-form message fields.
pub type Map = serde_json::Map<String, serde_json::Value>;
