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

//! Google Cloud Client Libraries for Rust - Cloud Healthcare API
//!
//! This crate contains the messages of the [Cloud Healthcare API] v1. Each
//! message is a plain record that serializes to, and deserializes from, the
//! JSON representation used by the service:
//!
//! * Fields are optional. Fields that are not set are omitted from the JSON
//!   payload.
//! * Enumerations are represented as strings.
//! * Fields containing binary data use [bytes::Bytes] and are base64-encoded
//!   in JSON.
//! * Properties not known to this version of the crate are preserved.
//!
//! Long-running RPCs return an [Operation][model::Operation]. Use the
//! functions in [apicore::lro] to wait for and decode their results.
//!
//! [Cloud Healthcare API]: https://cloud.google.com/healthcare

pub mod model;

mod operation;
