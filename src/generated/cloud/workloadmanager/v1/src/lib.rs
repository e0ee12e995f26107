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

//! Google Cloud Client Libraries for Rust - Workload Manager API
//!
//! This crate contains the messages of the [Workload Manager API] v1.
//!
//! Long-running RPCs return an [Operation][model::Operation], list RPCs
//! return responses that implement [apicore::paginator::PageableResponse].
//!
//! [Workload Manager API]: https://cloud.google.com/workload-manager/docs

pub mod model;

mod operation;
