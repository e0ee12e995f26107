// Copyright 2024 Google LLC
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

/// The result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The errors reported by the model support functions.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Problem serializing a message into JSON.
    #[error("cannot serialize message, source={0}")]
    Serialization(#[source] BoxError),

    /// Problem deserializing a message from JSON.
    #[error("cannot deserialize message, source={0}")]
    Deserialization(#[source] BoxError),

    /// The message serialized to something other than a JSON object.
    #[error("unexpected JSON type, only objects are supported")]
    UnexpectedJsonType,

    /// The `@type` field does not name the requested message.
    #[error("expected type mismatch, want={want}, got={got}")]
    TypeMismatch { want: String, got: String },

    /// The string is not a valid RFC 3339 timestamp.
    #[error("cannot parse or format timestamp, source={0}")]
    Timestamp(#[source] BoxError),

    /// The string is not a valid duration, e.g., `"3.5s"`.
    #[error("cannot parse duration, source={0}")]
    Duration(#[source] BoxError),

    /// The long-running operation completed with an error.
    #[error("the operation failed, code={code}, message={message}")]
    Operation { code: i32, message: String },
}

impl Error {
    pub(crate) fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::Serialization(source.into())
    }

    pub(crate) fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::Deserialization(source.into())
    }

    /// Returns true if the error was detected while decoding JSON.
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialization(_))
    }

    /// Returns the status code if this is a failed operation.
    pub fn operation_code(&self) -> Option<i32> {
        match self {
            Self::Operation { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let e = Error::deser("bad input");
        assert!(e.is_deserialization(), "{e:?}");
        assert_eq!(e.operation_code(), None);

        let e = Error::Operation {
            code: 5,
            message: "not found".into(),
        };
        assert!(!e.is_deserialization(), "{e:?}");
        assert_eq!(e.operation_code(), Some(5));
        assert!(e.to_string().contains("not found"), "{e}");
    }

    #[test]
    fn source() {
        use std::error::Error as _;
        let e = Error::ser("cannot encode");
        let got = e.source().map(|s| s.to_string());
        assert_eq!(got.as_deref(), Some("cannot encode"));
    }
}
