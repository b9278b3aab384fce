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

use super::service::ServiceError;
use crate::validation::ValidationError;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// request may fail the client-side validation, the transport may be unable to
/// send the request, or the service may reject it.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use geosdk_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_validation() => { println!("fix the request {e}"); },
///     Err(e) if matches!(e.status(), Some(s) if s.code().is_transient()) => {
///         println!("try again later {e}");
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use geosdk_gax::error::service::{Code, ServiceError};
///     # Err(Error::service(ServiceError::new(Code::ThrottlingException).set_message("slow down")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a request that failed client-side
    /// validation.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use geosdk_gax::error::Error;
    /// use geosdk_gax::validation::Validator;
    /// let mut validator = Validator::new();
    /// validator.required("TrackerName", None::<&str>);
    /// let Err(e) = validator.finish() else { unreachable!() };
    /// let error = Error::validation(e);
    /// assert!(error.is_validation());
    /// assert!(error.source().is_some());
    /// ```
    pub fn validation(source: ValidationError) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The request failed the client-side validation and was never sent.
    ///
    /// # Troubleshooting
    ///
    /// The error [source][std::error::Error::source] is a
    /// [ValidationError], which lists each field that failed and the reason.
    /// Fix the request before trying again, the request will fail the same
    /// way until it changes.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// Returns the validation problems, if this is a validation error.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self.kind {
            ErrorKind::Validation => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<ValidationError>()),
            _ => None,
        }
    }

    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use geosdk_gax::error::Error;
    /// use geosdk_gax::error::service::{Code, ServiceError};
    /// let status = ServiceError::new(Code::ResourceNotFoundException).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            source: None,
        }
    }

    /// The error details returned by the service, if any.
    ///
    /// Returns `None` for errors detected before the request reached the
    /// service.
    pub fn status(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(s) => s.http_status_code(),
            ErrorKind::Transport(code) => *code,
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a problem in the transport layer.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(status_code: Option<u16>, source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(status_code),
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing an I/O problem, such as a connection
    /// failure.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::transport(None, source)
    }

    /// A problem reported by the transport layer.
    ///
    /// The request may or may not have reached the service. If the request
    /// mutates any state in the service, it may or may not be safe to attempt
    /// the request again.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have completed in the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => write!(f, "the request is invalid: {e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Transport(Some(code)), Some(e)) => {
                write!(f, "the HTTP transport reports a [{code}] error: {e}")
            }
            (ErrorKind::Transport(None), Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Service(s), _) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                s.code(),
                s.message()
            ),
            (kind, None) => write!(f, "{kind:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Validation,
    Serialization,
    Deserialization,
    Transport(Option<u16>),
    Service(Box<ServiceError>),
}
