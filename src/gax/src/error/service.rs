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

wkt::enumeration! {
    /// The error codes reported by the geolocation service.
    ///
    /// The service reports the error code as the name of an exception type.
    pub enum Code {
        /// The request was denied because of insufficient access or
        /// permissions.
        AccessDeniedException,
        /// The request was unsuccessful because of a conflict.
        ConflictException,
        /// The request has failed to process because of an unknown server
        /// error, exception, or failure.
        InternalServerException,
        /// The resource that you've entered was not found in your AWS account.
        ResourceNotFoundException,
        /// The operation was denied because the request would exceed the
        /// maximum quota set for the account.
        ServiceQuotaExceededException,
        /// The request was denied because of request throttling.
        ThrottlingException,
        /// The input failed to meet the constraints specified by the service.
        ValidationException,
    }
}

impl Code {
    /// The HTTP status code the service uses for each error code.
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Self::AccessDeniedException => Some(403),
            Self::ConflictException => Some(409),
            Self::InternalServerException => Some(500),
            Self::ResourceNotFoundException => Some(404),
            Self::ServiceQuotaExceededException => Some(402),
            Self::ThrottlingException => Some(429),
            Self::ValidationException => Some(400),
            Self::UnknownValue(_) => None,
        }
    }

    /// Returns true if retrying the same request may succeed.
    ///
    /// The client libraries do not retry requests, this is provided for
    /// applications that implement their own retry loops.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::InternalServerException | Self::ThrottlingException
        )
    }
}

/// An error returned by the geolocation service.
///
/// # Example
/// ```
/// # use geosdk_gax::error::service::{Code, ServiceError};
/// let error = ServiceError::new(Code::ResourceNotFoundException)
///     .set_message("tracker not found")
///     .set_http_status_code(404);
/// assert_eq!(error.code(), &Code::ResourceNotFoundException);
/// assert_eq!(error.message(), "tracker not found");
/// assert_eq!(error.http_status_code(), Some(404));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    code: Code,
    message: String,
    http_status_code: Option<u16>,
}

impl ServiceError {
    /// Creates a new error with the given code.
    pub fn new<T: Into<Code>>(code: T) -> Self {
        Self {
            code: code.into(),
            message: String::new(),
            http_status_code: None,
        }
    }

    /// Sets the human readable message.
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the HTTP status code received with the error.
    pub fn set_http_status_code(mut self, v: u16) -> Self {
        self.http_status_code = Some(v);
        self
    }

    /// The error code.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// The message returned by the service.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.http_status_code {
            Some(s) => write!(f, "{} [{s}]: {}", self.code, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ServiceError {}
