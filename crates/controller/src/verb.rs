//! The closed set of HTTP verbs a [`Controller`](crate::Controller) can answer.

use crate::ControllerError;
use http::Method;
use std::fmt;

/// A dispatchable HTTP verb.
///
/// Every variant has a matching method on [`Controller`](crate::Controller). Any other request
/// method (HEAD, TRACE, CONNECT, extension methods) has no handler and is rejected by
/// [`dispatch`](crate::dispatch()).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Verb {
    pub const ALL: [Verb; 6] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete, Verb::Options];

    /// Maps a request method onto a verb, comparing the method token exactly
    #[inline]
    pub fn from_method(method: &Method) -> Option<Self> {
        match method.as_str() {
            "GET" => Some(Verb::Get),
            "POST" => Some(Verb::Post),
            "PUT" => Some(Verb::Put),
            "PATCH" => Some(Verb::Patch),
            "DELETE" => Some(Verb::Delete),
            "OPTIONS" => Some(Verb::Options),
            _ => None,
        }
    }

    #[inline]
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
            Verb::Options => Method::OPTIONS,
        }
    }

    /// the upper case method token, e.g. `GET`
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Options => "OPTIONS",
        }
    }

    /// the capitalized verb name, e.g. `Get`, used in error messages
    #[inline]
    pub fn title(self) -> &'static str {
        match self {
            Verb::Get => "Get",
            Verb::Post => "Post",
            Verb::Put => "Put",
            Verb::Patch => "Patch",
            Verb::Delete => "Delete",
            Verb::Options => "Options",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&Method> for Verb {
    type Error = ControllerError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        Verb::from_method(method).ok_or_else(ControllerError::invalid_method)
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        verb.method()
    }
}
