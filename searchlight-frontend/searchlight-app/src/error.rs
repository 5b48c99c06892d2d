use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("page does not expose the {0} global")]
    ConfigMissing(&'static str),
    #[error("malformed search configuration: {0}")]
    ConfigInvalid(String),
    #[error("system error {0}")]
    SystemError(#[from] SystemError),
}

/// Wraps the non-cloneable transport errors in an Rc so results can be
/// stored in reactive state.
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(feature = "hydrate")]
    GlooError(Rc<gloo_net::Error>),
    #[cfg(not(feature = "hydrate"))]
    ReqwestError(Rc<reqwest::Error>),
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(not(feature = "hydrate"))]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(not(feature = "hydrate"))]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_qs::Error> for SystemError {
    fn from(value: serde_qs::Error) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<serde_qs::Error> for AppError {
    fn from(value: serde_qs::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(feature = "hydrate")]
            SystemError::GlooError(gloo) => write!(f, "{}", gloo),
            #[cfg(not(feature = "hydrate"))]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(feature = "hydrate")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            #[cfg(not(feature = "hydrate"))]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
