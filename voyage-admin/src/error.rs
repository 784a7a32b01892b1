use std::fmt;

use crate::commands::CollectionName;

#[derive(Debug)]
pub enum AdminError {
    NoActiveFlag(CollectionName),
    Anyhow(anyhow::Error),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::NoActiveFlag(collection) => {
                write!(f, "{} have no active flag; drop --active", collection)
            }
            AdminError::Anyhow(err) => write!(f, "{:#}", err),
        }
    }
}

impl<E> From<E> for AdminError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

pub type AdminResult<T> = Result<T, AdminError>;
