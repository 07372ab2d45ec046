use thiserror::Error;

use crate::model::{ParseIdError, ReviewError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
