use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Record {id} is missing required field: {field}")]
    MissingField { id: u32, field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
