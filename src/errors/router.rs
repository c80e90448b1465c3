use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("No route matches path: {path}")]
    NoMatch { path: String },
}
