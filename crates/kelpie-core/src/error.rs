pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed schema document: {message}")]
    MalformedDocument { message: String },

    #[error("Schema document serialization failed: {message}")]
    DocumentSerialize { message: String },
}
