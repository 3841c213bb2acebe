use thiserror::Error;

/// Errors produced while rendering a property set.
#[derive(Debug, Error)]
pub enum Error {
    /// A sub-schema could not be encoded. The whole rendering is abandoned.
    #[error("failed to encode property `{name}`: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write rendered properties: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_encode_message_names_property() {
        let err = Error::Encode {
            name: "age".to_string(),
            source: serde_json::Error::custom("boom"),
        };
        assert_eq!(err.to_string(), "failed to encode property `age`: boom");
    }

    #[test]
    fn test_io_from() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
