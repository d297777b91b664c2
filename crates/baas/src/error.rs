/// Errors from the content source layer.
#[derive(Debug, thiserror::Error)]
pub enum BaasError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The BaaS returned a non-2xx status code.
    #[error("BaaS API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A document could not be decoded into the expected shape.
    #[error("Failed to decode {collection} documents: {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// The fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file is not valid fixture JSON.
    #[error("Invalid fixture {path}: {source}")]
    FixtureFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
