use thiserror::Error;

/// Internal issues indicating unexpected behavior or an unusable environment.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to bind the HTTP listener to the configured address.
    #[error("Failed to bind listener to '{address}': {source}")]
    BindListener {
        /// The address from configuration
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// A request handler panicked; carries the panic payload when it was a string.
    #[error("Request handler panicked: {0}")]
    Panic(String),
}
