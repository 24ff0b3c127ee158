use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] wc_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] wc_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] wc_auth::AuthError),

    #[error("Payment provider setup failed: {0}")]
    Payment(#[from] crate::payment::PaymentError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
