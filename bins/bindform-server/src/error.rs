#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("bind :{port}: {source}")]
    Listen { port: u16, source: std::io::Error },

    #[error("serve: {0}")]
    Serve(std::io::Error),

    #[error("signal: {0}")]
    Signal(#[from] std::io::Error),
}
