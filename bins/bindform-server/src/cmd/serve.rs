use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::{self, AppState};

pub async fn run(config_path: &Path, port_override: Option<u16>) -> Result<(), ServerError> {
    let config = ServerConfig::from_file(config_path)?;
    let forms = config.resolve_forms()?;
    for (name, entry) in &forms {
        for spec in entry.schema.unsupported_fields() {
            tracing::warn!(
                form = %name,
                field = %spec.name,
                type_name = %spec.type_name,
                "field type is not bindable, requests will fail at this field"
            );
        }
        tracing::debug!(form = %name, source = ?entry.source, fields = entry.schema.fields.len(), "registered form");
    }
    tracing::info!(config = %config_path.display(), forms = forms.len(), "loaded config");

    let state = AppState {
        forms: Arc::new(forms),
    };

    let token = CancellationToken::new();

    let port = port_override.unwrap_or(config.listen_port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| ServerError::Listen { port, source })?;

    let api_token = token.clone();
    let api_handle = tokio::spawn(async move {
        axum::serve(listener, routes::router(state))
            .with_graceful_shutdown(api_token.cancelled_owned())
            .await
    });
    tracing::info!(port, "http server listening");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");
    token.cancel();

    match api_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(ServerError::Serve(e)),
        Err(e) => tracing::error!(error = %e, "http server task failed"),
    }

    tracing::info!("bindform-server stopped");
    Ok(())
}
