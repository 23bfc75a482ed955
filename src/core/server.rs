use crate::domain::ports::ServePolicy;
use crate::utils::error::{KitError, Result};
use axum::extract::{Request, State};
use axum::http::{header, HeaderName, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

pub struct DevServer<P> {
    root: PathBuf,
    port: u16,
    policy: Arc<P>,
}

impl<P: ServePolicy + 'static> DevServer<P> {
    pub fn new(root: impl Into<PathBuf>, port: u16, policy: P) -> Self {
        Self {
            root: root.into(),
            port,
            policy: Arc::new(policy),
        }
    }

    /// Static-file router with the policy layer applied to every response.
    pub fn router(&self) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&self.root))
            .layer(middleware::from_fn_with_state(
                self.policy.clone(),
                apply_policy::<P>,
            ))
    }

    pub async fn run(&self) -> Result<()> {
        let listener = bind(self.port).await?;

        println!("\n🌐 Server started at: http://localhost:{}", self.port);
        println!("📱 Open this URL in your browser to start chatting!");
        println!("\nPress Ctrl+C to stop the server.\n");
        tracing::info!("Serving {} on 0.0.0.0:{}", self.root.display(), self.port);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(KitError::IoError)?;

        println!("\n👋 Server stopped by user.");
        Ok(())
    }
}

/// Bind the listener, reporting an occupied port distinctly from other
/// startup failures.
pub async fn bind(port: u16) -> Result<TcpListener> {
    match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => Err(KitError::PortInUseError { port }),
        Err(e) => Err(KitError::StartupError {
            message: e.to_string(),
        }),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn apply_policy<P: ServePolicy>(
    State(policy): State<Arc<P>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    // WebLLM 需要 cross-origin isolation 才能使用 SharedArrayBuffer
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-embedder-policy"),
        HeaderValue::from_static("require-corp"),
    );

    if let Some(mime) = policy.content_type_for(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }

    if policy.should_log(&path) {
        tracing::info!("{} {} {}", method, path, response.status());
    }

    response
}
