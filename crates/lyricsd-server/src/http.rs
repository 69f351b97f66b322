//! HTTP router and the fetch-lyrics handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use lyricsd_model::{ErrorEnvelope, LyricsEnvelope, LyricsQuery};
use lyricsd_scrape::{HttpFetcher, PageFetcher};

use crate::cli::Opts;

#[derive(Clone)]
struct AppState {
    fetcher: Arc<dyn PageFetcher>,
}

pub fn router(fetcher: Arc<dyn PageFetcher>) -> Router {
    Router::new()
        .route("/fetch-lyrics", get(fetch_lyrics))
        .route("/healthz", get(|| async { "ok" }))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::debug_span!("request",
                    http.method = %request.method(),
                    http.target = %request.uri(),
                )
            }),
        )
        .with_state(AppState { fetcher })
}

/// `GET /fetch-lyrics?url=<song page URL>`
///
/// One branch for the missing parameter, one catch-all failure path. The
/// underlying error goes to the log; the response body carries only the
/// fixed message.
async fn fetch_lyrics(
    State(state): State<AppState>,
    Query(query): Query<LyricsQuery>,
) -> Response {
    let Some(url) = query.song_url() else {
        return (StatusCode::BAD_REQUEST, Json(ErrorEnvelope::missing_url())).into_response();
    };

    match lyricsd_scrape::fetch_lyrics(state.fetcher.as_ref(), url).await {
        Ok(lyrics) => (
            StatusCode::OK,
            // CORS header on the success path only
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(LyricsEnvelope { lyrics }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(url = %url, error = %error, "Failed to fetch lyrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::fetch_failed()),
            )
                .into_response()
        }
    }
}

pub async fn start_server(opts: &Opts) -> Result<()> {
    let fetcher = HttpFetcher::new(opts.request_timeout())?;
    let app = router(Arc::new(fetcher));

    let addr = format!("{}:{}", opts.host, opts.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
