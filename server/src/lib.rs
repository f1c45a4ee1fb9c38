use anyhow::Result;
use axum::{
    extract::{Query as Params, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use parking_lot::RwLock;
use quaero_core::loader::load_corpus;
use quaero_core::{answer, Corpus, Error, Query};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct AskParams {
    pub q: String,
    #[serde(default = "default_matches")]
    pub files: usize,
    #[serde(default = "default_matches")]
    pub sentences: usize,
}
fn default_matches() -> usize { 1 }

#[derive(Serialize)]
pub struct AskResponse {
    pub query: String,
    pub took_s: f64,
    pub documents: usize,
    pub answers: Vec<String>,
}

pub struct CorpusState {
    pub corpus: Corpus,
    pub loaded_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct AppState {
    pub corpus_dir: PathBuf,
    pub state: Arc<RwLock<CorpusState>>,
    pub admin_token: Option<String>,
}

pub fn build_app(corpus_dir: String) -> Result<Router> {
    // Load the corpus at startup; an empty directory is served as-is so a
    // reload can populate it later
    let corpus = load_corpus(&corpus_dir)?;
    if corpus.is_empty() {
        tracing::warn!(dir = %corpus_dir, "corpus directory has no .txt documents");
    }
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    let app_state = AppState {
        corpus_dir: PathBuf::from(&corpus_dir),
        state: Arc::new(RwLock::new(CorpusState {
            corpus,
            loaded_at: OffsetDateTime::now_utc(),
        })),
        admin_token,
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/ask", get(ask_handler))
        .route("/stats", get(stats_handler))
        .route("/corpus/reload", post(reload_handler))
        .with_state(app_state)
        .layer(cors);
    Ok(app)
}

pub async fn ask_handler(
    State(state): State<AppState>,
    Params(params): Params<AskParams>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    let query = Query::parse(&params.q);
    let files = params.files.max(1);
    let sentences = params.sentences.max(1);

    // the pipeline is synchronous, so it runs entirely under the read guard;
    // the lock is never held across an await
    let (documents, result) = {
        let guard = state.state.read();
        (guard.corpus.len(), answer(&query, &guard.corpus, files, sentences))
    };
    let answers = match result {
        Ok(answers) => answers,
        Err(err @ Error::EmptyCorpus) => {
            return Err((StatusCode::SERVICE_UNAVAILABLE, err.to_string()))
        }
        Err(err) => return Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string())),
    };

    let elapsed = start.elapsed();
    tracing::debug!(query = %params.q, answers = answers.len(), took_s = elapsed.as_secs_f64(), "answered");
    Ok(Json(AskResponse {
        query: params.q,
        took_s: elapsed.as_secs_f64(),
        documents,
        answers,
    }))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let guard = state.state.read();
    let loaded_at = guard.loaded_at.format(&Rfc3339).unwrap_or_default();
    Json(serde_json::json!({
        "documents": guard.corpus.len(),
        "loaded_at": loaded_at,
    }))
}

async fn reload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    let corpus = load_corpus(&state.corpus_dir)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let documents = corpus.len();
    {
        let mut guard = state.state.write();
        guard.corpus = corpus;
        guard.loaded_at = OffsetDateTime::now_utc();
    }
    tracing::info!(documents, "corpus reloaded");
    Ok(Json(serde_json::json!({ "documents": documents })))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
