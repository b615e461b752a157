//! # Módulo Web — A Interface do Tira-dúvidas
//!
//! Camada web da aplicação, construída com **Axum** + **HTMX** + **Maud**.
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX)                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo) + TraceLayer                  │
//! │  ├── GET  /                  → página do chat           │
//! │  ├── POST /chat              → HTMX fragment            │
//! │  ├── GET  /chat/history      → JSON: mensagens          │
//! │  ├── POST /chat/reset        → HTMX fragment            │
//! │  ├── POST /api/resolve       → JSON: resposta + etapa   │
//! │  ├── GET  /api/topics        → JSON: tópicos e regras   │
//! │  ├── GET  /api/farmacologia  → JSON: monografia         │
//! │  └── GET  /status            → JSON: contagens          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// `assets_dir` é servido em `/assets/*`.
pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments + histórico ───────────────────────
        .route("/chat", post(handlers::chat))
        .route("/chat/history", get(handlers::chat_history))
        .route("/chat/reset", post(handlers::reset_chat))
        // ── API JSON ──────────────────────────────────────────
        .route("/api/resolve", post(handlers::resolve))
        .route("/api/topics", get(handlers::topics))
        .route("/api/farmacologia", get(handlers::pharmacology))
        .route("/status", get(handlers::status))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
