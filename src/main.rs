#![allow(rustdoc::broken_intra_doc_links)]
//! # Enfermagem Tira-dúvidas — Chat Offline
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! Um chat de estudo para enfermagem que responde perguntas em português a
//! partir de conteúdo embutido no binário: tópicos, comparações, guias de
//! medicamentos e monografias. Nada de rede nem de modelo de linguagem; a
//! resposta sai de regras, palavras-chave e sinônimos.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Carrega Config (config.toml > .env/ambiente > padrão)
//!   ├── Configura tracing/logging (RUST_LOG > [server] log > info)
//!   ├── Monta FaqResolver (base + léxico + regras embutidas + extras)
//!   ├── Monta Formulary
//!   ├── Monta AppState (uma sessão de chat por navegador) e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//!
//! # Logs detalhados (mostra a etapa de cada resposta)
//! RUST_LOG=debug cargo run
//!
//! # Outra porta e regras extras
//! ENFERMAGEM_ADDR=127.0.0.1:8080 ENFERMAGEM_RULES=regras.toml cargo run
//! ```

/// Módulo `config` — configuração com prioridade arquivo > ambiente > padrão.
mod config;

/// Módulo `content` — textos didáticos embutidos.
mod content;

/// Módulo `core` — tipos fundamentais: KnowledgeBase, Lexicon.
mod core;

/// Módulo `nlu` — normalização de texto e detecção de área.
mod nlu;

/// Módulo `resolver` — resolvedor de perguntas e regras contextuais.
mod resolver;

/// Módulo `pharmacology` — monografias de medicamentos.
mod pharmacology;

/// Módulo `chat` — sessão de chat com histórico limitado.
mod chat;

/// Módulo `web` — servidor web axum, handlers HTTP e templates.
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::pharmacology::Formulary;
use crate::resolver::FaqResolver;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("configuração inválida")?;

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config.log_directives(rust_log.as_deref()))
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("🩺 Enfermagem Tira-dúvidas — Starting...");

    let rules = config.load_rules().context("falha ao carregar regras extras")?;
    let resolver = FaqResolver::with_rules(rules);
    tracing::info!(
        topics = resolver.knowledge_base().len(),
        synonyms = resolver.lexicon().synonyms.len(),
        rules = resolver.rules().len(),
        "Base de conhecimento carregada"
    );

    let formulary = Formulary::builtin();
    tracing::info!(drugs = formulary.generics().count(), "Formulário carregado");

    let state = AppState::new(resolver, formulary, config.history_limit);
    let app = web::create_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("falha ao abrir {}", config.bind_addr))?;
    tracing::info!("🚀 Server running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
