//! # Estado da Aplicação Web
//!
//! Estado compartilhado entre todos os handlers Axum.
//!
//! ```text
//! AppState (Clone barato: só Arcs)
//!   ├── resolver  : Arc<FaqResolver>    imutável
//!   ├── formulary : Arc<Formulary>      imutável
//!   └── sessions  : Arc<SessionStore>   uma ChatSession por navegador
//!                     └── Mutex<HashMap<Uuid, ChatSession>>
//! ```
//!
//! Cada navegador é identificado pelo cookie [`SESSION_COOKIE`]. O
//! resolvedor nunca bloqueia, então o `Mutex` fica travado só durante um
//! `ask()`. Acima de `capacity` sessões, a menos usada recentemente sai.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::chat::ChatSession;
use crate::pharmacology::Formulary;
use crate::resolver::FaqResolver;

/// Cookie com o id da sessão de chat do navegador.
pub const SESSION_COOKIE: &str = "enfermagem_sessao";

/// Máximo de sessões mantidas em memória.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Sessões de chat indexadas pelo id do cookie.
pub struct SessionStore {
    resolver: Arc<FaqResolver>,
    history_limit: usize,
    capacity: usize,
    sessions: Mutex<HashMap<Uuid, ChatSession>>,
}

impl SessionStore {
    pub fn new(resolver: Arc<FaqResolver>, history_limit: usize, capacity: usize) -> Self {
        Self {
            resolver,
            history_limit,
            capacity: capacity.max(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Executa `f` sobre a sessão `id`, criando-a (com saudação) se preciso.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        let mut sessions = self.sessions.lock();

        if !sessions.contains_key(&id) {
            if sessions.len() >= self.capacity {
                let oldest = sessions
                    .iter()
                    .min_by_key(|(_, session)| session.last_activity())
                    .map(|(id, _)| *id);
                if let Some(oldest) = oldest {
                    sessions.remove(&oldest);
                    tracing::debug!(session = %oldest, "Sessão mais antiga descartada");
                }
            }
            tracing::debug!(session = %id, "Nova sessão de chat");
        }

        let session = sessions
            .entry(id)
            .or_insert_with(|| ChatSession::new(self.resolver.clone(), self.history_limit));
        f(session)
    }

    /// Quantidade de sessões ativas.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }
}

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<FaqResolver>,
    pub formulary: Arc<Formulary>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(resolver: FaqResolver, formulary: Formulary, history_limit: usize) -> Self {
        let resolver = Arc::new(resolver);
        let sessions = SessionStore::new(resolver.clone(), history_limit, DEFAULT_MAX_SESSIONS);
        Self {
            resolver,
            formulary: Arc::new(formulary),
            sessions: Arc::new(sessions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(capacity: usize) -> SessionStore {
        SessionStore::new(Arc::new(FaqResolver::builtin()), 50, capacity)
    }

    #[test]
    fn sessions_are_independent() {
        let store = store(8);
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        store.with_session(a, |s| s.ask("sepse"));
        assert_eq!(store.with_session(a, |s| s.len()), 3);
        assert_eq!(store.with_session(b, |s| s.len()), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn least_recently_used_session_is_evicted() {
        let store = store(2);
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        store.with_session(a, |s| s.len());
        store.with_session(b, |s| s.len());
        store.with_session(a, |s| s.ask("rcp"));
        store.with_session(c, |s| s.len());

        assert_eq!(store.len(), 2);
        // `a` continua com a conversa; `b` foi descartada e volta só com a saudação.
        assert_eq!(store.with_session(a, |s| s.len()), 3);
    }
}
