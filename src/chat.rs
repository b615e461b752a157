//! # Sessão de Chat — Histórico Limitado
//!
//! A [`ChatSession`] é o dono explícito do histórico da conversa. Não existe
//! estado global: quem precisa da sessão recebe uma referência a ela (no
//! servidor, uma por navegador via [`SessionStore`](crate::web::state::SessionStore)).
//!
//! ## Ciclo de uma Pergunta
//!
//! ```text
//! ask("o que é sepse?")
//!   ├── 1. trim — texto vazio é ignorado (None)
//!   ├── 2. registra a mensagem do usuário
//!   ├── 3. FaqResolver::resolve_detailed()
//!   ├── 4. registra a resposta da assistente
//!   └── 5. descarta as mensagens mais antigas além do limite
//! ```
//!
//! ## Roles
//!
//! | Role | Significado |
//! |------|-------------|
//! | `User` | Pergunta digitada pelo estudante |
//! | `Assistant` | Resposta do resolvedor (ou saudação inicial) |

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::resolver::{FaqResolver, MatchStage};

/// Limite padrão de mensagens mantidas no histórico.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Saudação inserida no início de toda sessão.
pub const GREETING: &str =
    "💙 Bem-vindo! Estou pronta para responder suas dúvidas sobre enfermagem. Pode perguntar qualquer coisa!";

/// Autor da mensagem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Mensagem do estudante.
    User,
    /// Mensagem da assistente.
    Assistant,
}

/// Uma mensagem do histórico.
#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    /// Texto puro, com `\n` como quebra de linha.
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

/// Par pergunta/resposta produzido por [`ChatSession::ask`].
#[derive(Clone, Debug)]
pub struct Exchange {
    pub question: ChatMessage,
    pub answer: ChatMessage,
    pub stage: MatchStage,
}

/// Sessão de chat com histórico limitado às mensagens mais recentes.
pub struct ChatSession {
    /// Resolvedor compartilhado (imutável).
    resolver: Arc<FaqResolver>,
    /// Mensagens em ordem cronológica.
    history: VecDeque<ChatMessage>,
    /// Quantas mensagens manter.
    limit: usize,
}

impl ChatSession {
    /// Cria uma sessão já com a saudação inicial.
    ///
    /// Um `limit` zero é tratado como 1: a sessão sempre guarda ao menos a
    /// última mensagem.
    pub fn new(resolver: Arc<FaqResolver>, limit: usize) -> Self {
        let mut session = Self {
            resolver,
            history: VecDeque::new(),
            limit: limit.max(1),
        };
        session.push(ChatMessage::new(MessageRole::Assistant, GREETING));
        session
    }

    /// Faz uma pergunta e registra pergunta + resposta no histórico.
    ///
    /// Retorna `None` (sem alterar o histórico) para texto vazio.
    pub fn ask(&mut self, text: &str) -> Option<Exchange> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let question = ChatMessage::new(MessageRole::User, text);
        self.push(question.clone());

        let resolution = self.resolver.resolve_detailed(text);
        let answer = ChatMessage::new(MessageRole::Assistant, resolution.answer);
        self.push(answer.clone());

        tracing::info!(
            stage = ?resolution.stage,
            history = self.history.len(),
            "Pergunta respondida"
        );

        Some(Exchange {
            question,
            answer,
            stage: resolution.stage,
        })
    }

    /// Limpa o histórico e reinsere a saudação.
    pub fn reset(&mut self) {
        self.history.clear();
        self.push(ChatMessage::new(MessageRole::Assistant, GREETING));
    }

    /// Histórico em ordem cronológica.
    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Horário da mensagem mais recente.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.history.back().map(|m| m.timestamp)
    }

    /// Acrescenta e descarta o excedente mais antigo.
    fn push(&mut self, message: ChatMessage) {
        self.history.push_back(message);
        while self.history.len() > self.limit {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(limit: usize) -> ChatSession {
        ChatSession::new(Arc::new(FaqResolver::builtin()), limit)
    }

    #[test]
    fn starts_with_greeting() {
        let s = session(DEFAULT_HISTORY_LIMIT);
        let first = s.history().next().expect("saudação");
        assert_eq!(first.role, MessageRole::Assistant);
        assert_eq!(first.text, GREETING);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn ask_records_question_and_answer() {
        let mut s = session(DEFAULT_HISTORY_LIMIT);
        let exchange = s.ask("  o que é sepse  ").expect("resposta");
        assert_eq!(exchange.question.text, "o que é sepse");
        assert!(exchange.question.is_user());
        assert!(exchange.answer.text.contains("qSOFA"));
        assert!(matches!(exchange.stage, MatchStage::Keyword { .. }));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn blank_question_is_ignored() {
        let mut s = session(DEFAULT_HISTORY_LIMIT);
        assert!(s.ask(" \n ").is_none());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn history_keeps_most_recent_messages() {
        let mut s = session(4);
        for i in 0..5 {
            s.ask(&format!("pergunta {i}"));
        }
        assert_eq!(s.len(), 4);
        let texts: Vec<_> = s.history().map(|m| m.text.clone()).collect();
        assert_eq!(texts[2], "pergunta 4");
        assert!(s.history().all(|m| m.text != GREETING));
    }

    #[test]
    fn zero_limit_keeps_last_message() {
        let mut s = session(0);
        assert_eq!(s.len(), 1);
        s.ask("novalgina");
        assert_eq!(s.len(), 1);
        assert_eq!(s.history().next().map(|m| m.role), Some(MessageRole::Assistant));
    }

    #[test]
    fn last_activity_follows_newest_message() {
        let mut s = session(DEFAULT_HISTORY_LIMIT);
        let before = s.last_activity().expect("saudação");
        let exchange = s.ask("sepse").expect("resposta");
        assert_eq!(s.last_activity(), Some(exchange.answer.timestamp));
        assert!(exchange.answer.timestamp >= before);
    }

    #[test]
    fn reset_restores_greeting() {
        let mut s = session(DEFAULT_HISTORY_LIMIT);
        s.ask("rcp");
        s.reset();
        assert_eq!(s.len(), 1);
        assert_eq!(s.history().next().map(|m| m.text.as_str()), Some(GREETING));
    }
}
