//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **dados estáticos** sobre os quais o resolvedor
//! de perguntas trabalha. Nada aqui muda depois da inicialização:
//!
//! - [`KnowledgeEntry`] — Tópico (chave de palavras) → texto de resposta
//! - [`KnowledgeBase`] — Lista ordenada de tópicos + índice chave → posição
//! - [`lexicon::SynonymEntry`] — Termo canônico → formas alternativas (marcas, siglas)
//! - [`KeywordEntry`] — Área temática → palavras-gatilho (classificação de contexto)
//! - [`Lexicon`] — Contêiner das tabelas de sinônimos e palavras-gatilho
//!
//! ## Por que uma lista ordenada?
//!
//! A pontuação por palavras-chave desempata pelo **primeiro tópico visto**.
//! Um `HashMap` perderia essa ordem, então a lista é a fonte de verdade da
//! iteração e o `HashMap` serve apenas para busca exata por chave.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin();
//! let sepse = kb.get("sepse").unwrap();
//! assert!(sepse.answer.contains("qSOFA"));
//! ```

/// Sub-módulo com [`KnowledgeBase`] e [`KnowledgeEntry`].
pub mod knowledge_base;

/// Sub-módulo com [`Lexicon`], [`lexicon::SynonymEntry`] e [`KeywordEntry`].
pub mod lexicon;

pub use knowledge_base::{KnowledgeBase, KnowledgeEntry};
pub use lexicon::{KeywordEntry, Lexicon};
