//! # KnowledgeBase — Tópicos e Respostas
//!
//! A [`KnowledgeBase`] guarda os tópicos de enfermagem na ordem em que foram
//! declarados, com um índice auxiliar para busca exata por chave.
//!
//! ## Armazenamento
//!
//! - **Entradas**: `Vec<KnowledgeEntry>` — fonte de verdade, ordem de declaração
//! - **Índice**: `HashMap<String, usize>` — chave normalizada → posição no `Vec`
//!
//! ## Invariantes
//!
//! - Chaves são únicas. Reinserir uma chave troca a resposta **sem** mudar a
//!   posição original (o desempate por ordem continua estável).
//! - Chaves e respostas nunca são vazias.
//! - Chaves são armazenadas normalizadas (NFC + minúsculas), as mesmas regras
//!   aplicadas à pergunta em [`crate::nlu::normalize`].

use std::collections::HashMap;

use serde::Serialize;

use crate::content::topics::TOPICS;
use crate::nlu::normalize;

/// Um tópico da base: chave (sequência de palavras) e resposta didática.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    /// Chave normalizada, palavras separadas por espaço (ex: "ciclo cardíaco").
    pub key: String,
    /// Texto da resposta, com `\n` como quebra de linha.
    pub answer: String,
}

impl KnowledgeEntry {
    /// Palavras que compõem a chave, na ordem em que aparecem.
    ///
    /// Palavras vazias (espaços duplicados) são descartadas: uma palavra
    /// vazia casaria com qualquer pergunta.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.key.split(' ').filter(|w| !w.is_empty())
    }

    /// Quantas palavras da chave aparecem como substring da pergunta.
    ///
    /// A pergunta já deve estar normalizada. Não há fronteira de palavra:
    /// "dor" conta dentro de "administrador".
    pub fn match_score(&self, normalized_question: &str) -> usize {
        self.words()
            .filter(|word| normalized_question.contains(word))
            .count()
    }
}

/// Base de conhecimento estática e ordenada.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    /// Entradas na ordem de declaração.
    entries: Vec<KnowledgeEntry>,
    /// Chave normalizada → índice em `entries`.
    index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Cria uma base vazia.
    pub fn new() -> Self {
        Self::default()
    }

    /// Base embutida com todos os tópicos de [`crate::content::topics`].
    pub fn builtin() -> Self {
        Self::from_pairs(TOPICS.iter().copied())
    }

    /// Monta uma base a partir de pares `(chave, resposta)` preservando a ordem.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut kb = Self::new();
        for (key, answer) in pairs {
            if !kb.insert(key, answer) {
                tracing::warn!(key, "Tópico ignorado: chave ou resposta vazia");
            }
        }
        kb
    }

    /// Insere ou atualiza um tópico.
    ///
    /// Retorna `false` (sem alterar a base) quando a chave normalizada não tem
    /// nenhuma palavra ou a resposta é só espaço em branco.
    pub fn insert(&mut self, key: &str, answer: &str) -> bool {
        let key = normalize(key.trim());
        if key.split(' ').all(str::is_empty) || answer.trim().is_empty() {
            return false;
        }

        match self.index.get(&key) {
            Some(&pos) => {
                self.entries[pos].answer = answer.to_string();
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(KnowledgeEntry {
                    key,
                    answer: answer.to_string(),
                });
            }
        }
        true
    }

    /// Busca exata por chave (a chave informada é normalizada antes).
    pub fn get(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.index
            .get(&normalize(key.trim()))
            .map(|&pos| &self.entries[pos])
    }

    /// Entradas na ordem de declaração.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Iterador sobre as chaves, na ordem de declaração.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Número de tópicos.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_topic_in_order() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), TOPICS.len());
        assert_eq!(kb.keys().next(), Some("pressão arterial"));
        assert_eq!(kb.keys().last(), Some("amiodarona"));
    }

    #[test]
    fn get_is_case_insensitive() {
        let kb = KnowledgeBase::builtin();
        let entry = kb.get("Ciclo CARDÍACO").expect("ciclo cardíaco");
        assert_eq!(entry.key, "ciclo cardíaco");
    }

    #[test]
    fn reinsert_keeps_original_position() {
        let mut kb = KnowledgeBase::from_pairs([("alfa", "1"), ("beta", "2")]);
        assert!(kb.insert("alfa", "novo"));
        assert_eq!(kb.keys().collect::<Vec<_>>(), vec!["alfa", "beta"]);
        assert_eq!(kb.get("alfa").map(|e| e.answer.as_str()), Some("novo"));
    }

    #[test]
    fn rejects_empty_key_or_answer() {
        let mut kb = KnowledgeBase::new();
        assert!(!kb.insert("   ", "texto"));
        assert!(!kb.insert("chave", "  \n "));
        assert_eq!(kb.len(), 0);
        assert!(kb.get("chave").is_none());
    }

    #[test]
    fn match_score_counts_substrings_without_word_boundaries() {
        let entry = KnowledgeEntry {
            key: "ciclo cardíaco".into(),
            answer: "x".into(),
        };
        assert_eq!(entry.match_score("explique o ciclo cardíaco"), 2);
        assert_eq!(entry.match_score("motociclo"), 1);
        assert_eq!(entry.match_score(""), 0);
    }

    #[test]
    fn words_skip_double_spaces() {
        let entry = KnowledgeEntry {
            key: "a  b".into(),
            answer: "x".into(),
        };
        assert_eq!(entry.words().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
