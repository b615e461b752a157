//! # Lexicon — Sinônimos e Áreas Temáticas
//!
//! Tabelas auxiliares que **não** escolhem respostas diretamente:
//!
//! | Tipo | Papel | Exemplo |
//! |------|-------|---------|
//! | [`SynonymEntry`] | Redireciona a pergunta para um tópico | "novalgina" → "dipirona" |
//! | [`KeywordEntry`] | Classifica a área da pergunta | "artéria" → cardiovascular |
//!
//! Ambas são listas ordenadas: a primeira entrada que casa vence.

use serde::Serialize;

use crate::content::lexicon::{KEYWORDS, SYNONYMS};
use crate::nlu::{contains_any, normalize};

/// Termo canônico e suas formas de superfície (marca, sigla, termo popular).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SynonymEntry {
    /// Rótulo canônico (ex: "dipirona").
    pub term: String,
    /// Formas alternativas, normalizadas.
    pub forms: Vec<String>,
}

impl SynonymEntry {
    pub fn new(term: &str, forms: &[&str]) -> Self {
        Self {
            term: normalize(term),
            forms: forms.iter().map(|f| normalize(f)).collect(),
        }
    }

    /// A pergunta (normalizada) contém alguma das formas alternativas?
    pub fn mentioned_in(&self, normalized_question: &str) -> bool {
        contains_any(normalized_question, &self.forms)
    }

    /// A chave de um tópico contém o termo canônico ou alguma forma?
    pub fn names_key(&self, key: &str) -> bool {
        key.contains(self.term.as_str()) || contains_any(key, &self.forms)
    }
}

/// Área temática usada apenas para classificar o contexto da pergunta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    /// Identificador estável (ex: "cardiovascular").
    pub category: String,
    /// Rótulo legível em PT-BR (ex: "Cardiovascular").
    pub label: String,
    /// Palavras-gatilho, normalizadas.
    pub triggers: Vec<String>,
}

impl KeywordEntry {
    pub fn new(category: &str, label: &str, triggers: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            label: label.to_string(),
            triggers: triggers.iter().map(|t| normalize(t)).collect(),
        }
    }

    pub fn triggered_by(&self, normalized_question: &str) -> bool {
        contains_any(normalized_question, &self.triggers)
    }
}

/// Contêiner das tabelas de sinônimos e áreas temáticas.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    pub synonyms: Vec<SynonymEntry>,
    pub keywords: Vec<KeywordEntry>,
}

impl Lexicon {
    /// Léxico embutido de [`crate::content::lexicon`].
    pub fn builtin() -> Self {
        Self {
            synonyms: SYNONYMS
                .iter()
                .map(|(term, forms)| SynonymEntry::new(term, forms))
                .collect(),
            keywords: KEYWORDS
                .iter()
                .map(|(category, label, triggers)| KeywordEntry::new(category, label, triggers))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_matches_surface_form() {
        let entry = SynonymEntry::new("dipirona", &["novalgina", "metamizol"]);
        assert!(entry.mentioned_in("tomei novalgina"));
        assert!(!entry.mentioned_in("tomei paracetamol"));
    }

    #[test]
    fn synonym_names_key_by_term_or_form() {
        let entry = SynonymEntry::new("coração", &["cardíaco", "cardio"]);
        assert!(entry.names_key("ciclo cardíaco"));
        assert!(!entry.names_key("sepse"));
    }

    #[test]
    fn forms_are_normalized() {
        let entry = SynonymEntry::new("Varfarina", &["MAREVAN"]);
        assert_eq!(entry.term, "varfarina");
        assert_eq!(entry.forms, vec!["marevan".to_string()]);
    }

    #[test]
    fn builtin_tables_keep_declaration_order() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.synonyms.len(), SYNONYMS.len());
        assert_eq!(lexicon.synonyms[0].term, "coração");
        assert_eq!(lexicon.keywords[0].category, "anatomia");
        assert_eq!(lexicon.keywords.len(), KEYWORDS.len());
    }
}
