//! # Classificador de Contexto (Área Temática)
//!
//! Determina a **área** de uma pergunta a partir de palavras-gatilho:
//!
//! | Área | Exemplo de gatilho |
//! |------|--------------------|
//! | Anatomia | "órgão", "sistema", "corpo" |
//! | Cardiovascular | "coração", "artéria", "sangue" |
//! | Respiratório | "pulmão", "ventilação" |
//! | Medicação | "remédio", "dose" |
//! | Cálculo de doses | "gotejamento", "diluição" |
//! | Procedimentos | "como fazer", "técnica" |
//! | Emergências | "urgência", "grave" |
//!
//! A classificação **não escolhe respostas**. Ela só é usada quando nenhuma
//! etapa do resolvedor encontrou um tópico, para orientar o usuário no menu.
//!
//! Mesma estratégia das heurísticas rápidas de intenção: percorre as áreas em
//! ordem e retorna a primeira com algum gatilho presente.

use crate::core::{KeywordEntry, Lexicon};

/// Primeira área (ordem de declaração) com algum gatilho na pergunta.
///
/// A pergunta deve estar normalizada via [`super::normalize`].
pub fn classify_context<'a>(lexicon: &'a Lexicon, normalized_question: &str) -> Option<&'a KeywordEntry> {
    lexicon
        .keywords
        .iter()
        .find(|entry| entry.triggered_by(normalized_question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlu::normalize;

    fn category(question: &str) -> Option<String> {
        let lexicon = Lexicon::builtin();
        classify_context(&lexicon, &normalize(question)).map(|e| e.category.clone())
    }

    #[test]
    fn detects_cardiovascular() {
        assert_eq!(category("dúvida sobre artéria"), Some("cardiovascular".into()));
    }

    #[test]
    fn first_declared_area_wins() {
        // "sistema" (anatomia) vem antes de "coração" (cardiovascular)
        assert_eq!(category("sistema do coração"), Some("anatomia".into()));
    }

    #[test]
    fn dose_belongs_to_medication_before_calculation() {
        assert_eq!(category("qual a dose"), Some("medicacao".into()));
    }

    #[test]
    fn no_trigger_no_context() {
        assert_eq!(category("xyzzy123 nonsense"), None);
        assert_eq!(category(""), None);
    }
}
