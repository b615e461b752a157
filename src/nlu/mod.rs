//! # NLU — Normalização e Heurísticas de Texto
//!
//! Camada de pré-processamento compartilhada por todo o matching. Não há
//! modelo de linguagem aqui: tudo é comparação de substrings sobre texto
//! normalizado.
//!
//! ## Fluxo
//!
//! ```text
//! Pergunta do usuário
//!   ├── 1. NFC normalize (Unicode)
//!   ├── 2. Minúsculas
//!   └── 3. Comparação por substring (sem tokenização)
//! ```
//!
//! A mesma normalização é aplicada às chaves, sinônimos e gatilhos quando as
//! tabelas são montadas, então "é" digitado decomposto (`e` + acento
//! combinante) casa com "é" precomposto da base.
//!
//! ## Sub-módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`context`] | Classifica a área temática da pergunta (cardiovascular, medicação...) |

/// Sub-módulo do classificador de contexto por palavras-gatilho.
pub mod context;

use unicode_normalization::UnicodeNormalization;

pub use context::classify_context;

/// Normaliza texto para comparação: minúsculas + Unicode NFC.
///
/// Não remove espaços nem pontuação. A comparação por substring depende do
/// texto original, inclusive de espaços internos ("dor forte").
pub fn normalize(text: &str) -> String {
    // Normalização Unicode NFC — garante que caracteres acentuados
    // tenham uma única representação antes da comparação
    text.to_lowercase().nfc().collect()
}

/// `true` se alguma das agulhas aparece como substring do texto.
///
/// Agulhas vazias são ignoradas: `"".contains("")` seria sempre verdadeiro.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles
        .iter()
        .map(AsRef::as_ref)
        .any(|needle| !needle.is_empty() && haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("O Que É SEPSE?"), "o que é sepse?");
    }

    #[test]
    fn normalize_recomposes_accents() {
        // "i" + U+0301 (acento agudo combinante)
        let decomposed = "cardi\u{0301}aco";
        let composed = "cardíaco";
        assert_ne!(decomposed, composed);
        assert_eq!(normalize(decomposed), composed);
    }

    #[test]
    fn normalize_keeps_whitespace() {
        assert_eq!(normalize("  dor  forte "), "  dor  forte ");
    }

    #[test]
    fn contains_any_ignores_empty_needles() {
        assert!(!contains_any("qualquer texto", &[""]));
        assert!(contains_any("dor forte", &["", "forte"]));
        assert!(!contains_any("", &["dor"]));
    }
}
