//! # Formulário Farmacológico — Monografias Detalhadas
//!
//! Consulta de fichas completas de medicamentos, separada do chat: o
//! [`Formulary`] responde "me mostre a ficha do captopril" com a monografia
//! inteira (apresentação, posologia, efeitos adversos, contraindicações e
//! cuidados de enfermagem).
//!
//! ## Busca (primeiro match vence)
//!
//! ```text
//! Pergunta normalizada
//!   ├── 1. Nome genérico contido na pergunta → monografia
//!   ├── 2. Nome comercial contido na pergunta → "💊 MARCA = GENÉRICO" + monografia
//!   └── 3. Nada → None
//! ```
//!
//! Nomes comerciais cujo genérico não tem monografia são ignorados.

use serde::Serialize;

use crate::content::formulary::{BRAND_NAMES, MONOGRAPHS};
use crate::nlu::normalize;

/// Resultado de uma consulta ao formulário.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrugLookup {
    /// Nome genérico encontrado.
    pub generic: String,
    /// Nome comercial usado na pergunta, quando a busca foi por marca.
    pub brand: Option<String>,
    /// Texto da monografia (com cabeçalho de marca, se houver).
    pub text: String,
}

/// Tabelas de monografias e nomes comerciais, na ordem de busca.
#[derive(Clone, Debug, Default)]
pub struct Formulary {
    monographs: Vec<(String, String)>,
    brands: Vec<(String, String)>,
}

impl Formulary {
    /// Formulário embutido de [`crate::content::formulary`].
    pub fn builtin() -> Self {
        Self {
            monographs: MONOGRAPHS
                .iter()
                .map(|(generic, text)| (normalize(generic), text.to_string()))
                .collect(),
            brands: BRAND_NAMES
                .iter()
                .map(|(brand, generic)| (normalize(brand), normalize(generic)))
                .collect(),
        }
    }

    /// Nomes genéricos disponíveis.
    pub fn generics(&self) -> impl Iterator<Item = &str> {
        self.monographs.iter().map(|(generic, _)| generic.as_str())
    }

    fn monograph(&self, generic: &str) -> Option<&str> {
        self.monographs
            .iter()
            .find(|(name, _)| name == generic)
            .map(|(_, text)| text.as_str())
    }

    /// Procura a monografia citada na pergunta.
    pub fn lookup(&self, question: &str) -> Option<DrugLookup> {
        let q = normalize(question);
        if q.trim().is_empty() {
            return None;
        }

        if let Some((generic, text)) = self
            .monographs
            .iter()
            .find(|(generic, _)| q.contains(generic.as_str()))
        {
            return Some(DrugLookup {
                generic: generic.clone(),
                brand: None,
                text: text.clone(),
            });
        }

        self.brands
            .iter()
            .filter(|(brand, _)| q.contains(brand.as_str()))
            .find_map(|(brand, generic)| {
                let monograph = self.monograph(generic)?;
                Some(DrugLookup {
                    generic: generic.clone(),
                    brand: Some(brand.clone()),
                    text: format!(
                        "💊 {} = {}\n\n{}",
                        brand.to_uppercase(),
                        generic.to_uppercase(),
                        monograph
                    ),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_name_returns_monograph() {
        let formulary = Formulary::builtin();
        let found = formulary.lookup("qual a dose de Captopril?").expect("captopril");
        assert_eq!(found.generic, "captopril");
        assert_eq!(found.brand, None);
        assert!(found.text.starts_with("CAPTOPRIL"));
    }

    #[test]
    fn brand_name_gets_header() {
        let formulary = Formulary::builtin();
        let found = formulary.lookup("ficha do amoxil").expect("amoxil");
        assert_eq!(found.generic, "amoxicilina");
        assert_eq!(found.brand.as_deref(), Some("amoxil"));
        assert!(found.text.starts_with("💊 AMOXIL = AMOXICILINA\n\n"));
        assert!(found.text.ends_with(formulary.monograph("amoxicilina").unwrap()));
    }

    #[test]
    fn generic_wins_over_brand() {
        let formulary = Formulary::builtin();
        let found = formulary.lookup("lasix ou furosemida").expect("furosemida");
        assert_eq!(found.brand, None);
    }

    #[test]
    fn unknown_or_empty_question_finds_nothing() {
        let formulary = Formulary::builtin();
        assert_eq!(formulary.lookup("xyzzy"), None);
        assert_eq!(formulary.lookup("   "), None);
    }

    #[test]
    fn every_brand_points_to_a_monograph() {
        let formulary = Formulary::builtin();
        for (brand, generic) in &formulary.brands {
            assert!(
                formulary.monograph(generic).is_some(),
                "{brand} → {generic} sem monografia"
            );
        }
    }
}
