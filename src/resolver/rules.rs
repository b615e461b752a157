//! # Regras Contextuais — Overrides Curados
//!
//! Frases comuns recebem respostas escritas à mão, que vencem a pontuação
//! por palavras-chave. Cada regra é **dado**, não código:
//!
//! ```text
//! PatternRule
//!   ├── name      → identificador estável ("remedio-febre")
//!   ├── require   → grupos "qualquer-um-de"; TODOS os grupos devem casar
//!   ├── exclude   → frases proibidas; NENHUMA pode aparecer
//!   └── response  → texto curado OU referência a um tópico da base
//! ```
//!
//! ## Exemplo
//!
//! ```text
//! require: [["diferença", "diferenca"], ["icc"], ["iam"]]
//! "qual a diferença entre icc e iam"  → casa (3 grupos presentes)
//! "qual a diferença entre icc e avc"  → não casa (falta "iam")
//! ```
//!
//! ## Ordem
//!
//! O [`RuleSet`] é avaliado em ordem de declaração e a primeira regra que
//! casa vence. Regras extras (carregadas de TOML) entram **depois** das
//! embutidas.

use serde::Deserialize;

use crate::content::guides;
use crate::core::KnowledgeBase;
use crate::nlu::{contains_any, normalize};

/// Marcadores de comparação ("qual a diferença entre...").
const DIFFERENCE: &[&str] = &["diferença", "diferenca"];

/// Marcadores de "qual remédio para...".
const MEDICINE_FOR: &[&str] = &[
    "que remedio",
    "que remédio",
    "qual medicamento",
    "qual remedio",
    "qual remédio",
    "que medicamento",
];

/// Marcadores de "como funciona...".
const HOW_IT_WORKS: &[&str] = &["como funciona", "mecanismo", "como age", "modo de ação"];

/// Resposta de uma regra: texto literal ou referência a um tópico.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleResponse {
    /// Texto curado devolvido como está.
    Text(String),
    /// Chave de um tópico da [`KnowledgeBase`].
    Entry(String),
}

impl RuleResponse {
    /// Texto final da resposta.
    ///
    /// `None` quando a regra aponta para um tópico inexistente. Nesse caso a
    /// regra é tratada como se não tivesse casado.
    pub fn text<'a>(&'a self, kb: &'a KnowledgeBase) -> Option<&'a str> {
        match self {
            RuleResponse::Text(text) => Some(text.as_str()),
            RuleResponse::Entry(key) => kb.get(key).map(|e| e.answer.as_str()),
        }
    }
}

/// Regra contextual descrita por dados.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PatternRule {
    pub name: String,
    /// Conjunção de grupos; cada grupo é uma disjunção de frases.
    #[serde(default)]
    pub require: Vec<Vec<String>>,
    /// Frases que impedem a regra de casar.
    #[serde(default)]
    pub exclude: Vec<String>,
    pub response: RuleResponse,
}

impl PatternRule {
    /// Cria uma regra sem condições. Use [`require`](Self::require) e
    /// [`exclude`](Self::exclude) para descrevê-la.
    pub fn new(name: &str, response: RuleResponse) -> Self {
        Self {
            name: name.to_string(),
            require: Vec::new(),
            exclude: Vec::new(),
            response,
        }
    }

    /// Adiciona um grupo "qualquer-um-de".
    pub fn require(mut self, any_of: &[&str]) -> Self {
        self.require.push(any_of.iter().map(|p| normalize(p)).collect());
        self
    }

    /// Adiciona frases proibidas.
    pub fn exclude(mut self, phrases: &[&str]) -> Self {
        self.exclude.extend(phrases.iter().map(|p| normalize(p)));
        self
    }

    /// A regra casa com a pergunta normalizada?
    ///
    /// Uma regra sem nenhum grupo obrigatório nunca casa, senão venceria
    /// qualquer pergunta.
    pub fn matches(&self, normalized_question: &str) -> bool {
        !self.require.is_empty()
            && self
                .require
                .iter()
                .all(|group| contains_any(normalized_question, group))
            && !contains_any(normalized_question, &self.exclude)
    }

    fn normalized(mut self) -> Self {
        for group in &mut self.require {
            for phrase in group.iter_mut() {
                *phrase = normalize(phrase);
            }
        }
        for phrase in &mut self.exclude {
            *phrase = normalize(phrase);
        }
        self
    }
}

/// Formato do arquivo TOML de regras extras.
///
/// ```toml
/// [[rule]]
/// name = "diferenca-avc"
/// require = [["diferença"], ["isquêmico"], ["hemorrágico"]]
/// response = { entry = "avc" }
/// ```
#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default, rename = "rule")]
    rules: Vec<PatternRule>,
}

/// Lista ordenada de regras contextuais.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Regras embutidas: comparações, cálculo, "qual remédio para..." e
    /// "como funciona...".
    pub fn builtin() -> Self {
        use RuleResponse::{Entry, Text};
        let text = |s: &str| Text(s.to_string());

        let rules = vec![
            // ─── Comparações ────────────────────────────────────
            PatternRule::new("diferenca-icc-iam", text(guides::ICC_VS_IAM))
                .require(DIFFERENCE)
                .require(&["icc"])
                .require(&["iam"]),
            PatternRule::new("diferenca-heparina-varfarina", text(guides::HEPARIN_VS_WARFARIN))
                .require(DIFFERENCE)
                .require(&["heparina"])
                .require(&["varfarina", "marevan"]),
            // ─── Cálculo de medicação ───────────────────────────
            PatternRule::new("calculo-medicacao", Entry("calculo medicação".to_string()))
                .require(&["como calcular", "calculo", "cálculo"]),
            // ─── Qual remédio para... ───────────────────────────
            PatternRule::new("remedio-dor-leve", text(guides::MEDS_MILD_PAIN))
                .require(MEDICINE_FOR)
                .require(&["dor"])
                .exclude(&["forte", "intensa"]),
            PatternRule::new("remedio-dor-forte", text(guides::MEDS_SEVERE_PAIN))
                .require(MEDICINE_FOR)
                .require(&["dor forte", "dor intensa"]),
            PatternRule::new("remedio-hipertensao", text(guides::MEDS_HYPERTENSION))
                .require(MEDICINE_FOR)
                .require(&["pressão alta", "hipertensão", "hipertensao"]),
            PatternRule::new("remedio-febre", text(guides::MEDS_FEVER))
                .require(MEDICINE_FOR)
                .require(&["febre"]),
            PatternRule::new("remedio-diabetes", text(guides::MEDS_DIABETES))
                .require(MEDICINE_FOR)
                .require(&["diabetes", "açúcar alto", "glicemia alta"]),
            PatternRule::new("remedio-refluxo", text(guides::MEDS_REFLUX))
                .require(MEDICINE_FOR)
                .require(&["refluxo", "azia", "gastrite"]),
            // ─── Como funciona... ───────────────────────────────
            PatternRule::new("mecanismo-analgesicos", text(guides::HOW_ANALGESICS_WORK))
                .require(HOW_IT_WORKS)
                .require(&["dipirona", "paracetamol", "analgésico", "analgesico"]),
            PatternRule::new("mecanismo-insulina", text(guides::HOW_INSULIN_WORKS))
                .require(HOW_IT_WORKS)
                .require(&["insulina"]),
        ];

        Self { rules }
    }

    /// Lê regras de um documento TOML (tabelas `[[rule]]`).
    ///
    /// As frases são normalizadas na leitura, como nas regras embutidas.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        let file: RuleFile = toml::from_str(source)?;
        Ok(Self {
            rules: file.rules.into_iter().map(PatternRule::normalized).collect(),
        })
    }

    /// Acrescenta regras ao final (menor prioridade).
    pub fn extend(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    /// Primeira regra que casa **e** tem resposta disponível.
    pub fn first_match<'a>(
        &'a self,
        normalized_question: &str,
        kb: &'a KnowledgeBase,
    ) -> Option<(&'a PatternRule, &'a str)> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(normalized_question))
            .find_map(|rule| rule.response.text(kb).map(|text| (rule, text)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(question: &str) -> Option<String> {
        let kb = KnowledgeBase::builtin();
        let rules = RuleSet::builtin();
        rules
            .first_match(&normalize(question), &kb)
            .map(|(rule, _)| rule.name.clone())
    }

    #[test]
    fn comparison_requires_both_conditions() {
        assert_eq!(
            matched("Qual a diferença entre ICC e IAM?").as_deref(),
            Some("diferenca-icc-iam")
        );
        assert_eq!(matched("diferença entre icc e avc"), None);
    }

    #[test]
    fn comparison_accepts_unaccented_marker() {
        assert_eq!(
            matched("diferenca heparina varfarina").as_deref(),
            Some("diferenca-heparina-varfarina")
        );
    }

    #[test]
    fn mild_pain_excludes_strong_pain() {
        assert_eq!(
            matched("qual remédio para dor de cabeça").as_deref(),
            Some("remedio-dor-leve")
        );
        assert_eq!(
            matched("qual remédio para dor forte").as_deref(),
            Some("remedio-dor-forte")
        );
        assert_eq!(
            matched("qual remédio para dor intensa").as_deref(),
            Some("remedio-dor-forte")
        );
    }

    #[test]
    fn medicine_guides_need_the_medicine_marker() {
        assert_eq!(
            matched("que remédio para febre").as_deref(),
            Some("remedio-febre")
        );
        assert_eq!(matched("estou com febre"), None);
    }

    #[test]
    fn calculation_points_to_knowledge_entry() {
        let kb = KnowledgeBase::builtin();
        let rules = RuleSet::builtin();
        let (rule, text) = rules
            .first_match(&normalize("como calcular gotejamento"), &kb)
            .expect("regra de cálculo");
        assert_eq!(rule.name, "calculo-medicacao");
        assert_eq!(Some(text), kb.get("calculo medicação").map(|e| e.answer.as_str()));
    }

    #[test]
    fn entry_rule_without_topic_does_not_fire() {
        let kb = KnowledgeBase::new();
        let rules = RuleSet::builtin();
        assert!(rules.first_match("como calcular", &kb).is_none());
    }

    #[test]
    fn rule_without_requirements_never_matches() {
        let rule = PatternRule::new("vazia", RuleResponse::Text("x".into()));
        assert!(!rule.matches("qualquer coisa"));
    }

    #[test]
    fn loads_extra_rules_from_toml() {
        let source = r#"
            [[rule]]
            name = "diferenca-avc"
            require = [["Diferença"], ["isquêmico"], ["hemorrágico"]]
            response = { entry = "avc" }

            [[rule]]
            name = "saudacao"
            require = [["bom dia", "boa tarde"]]
            exclude = ["tchau"]
            response = { text = "Olá!" }
        "#;
        let rules = RuleSet::from_toml_str(source).expect("toml válido");
        assert_eq!(rules.len(), 2);

        let first = rules.iter().next().expect("primeira regra");
        assert_eq!(first.require[0], vec!["diferença".to_string()]);
        assert!(first.matches("diferença entre avc isquêmico e hemorrágico"));

        let kb = KnowledgeBase::builtin();
        let (rule, text) = rules.first_match("bom dia", &kb).expect("saudação");
        assert_eq!(rule.name, "saudacao");
        assert_eq!(text, "Olá!");
        assert!(rules.first_match("bom dia e tchau", &kb).is_none());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(RuleSet::from_toml_str("[[rule]]\nname = 3").is_err());
    }
}
