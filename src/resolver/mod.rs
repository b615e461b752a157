//! # Resolvedor de Perguntas — O Chat Offline
//!
//! O [`FaqResolver`] mapeia uma pergunta em texto livre para **uma** resposta
//! pronta, de forma determinística e sem aprendizado de máquina.
//!
//! ## Etapas (a primeira que produz resposta vence)
//!
//! ```text
//! Pergunta
//!   │  normalize (NFC + minúsculas)
//!   │
//!   ├── 1. 📌 REGRAS CONTEXTUAIS (RuleSet, ordem de declaração)
//!   │   └── "diferença entre icc e iam", "qual remédio para febre"...
//!   │
//!   ├── 2. 🔑 PONTUAÇÃO POR PALAVRAS-CHAVE (todos os tópicos)
//!   │   └── score = nº de palavras da chave contidas na pergunta
//!   │       maior score vence; empate → primeiro tópico declarado
//!   │
//!   ├── 3. 🔁 SINÔNIMOS (marcas, siglas, termos populares)
//!   │   └── forma encontrada → primeiro tópico cuja chave cita o termo
//!   │
//!   └── 4. 📚 MENU DE TÓPICOS (sempre responde)
//!       └── prefixado com dica de área quando o contexto é reconhecido
//! ```
//!
//! As regras curadas vêm antes da pontuação: "qual a diferença entre icc e
//! iam" casaria com o tópico "icc" por desempate, mas a comparação escrita à
//! mão é a resposta certa.
//!
//! ## Propriedades
//!
//! - **Total**: sempre retorna texto não vazio; não existe erro de "sem match".
//! - **Puro**: depende só da pergunta e das tabelas estáticas.
//! - **Thread-safe**: `&self` imutável, compartilhável via `Arc`.

/// Sub-módulo com as regras contextuais descritas por dados.
pub mod rules;

use serde::Serialize;

use crate::content::guides::FALLBACK_MENU;
use crate::core::{KnowledgeBase, KnowledgeEntry, Lexicon};
use crate::nlu::{classify_context, normalize};

pub use rules::RuleSet;

/// Etapa que produziu a resposta, com os detalhes do match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum MatchStage {
    /// Regra contextual curada.
    Override { rule: String },
    /// Melhor pontuação por palavras-chave.
    Keyword { key: String, score: usize },
    /// Redirecionamento por sinônimo.
    Synonym { term: String, key: String },
    /// Nada casou; `context` é a área detectada, se houver.
    Fallback { context: Option<String> },
}

impl MatchStage {
    /// Nome curto da etapa, igual à tag serializada.
    pub fn name(&self) -> &'static str {
        match self {
            MatchStage::Override { .. } => "override",
            MatchStage::Keyword { .. } => "keyword",
            MatchStage::Synonym { .. } => "synonym",
            MatchStage::Fallback { .. } => "fallback",
        }
    }
}

/// Resposta final e a etapa que a produziu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub answer: String,
    #[serde(flatten)]
    pub stage: MatchStage,
}

/// Resolvedor de perguntas sobre tabelas estáticas.
#[derive(Clone, Debug)]
pub struct FaqResolver {
    kb: KnowledgeBase,
    lexicon: Lexicon,
    rules: RuleSet,
}

impl FaqResolver {
    pub fn new(kb: KnowledgeBase, lexicon: Lexicon, rules: RuleSet) -> Self {
        Self { kb, lexicon, rules }
    }

    /// Base e léxico embutidos com o conjunto de regras informado.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self::new(KnowledgeBase::builtin(), Lexicon::builtin(), rules)
    }

    /// Resolvedor com todo o conteúdo embutido.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::with_rules(RuleSet::builtin())
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Responde a pergunta. Nunca falha e nunca retorna texto vazio.
    ///
    /// O servidor usa [`resolve_detailed`](Self::resolve_detailed) para
    /// registrar a etapa; este é o contrato para quem só quer o texto.
    #[allow(dead_code)]
    pub fn resolve(&self, question: &str) -> String {
        self.resolve_detailed(question).answer
    }

    /// Como [`resolve`](Self::resolve), mas informando a etapa do match.
    pub fn resolve_detailed(&self, question: &str) -> Resolution {
        let q = normalize(question);

        let resolution = self
            .match_override(&q)
            .or_else(|| self.best_keyword_match(&q))
            .or_else(|| self.synonym_redirect(&q))
            .unwrap_or_else(|| self.fallback(&q));

        tracing::debug!(stage = ?resolution.stage, "Pergunta resolvida");
        resolution
    }

    /// Etapa 1 — regras contextuais.
    fn match_override(&self, q: &str) -> Option<Resolution> {
        let (rule, text) = self.rules.first_match(q, &self.kb)?;
        Some(Resolution {
            answer: text.to_string(),
            stage: MatchStage::Override {
                rule: rule.name.clone(),
            },
        })
    }

    /// Etapa 2 — tópico com mais palavras da chave presentes na pergunta.
    ///
    /// Só troca o melhor candidato com score **estritamente** maior, então o
    /// primeiro tópico declarado vence os empates.
    fn best_keyword_match(&self, q: &str) -> Option<Resolution> {
        let mut best: Option<(&KnowledgeEntry, usize)> = None;

        for entry in self.kb.entries() {
            let score = entry.match_score(q);
            let best_score = best.map_or(0, |(_, s)| s);
            if score > best_score {
                best = Some((entry, score));
            }
        }

        best.map(|(entry, score)| Resolution {
            answer: entry.answer.clone(),
            stage: MatchStage::Keyword {
                key: entry.key.clone(),
                score,
            },
        })
    }

    /// Etapa 3 — sinônimos.
    ///
    /// Para cada termo (ordem de declaração) mencionado na pergunta, procura o
    /// primeiro tópico cuja chave cita o termo ou uma de suas formas. Um termo
    /// sem tópico correspondente não encerra a busca; o próximo é tentado.
    fn synonym_redirect(&self, q: &str) -> Option<Resolution> {
        self.lexicon
            .synonyms
            .iter()
            .filter(|synonym| synonym.mentioned_in(q))
            .find_map(|synonym| {
                self.kb
                    .entries()
                    .iter()
                    .find(|entry| synonym.names_key(&entry.key))
                    .map(|entry| Resolution {
                        answer: entry.answer.clone(),
                        stage: MatchStage::Synonym {
                            term: synonym.term.clone(),
                            key: entry.key.clone(),
                        },
                    })
            })
    }

    /// Etapa 4 — menu de tópicos, com dica de área quando reconhecida.
    fn fallback(&self, q: &str) -> Resolution {
        match classify_context(&self.lexicon, q) {
            Some(area) => Resolution {
                answer: format!(
                    "🔎 Parece que sua pergunta é sobre {}, mas não encontrei um tópico exato. \
                     Tente reformular usando um dos temas abaixo.\n\n{}",
                    area.label, FALLBACK_MENU
                ),
                stage: MatchStage::Fallback {
                    context: Some(area.category.clone()),
                },
            },
            None => Resolution {
                answer: FALLBACK_MENU.to_string(),
                stage: MatchStage::Fallback { context: None },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;
    use crate::content::guides::{HEPARIN_VS_WARFARIN, ICC_VS_IAM, MENU_HEADER, MEDS_FEVER};

    /// Resolvedor embutido, criado uma única vez para todos os testes.
    fn builtin() -> &'static FaqResolver {
        static BUILTIN: OnceLock<FaqResolver> = OnceLock::new();
        BUILTIN.get_or_init(FaqResolver::builtin)
    }

    fn resolve(question: &str) -> String {
        builtin().resolve(question)
    }

    fn answer_of(key: &str) -> String {
        builtin()
            .knowledge_base()
            .get(key)
            .map(|e| e.answer.clone())
            .expect("tópico existente")
    }

    fn stage(question: &str) -> MatchStage {
        builtin().resolve_detailed(question).stage
    }

    #[test]
    fn sepsis_question_returns_sepsis_entry() {
        let answer = resolve("o que é sepse");
        assert!(answer.contains("qSOFA"));
        assert_eq!(answer, answer_of("sepse"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve("O QUE É SEPSE?"), answer_of("sepse"));
    }

    #[test]
    fn brand_name_redirects_to_generic_topic() {
        assert_eq!(resolve("novalgina"), answer_of("dipirona"));
        assert_eq!(
            stage("novalgina"),
            MatchStage::Synonym {
                term: "dipirona".into(),
                key: "dipirona".into()
            }
        );
        assert_eq!(resolve("tylenol"), answer_of("paracetamol"));
        assert_eq!(resolve("marevan"), answer_of("varfarina"));
    }

    #[test]
    fn synonym_term_can_point_to_a_longer_key() {
        // "coração" não é tópico, mas "cardíaco" aparece em "ciclo cardíaco"
        assert_eq!(resolve("me fale do coração"), answer_of("ciclo cardíaco"));
    }

    #[test]
    fn nonsense_returns_fallback_menu() {
        let answer = resolve("xyzzy123 nonsense");
        assert!(answer.contains(MENU_HEADER));
        assert_eq!(answer, FALLBACK_MENU);
        assert_eq!(stage("xyzzy123 nonsense"), MatchStage::Fallback { context: None });
    }

    #[test]
    fn empty_and_blank_inputs_fall_back() {
        assert_eq!(resolve(""), FALLBACK_MENU);
        assert_eq!(resolve("   \n\t"), FALLBACK_MENU);
    }

    #[test]
    fn two_word_key_beats_one_word_key() {
        assert_eq!(
            stage("explique o ciclo cardíaco"),
            MatchStage::Keyword {
                key: "ciclo cardíaco".into(),
                score: 2
            }
        );
        assert_eq!(
            stage("sinais vitais do idoso"),
            MatchStage::Keyword {
                key: "sinais vitais".into(),
                score: 2
            }
        );
    }

    #[test]
    fn tie_goes_to_first_declared_key() {
        // "icc" e "iam" pontuam 1; "icc" foi declarado antes
        assert_eq!(resolve("icc ou iam"), answer_of("icc"));
        assert_eq!(resolve("iam ou icc"), answer_of("icc"));
    }

    #[test]
    fn tie_break_with_custom_knowledge_base() {
        let kb = KnowledgeBase::from_pairs([
            ("alfa", "A"),
            ("beta", "B"),
            ("beta gama", "BG"),
        ]);
        let resolver = FaqResolver::new(kb, Lexicon::default(), RuleSet::default());
        assert_eq!(resolver.resolve("beta e alfa"), "A");
        assert_eq!(resolver.resolve("gama beta alfa"), "BG");
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        // "pa" (forma de "pressão") aparece dentro de "papagaio"
        assert_eq!(resolve("papagaio"), answer_of("pressão arterial"));
    }

    #[test]
    fn comparison_override_wins_over_keywords() {
        assert_eq!(resolve("qual a diferença entre icc e iam"), ICC_VS_IAM);
        assert_eq!(
            resolve("qual a diferença entre heparina e varfarina?"),
            HEPARIN_VS_WARFARIN
        );
    }

    #[test]
    fn medicine_override_and_calculation_entry() {
        assert_eq!(resolve("que remédio para febre"), MEDS_FEVER);
        assert_eq!(resolve("como calcular gotejamento"), answer_of("calculo medicação"));
    }

    #[test]
    fn fallback_names_detected_area() {
        let resolution = builtin().resolve_detailed("o sistema do corpo");
        assert!(resolution.answer.contains("Anatomia"));
        assert!(resolution.answer.contains(MENU_HEADER));
        assert_eq!(
            resolution.stage,
            MatchStage::Fallback {
                context: Some("anatomia".into())
            }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        for q in ["o que é sepse", "novalgina", "xyzzy", "", "como funciona a insulina"] {
            assert_eq!(resolve(q), resolve(q));
            assert_eq!(builtin().resolve_detailed(q), FaqResolver::builtin().resolve_detailed(q));
        }
    }

    #[test]
    fn every_answer_is_non_empty() {
        let questions = [
            "o que é sepse",
            "novalgina",
            "qual a diferença entre icc e iam",
            "como funciona a dipirona",
            "zzz",
            "",
            "🙂",
        ];
        for q in questions {
            assert!(!resolve(q).trim().is_empty(), "resposta vazia para {q:?}");
        }
    }

    #[test]
    fn empty_resolver_still_answers() {
        let resolver = FaqResolver::new(KnowledgeBase::new(), Lexicon::default(), RuleSet::default());
        assert_eq!(resolver.resolve("o que é sepse"), FALLBACK_MENU);
    }

    #[test]
    fn resolution_serializes_with_stage_tag() {
        let json = serde_json::to_value(builtin().resolve_detailed("o que é sepse")).unwrap();
        assert_eq!(json["stage"], "keyword");
        assert_eq!(json["key"], "sepse");
        assert_eq!(json["score"], 1);
        assert!(json["answer"].as_str().unwrap().contains("qSOFA"));
    }

    #[test]
    fn with_rules_keeps_builtin_content() {
        let resolver = FaqResolver::with_rules(RuleSet::default());
        assert_eq!(resolver.rules().len(), 0);
        assert_eq!(resolver.knowledge_base().len(), builtin().knowledge_base().len());
        assert_eq!(
            resolver.resolve("qual a diferença entre icc e iam"),
            answer_of("icc")
        );
    }
}
