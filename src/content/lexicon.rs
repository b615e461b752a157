//! # Léxico — Sinônimos e Palavras-Gatilho por Área
//!
//! Duas tabelas auxiliares consumidas pelo resolvedor:
//!
//! | Tabela | Uso |
//! |--------|-----|
//! | [`SYNONYMS`] | Redireciona nomes comerciais, siglas e termos populares para um tópico |
//! | [`KEYWORDS`] | Classifica a área da pergunta quando nada casou (dica no menu) |
//!
//! Assim como em [`super::topics`], a ordem de declaração é a ordem de avaliação.

/// Termo canônico → formas alternativas (marca, sigla, termo popular).
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("coração", &["cardíaco", "cardio", "coração"]),
    ("pulmão", &["pulmonar", "respiratório", "pulmão"]),
    ("rim", &["renal", "rim", "rins"]),
    ("cérebro", &["cerebral", "neurológico", "cérebro"]),
    ("infarto", &["iam", "infarto", "ataque cardíaco"]),
    ("derrame", &["avc", "derrame", "acidente vascular"]),
    ("pressão", &["pa", "pressão arterial", "hipertensão"]),
    ("açúcar", &["glicemia", "diabetes", "açúcar no sangue"]),
    ("dipirona", &["novalgina", "metamizol", "dipirona"]),
    ("paracetamol", &["tylenol", "acetaminofeno", "paracetamol"]),
    ("omeprazol", &["omeprazol", "inibidor bomba", "protetor gástrico"]),
    ("captopril", &["captopril", "ieca", "capoten"]),
    ("losartana", &["losartana", "losartan", "bra"]),
    ("furosemida", &["lasix", "furosemida", "diurético"]),
    ("insulina", &["insulina", "diabetes"]),
    ("heparina", &["heparina", "anticoagulante", "enoxaparina"]),
    ("varfarina", &["marevan", "varfarina", "coumadin"]),
    ("adrenalina", &["epinefrina", "adrenalina"]),
    ("atropina", &["atropina"]),
    ("morfina", &["morfina", "opioide"]),
    ("amiodarona", &["amiodarona", "ancoron"]),
];

/// Área temática: `(identificador, rótulo legível, palavras-gatilho)`.
pub const KEYWORDS: &[(&str, &str, &[&str])] = &[
    (
        "anatomia",
        "Anatomia",
        &["anatomia", "órgão", "órgãos", "sistema", "corpo", "estrutura"],
    ),
    (
        "cardiovascular",
        "Cardiovascular",
        &["coração", "cardíaco", "cardiovascular", "circulação", "sangue", "artéria", "veia"],
    ),
    (
        "respiratorio",
        "Respiratório",
        &["pulmão", "respiração", "respiratório", "oxigênio", "ventilação"],
    ),
    (
        "medicacao",
        "Medicação",
        &["medicamento", "remédio", "droga", "farmaco", "dose", "administração"],
    ),
    (
        "calculo",
        "Cálculo de doses",
        &["calcular", "cálculo", "gotejamento", "dose", "diluição"],
    ),
    (
        "procedimento",
        "Procedimentos",
        &["como fazer", "procedimento", "técnica", "passo a passo"],
    ),
    (
        "emergencia",
        "Emergências",
        &["emergência", "urgência", "grave", "crítico"],
    ),
];
