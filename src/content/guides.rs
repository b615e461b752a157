//! # Guias — Respostas Curadas das Regras Contextuais
//!
//! Textos escritos à mão para frases comuns ("diferença entre…",
//! "qual remédio para…", "como funciona…"), mais o menu de tópicos.
//! São referenciados pelas regras em [`crate::resolver::rules`].

/// Marcador literal do cabeçalho do menu de tópicos.
pub const MENU_HEADER: &str = "📚 TÓPICOS DISPONÍVEIS";

/// Comparação ICC × IAM.
pub const ICC_VS_IAM: &str = r#"🔍 DIFERENÇA ENTRE ICC E IAM:

📌 ICC (Insuficiência Cardíaca):
• Condição CRÔNICA
• Coração fraco, não bombeia bem
• Sintomas: cansaço, falta de ar, edema
• Evolução gradual

📌 IAM (Infarto):
• Evento AGUDO
• Obstrução coronária, morte tecido
• Sintomas: dor intensa súbita
• Emergência médica!

💡 IAM pode CAUSAR ICC se não tratado!"#;

/// Comparação heparina × varfarina.
pub const HEPARIN_VS_WARFARIN: &str = r#"🔍 DIFERENÇA ENTRE HEPARINA E VARFARINA:

📌 HEPARINA:
• Via: EV ou SC
• Início: IMEDIATO
• Uso: AGUDO (hospitalar)
• Monitorar: TTPa
• Reversão: Protamina

📌 VARFARINA:
• Via: VO (oral)
• Início: 2-3 dias
• Uso: CRÔNICO (casa)
• Monitorar: INR
• Reversão: Vitamina K

💡 Geralmente inicia com heparina e depois troca para varfarina!"#;

/// Guia de medicamentos para dor leve/moderada.
pub const MEDS_MILD_PAIN: &str = r#"💊 MEDICAMENTOS PARA DOR LEVE/MODERADA:

1. DIPIRONA (Novalgina):
• Dose: 500-1000mg 6/6h
• Boa para dor e febre
• Cuidado: hipotensão se EV rápido

2. PARACETAMOL (Tylenol):
• Dose: 500-1000mg 6/6h
• Seguro, poucos efeitos
• Cuidado: hepatotoxicidade em overdose

3. IBUPROFENO:
• Dose: 400-600mg 8/8h
• Anti-inflamatório
• Cuidado: gastrite, renal

⚠️ SEMPRE prescrição médica!
⚠️ Respeitar dose máxima!
⚠️ Avaliar contraindicações!"#;

/// Guia de medicamentos para dor forte.
pub const MEDS_SEVERE_PAIN: &str = r#"💊 MEDICAMENTOS PARA DOR FORTE:

1. TRAMADOL:
• Opioide fraco
• Dose: 50-100mg 6/6h
• Receita B (controle)

2. MORFINA:
• Opioide forte
• Dose: 5-10mg SC/EV
• Receita A (controle especial)
• Monitorar respiração

3. CODEÍNA:
• Opioide fraco
• Dose: 30-60mg 4/6h
• Receita B

⚠️ OPIOIDES:
• Risco dependência
• Depressão respiratória
• Constipação
• Naloxona como antídoto
• SEMPRE prescrição médica!"#;

/// Guia de medicamentos para hipertensão.
pub const MEDS_HYPERTENSION: &str = r#"💊 MEDICAMENTOS PARA HIPERTENSÃO:

1. CAPTOPRIL (IECA):
• Dose: 25-50mg 2-3x/dia
• Efeito: tosse seca comum
• Protege rim e coração

2. LOSARTANA (BRA):
• Dose: 50-100mg 1x/dia
• Não causa tosse
• Alternativa ao IECA

3. ANLODIPINO (Bloqueador canal Ca):
• Dose: 5-10mg 1x/dia
• Efeito: edema tornozelo

4. HIDROCLOROTIAZIDA (Diurético):
• Dose: 25mg 1x/dia
• Tomar pela manhã
• Monitorar K+

⚠️ Tratamento CRÔNICO!
⚠️ Não suspender sem orientação!
⚠️ Monitorar PA regularmente!"#;

/// Guia de medicamentos para febre.
pub const MEDS_FEVER: &str = r#"💊 MEDICAMENTOS PARA FEBRE:

1. PARACETAMOL:
• Dose: 500-1000mg 6/6h
• 1ª escolha
• Seguro

2. DIPIRONA:
• Dose: 500-1000mg 6/6h
• Ação rápida
• Cuidado EV

3. IBUPROFENO:
• Dose: 400-600mg 8/8h
• Anti-inflamatório também

💡 MEDIDAS NÃO-FARMACOLÓGICAS:
• Banho morno
• Hidratação
• Roupas leves
• Repouso

⚠️ Febre >39°C ou persistente: procurar médico!"#;

/// Guia de medicamentos para diabetes.
pub const MEDS_DIABETES: &str = r#"💊 MEDICAMENTOS PARA DIABETES:

1. METFORMINA (1ª linha):
• Dose: 500-2550mg/dia
• Tomar com refeições
• Efeito: diarreia inicial

2. GLIBENCLAMIDA (Sulfoniluréia):
• Dose: 2,5-20mg/dia
• Risco hipoglicemia
• Tomar antes café

3. INSULINA:
• Vários tipos (rápida, NPH, lenta)
• Via SC
• Dose individualizada

💡 CONTROLE:
• Dieta
• Exercício
• Monitorar glicemia
• HbA1c <7%

⚠️ Hipoglicemia: 15g carboidrato!
⚠️ Tratamento individualizado!"#;

/// Guia de medicamentos para refluxo/gastrite.
pub const MEDS_REFLUX: &str = r#"💊 MEDICAMENTOS PARA REFLUXO/GASTRITE:

1. OMEPRAZOL (IBP):
• Dose: 20-40mg 1x/dia
• Tomar em jejum
• Tratamento: 4-8 semanas

2. RANITIDINA (Bloqueador H2):
• Dose: 150mg 2x/dia
• Menos potente que IBP

3. ANTIÁCIDOS:
• Hidróxido alumínio/magnésio
• Alívio rápido
• Uso sintomático

💡 MEDIDAS:
• Elevar cabeceira
• Evitar: café, álcool, frituras
• Não deitar após comer
• Perder peso

⚠️ Sintomas persistentes: endoscopia!"#;

/// Mecanismo de ação dos analgésicos.
pub const HOW_ANALGESICS_WORK: &str = r#"🔬 COMO FUNCIONAM OS ANALGÉSICOS:

📌 DIPIRONA:
• Inibe COX (ciclooxigenase)
• ↓Prostaglandinas (dor e febre)
• Ação central e periférica
• Relaxamento muscular

📌 PARACETAMOL:
• Inibe COX no SNC
• ↓Prostaglandinas centrais
• Analgésico + antipirético
• NÃO é anti-inflamatório

📌 AINES (Ibuprofeno):
• Inibe COX-1 e COX-2
• ↓Prostaglandinas
• Analgésico + antipirético + anti-inflamatório

📌 OPIOIDES (Morfina):
• Liga receptores opioides (μ, κ, δ)
• Bloqueia transmissão dor
• Ação no SNC
• Dor moderada a severa"#;

/// Mecanismo de ação da insulina.
pub const HOW_INSULIN_WORKS: &str = r#"🔬 COMO FUNCIONA A INSULINA:

📌 MECANISMO:
• Hormônio produzido pelo pâncreas
• Liga receptor na célula
• Ativa transportador GLUT-4
• Glicose entra na célula
• ↓Glicemia sanguínea

📌 EFEITOS:
• ↑Captação glicose (músculo, gordura)
• ↓Produção glicose (fígado)
• ↑Síntese glicogênio
• ↑Síntese proteínas
• ↑Síntese gorduras

📌 DIABETES:
• Tipo 1: não produz insulina
• Tipo 2: resistência à insulina
• Tratamento: insulina exógena"#;

/// Menu de tópicos devolvido quando nenhuma etapa encontra resposta.
///
/// O cabeçalho [`MENU_HEADER`] aparece sempre neste texto.
pub const FALLBACK_MENU: &str = r#"💙 Posso ajudar com diversos temas de enfermagem! Aqui estão alguns exemplos:

📚 TÓPICOS DISPONÍVEIS:

🫀 Cardiovascular:
• Ciclo cardíaco
• ICC (Insuficiência Cardíaca)
• IAM (Infarto)
• Pressão arterial
• Sinais vitais

🫁 Respiratório:
• Pneumonia
• DPOC
• Oxigenoterapia

🧠 Neurológico:
• AVC (Derrame)
• Avaliação dor

💊 Medicação:
• Administração
• Cálculos (gotejamento, doses)

🚨 Emergências:
• RCP
• Sepse
• Choque
• Queimaduras

🩺 Procedimentos:
• Curativos
• Sondagem (vesical, nasogástrica)
• Vacinação
• Glicemia capilar
• ECG
• Hemodiálise

👶 Materno-Infantil:
• Parto
• Aleitamento materno
• Pediatria

👴 Geriatria:
• Cuidados ao idoso
• Prevenção quedas

🦠 Outros:
• Diabetes
• Precauções (EPI)
• Lavagem das mãos
• Feridas

💬 Faça sua pergunta! Exemplo:
"O que é sepse?"
"Como fazer RCP?"
"Explique o ciclo cardíaco"
"Como calcular gotejamento?""#;
