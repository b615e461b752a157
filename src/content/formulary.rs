//! # Formulário — Monografias Farmacológicas
//!
//! Fichas completas de medicamentos (classe, apresentação, posologia, efeitos
//! adversos, contraindicações e cuidados de enfermagem), mais a tabela de nomes
//! comerciais usada por [`crate::pharmacology::Formulary`].

/// Nome genérico → monografia, na ordem de busca.
pub const MONOGRAPHS: &[(&str, &str)] = &[
    (
        "dipirona",
        r#"DIPIRONA (Metamizol)

📋 CLASSE: Analgésico e antipirético

💊 APRESENTAÇÃO:
• Comprimido: 500mg, 1g
• Solução oral: 500mg/ml (gotas)
• Ampola: 500mg/ml (2ml)

⚕️ INDICAÇÕES:
• Dor leve a moderada
• Febre
• Cólicas

💉 POSOLOGIA:
Adultos:
• VO: 500mg-1g, 4x/dia (máx 4g/dia)
• EV/IM: 1-2,5g, 3-4x/dia

Crianças:
• 10-15mg/kg/dose, 4x/dia

⚠️ EFEITOS ADVERSOS:
• Hipotensão (EV rápido)
• Agranulocitose (raro)
• Reações alérgicas
• Hipotermia

🚫 CONTRAINDICAÇÕES:
• Alergia a pirazolônicos
• Porfiria
• Deficiência G6PD
• Gravidez (1º e 3º trimestre)

👨‍⚕️ CUIDADOS DE ENFERMAGEM:
• Administrar EV lento (mín 5 min)
• Monitorar PA durante infusão
• Observar reações alérgicas
• Não misturar com outras drogas
• Proteger da luz"#,
    ),
    (
        "paracetamol",
        r#"PARACETAMOL (Acetaminofeno)

📋 CLASSE: Analgésico e antipirético

💊 APRESENTAÇÃO:
• Comprimido: 500mg, 750mg
• Solução oral: 200mg/ml
• Supositório: 125mg, 250mg, 500mg
• Ampola: 1g/100ml

⚕️ INDICAÇÕES:
• Dor leve a moderada
• Febre
• Alternativa para alérgicos a AAS

💉 POSOLOGIA:
Adultos:
• 500-1000mg, 6/6h (máx 4g/dia)
• EV: 1g, 6/6h

Crianças:
• 10-15mg/kg/dose, 4-6x/dia

⚠️ EFEITOS ADVERSOS:
• Hepatotoxicidade (overdose)
• Raras reações alérgicas
• Náuseas

🚫 CONTRAINDICAÇÕES:
• Hepatopatia grave
• Alcoolismo
• Alergia ao paracetamol

⚡ INTOXICAÇÃO:
• Dose tóxica: >150mg/kg
• Antídoto: N-acetilcisteína
• Sinais: náuseas, vômitos, dor abdominal
• Hepatotoxicidade em 24-72h

👨‍⚕️ CUIDADOS:
• Não exceder dose máxima
• Atenção em hepatopatas
• Verificar outros medicamentos com paracetamol
• Monitorar função hepática em uso prolongado"#,
    ),
    (
        "morfina",
        r#"MORFINA

📋 CLASSE: Opioide forte (Portaria 344)

💊 APRESENTAÇÃO:
• Ampola: 10mg/ml (1ml, 2ml)
• Comprimido: 10mg, 30mg
• Solução oral: 10mg/ml

⚕️ INDICAÇÕES:
• Dor intensa (câncer, pós-operatório)
• IAM (dor e ansiedade)
• Edema agudo de pulmão

💉 POSOLOGIA:
Adultos:
• SC/IM: 5-10mg, 4/4h
• EV: 2-5mg, diluído, lento
• VO: 10-30mg, 4/4h

⚠️ EFEITOS ADVERSOS:
• Depressão respiratória ⚠️
• Náuseas e vômitos
• Constipação
• Sonolência
• Hipotensão
• Miose
• Dependência

🚫 CONTRAINDICAÇÕES:
• Depressão respiratória
• Asma grave
• Íleo paralítico
• TCE com ↑PIC

⚡ ANTÍDOTO: NALOXONA
• 0,4-2mg EV
• Repetir se necessário

👨‍⚕️ CUIDADOS CRÍTICOS:
• Monitorar FR (manter >12 irpm)
• Monitorar nível consciência
• Ter naloxona disponível
• Administrar EV MUITO lento
• Controle rigoroso (Portaria 344)
• Prevenir constipação (laxantes)
• Grades no leito (sonolência)"#,
    ),
    (
        "amoxicilina",
        r#"AMOXICILINA

📋 CLASSE: Antibiótico β-lactâmico (Penicilina)

💊 APRESENTAÇÃO:
• Cápsula: 500mg
• Suspensão: 250mg/5ml, 500mg/5ml
• Comprimido: 500mg, 875mg

⚕️ INDICAÇÕES:
• Infecções respiratórias
• Otite, sinusite, faringite
• Infecções urinárias
• Infecções de pele

💉 POSOLOGIA:
Adultos:
• 500mg, 8/8h
• 875mg, 12/12h (infecções graves)

Crianças:
• 20-40mg/kg/dia, dividido 8/8h

⚠️ EFEITOS ADVERSOS:
• Diarreia (comum)
• Náuseas
• Rash cutâneo
• Candidíase oral/vaginal
• Reações alérgicas

🚫 CONTRAINDICAÇÕES:
• Alergia a penicilinas
• Mononucleose (risco rash)

💡 ASSOCIAÇÃO:
• Amoxicilina + Clavulanato
• Amplia espectro (β-lactamase)
• Dose: 500mg + 125mg, 8/8h

👨‍⚕️ CUIDADOS:
• Investigar alergia a penicilina
• Tomar com alimentos (↓náusea)
• Completar tratamento (7-10 dias)
• Observar reações alérgicas
• Hidratar bem"#,
    ),
    (
        "ceftriaxona",
        r#"CEFTRIAXONA

📋 CLASSE: Cefalosporina 3ª geração

💊 APRESENTAÇÃO:
• Frasco-ampola: 1g, 2g (pó)

⚕️ INDICAÇÕES:
• Pneumonia comunitária
• Meningite bacteriana
• Sepse
• Infecções graves
• Gonorreia

💉 POSOLOGIA:
Adultos:
• 1-2g, 1x/dia (EV ou IM)
• Meningite: 2g, 12/12h

Crianças:
• 50-100mg/kg/dia, 1-2x/dia

⚠️ RECONSTITUIÇÃO:
• IM: água destilada ou lidocaína 1%
• EV: SF 0,9% ou SG 5%
• Infundir em 30 minutos

⚠️ EFEITOS ADVERSOS:
• Diarreia
• Flebite (EV)
• Dor local (IM)
• Reações alérgicas
• Pseudolitíase biliar

🚫 CONTRAINDICAÇÕES:
• Alergia a cefalosporinas
• RN com hiperbilirrubinemia
• Não misturar com cálcio (precipita)

👨‍⚕️ CUIDADOS:
• Investigar alergia a β-lactâmicos
• Administrar EV lento
• IM profundo (doloroso)
• Não misturar com outras drogas
• Observar flebite
• Hidratar bem"#,
    ),
    (
        "captopril",
        r#"CAPTOPRIL

📋 CLASSE: IECA (Inibidor ECA)

💊 APRESENTAÇÃO:
• Comprimido: 12,5mg, 25mg, 50mg

⚕️ INDICAÇÕES:
• Hipertensão arterial
• Insuficiência cardíaca
• Pós-IAM
• Nefropatia diabética

💉 POSOLOGIA:
Adultos:
• Inicial: 12,5-25mg, 2-3x/dia
• Manutenção: 25-50mg, 2-3x/dia
• Máxima: 150mg/dia

⚠️ EFEITOS ADVERSOS:
• Tosse seca (10-20%) ⚠️
• Hipotensão (1ª dose)
• Hipercalemia
• Angioedema (raro, grave)
• Alteração paladar

🚫 CONTRAINDICAÇÕES:
• Gravidez (teratogênico)
• Estenose bilateral artéria renal
• Angioedema prévio
• Hipercalemia

👨‍⚕️ CUIDADOS:
• Tomar em jejum (1h antes refeição)
• Monitorar PA (hipotensão 1ª dose)
• Monitorar K+ e creatinina
• Orientar sobre tosse
• Evitar suplementos de potássio
• Suspender se gravidez"#,
    ),
    (
        "losartana",
        r#"LOSARTANA

📋 CLASSE: BRA (Bloqueador Receptor AT1)

💊 APRESENTAÇÃO:
• Comprimido: 25mg, 50mg, 100mg

⚕️ INDICAÇÕES:
• Hipertensão arterial
• Insuficiência cardíaca
• Nefropatia diabética
• Alternativa a IECA (tosse)

💉 POSOLOGIA:
Adultos:
• Inicial: 50mg, 1x/dia
• Manutenção: 50-100mg, 1x/dia

⚠️ EFEITOS ADVERSOS:
• Tontura
• Hipotensão
• Hipercalemia
• Fadiga
• NÃO causa tosse (vantagem)

🚫 CONTRAINDICAÇÕES:
• Gravidez
• Estenose bilateral artéria renal
• Hipercalemia

👨‍⚕️ CUIDADOS:
• Pode tomar com alimentos
• Monitorar PA
• Monitorar K+ e creatinina
• Orientar mudança postural lenta
• Suspender se gravidez"#,
    ),
    (
        "heparina",
        r#"HEPARINA

📋 CLASSE: Anticoagulante

💊 APRESENTAÇÃO:
• Heparina não-fracionada: 5.000 UI/ml
• Enoxaparina (HBPM): 40mg, 60mg, 80mg

⚕️ INDICAÇÕES:
• TVP/TEP (tratamento e profilaxia)
• Síndrome coronariana aguda
• Fibrilação atrial
• Hemodiálise

💉 POSOLOGIA:

HEPARINA NÃO-FRACIONADA:
• Profilaxia: 5.000 UI, SC, 8/8h ou 12/12h
• Tratamento: 80 UI/kg bolus + 18 UI/kg/h EV

ENOXAPARINA:
• Profilaxia: 40mg, SC, 1x/dia
• Tratamento: 1mg/kg, SC, 12/12h

⚠️ EFEITOS ADVERSOS:
• Sangramento ⚠️
• Trombocitopenia (HIT)
• Hematomas
• Osteoporose (uso prolongado)

🚫 CONTRAINDICAÇÕES:
• Sangramento ativo
• Trombocitopenia
• Cirurgia recente SNC/olhos
• Úlcera péptica ativa

⚡ ANTÍDOTO:
• Protamina (1mg neutraliza 100 UI heparina)

👨‍⚕️ CUIDADOS CRÍTICOS:
• Monitorar sinais de sangramento
• Verificar plaquetas (HIT)
• TTPa (heparina) ou anti-Xa (enoxaparina)
• SC em abdome (alternar lados)
• Não massagear local
• Não aspirar antes de injetar
• Evitar IM durante uso"#,
    ),
    (
        "varfarina",
        r#"VARFARINA (Marevan)

📋 CLASSE: Anticoagulante oral

💊 APRESENTAÇÃO:
• Comprimido: 5mg

⚕️ INDICAÇÕES:
• TVP/TEP (manutenção)
• Fibrilação atrial
• Prótese valvar
• Prevenção AVC

💉 POSOLOGIA:
• Inicial: 5mg/dia
• Ajustar conforme INR
• INR alvo: 2-3 (maioria)
• INR alvo: 2,5-3,5 (prótese mecânica)

⚠️ EFEITOS ADVERSOS:
• Sangramento ⚠️
• Necrose cutânea (raro)
• Teratogênico

🚫 CONTRAINDICAÇÕES:
• Gravidez
• Sangramento ativo
• Cirurgia recente
• HAS não controlada

⚡ ANTÍDOTO:
• Vitamina K (10mg EV lento)
• Plasma fresco (emergência)

💊 INTERAÇÕES (MUITAS!):
↑ Efeito (↑sangramento):
• AAS, AINEs
• Antibióticos
• Amiodarona
• Omeprazol

↓ Efeito (↓anticoagulação):
• Vitamina K (alimentos verdes)
• Carbamazepina
• Rifampicina

👨‍⚕️ CUIDADOS CRÍTICOS:
• Monitorar INR semanalmente (início)
• Monitorar INR mensalmente (estável)
• Orientar dieta (evitar excessos vit K)
• Orientar sinais sangramento
• Cartão de anticoagulado
• Evitar IM
• Cuidado com quedas"#,
    ),
    (
        "insulina",
        r#"INSULINAS

📋 TIPOS E AÇÃO:

1️⃣ ULTRARRÁPIDA (Lispro, Aspart):
• Início: 5-15 min
• Pico: 1-2h
• Duração: 3-5h
• Uso: antes refeições

2️⃣ RÁPIDA (Regular):
• Início: 30 min
• Pico: 2-4h
• Duração: 6-8h
• Uso: 30 min antes refeições

3️⃣ INTERMEDIÁRIA (NPH):
• Início: 1-2h
• Pico: 4-8h
• Duração: 12-18h
• Uso: 2x/dia

4️⃣ LENTA (Glargina, Detemir):
• Início: 1-2h
• Sem pico
• Duração: 24h
• Uso: 1x/dia (basal)

💉 VIAS:
• SC: abdome (mais rápida), coxa, braço
• EV: APENAS regular (emergências)

⚠️ HIPOGLICEMIA:
• Sinais: tremor, sudorese, taquicardia, confusão
• <70 mg/dL: 15g carboidrato
• <50 mg/dL ou inconsciente: glicose EV ou glucagon

⚠️ HIPERGLICEMIA:
• >250 mg/dL: verificar cetona
• Cetoacidose: insulina regular EV + hidratação

👨‍⚕️ CUIDADOS CRÍTICOS:
• Armazenar 2-8°C (geladeira)
• Frasco em uso: temperatura ambiente (28 dias)
• Homogeneizar NPH (rolar, não agitar)
• Rodízio de locais (evitar lipodistrofia)
• Ângulo 90° (SC)
• Não massagear após
• Verificar glicemia antes
• Administrar regular 30 min antes refeição
• Nunca misturar glargina
• Ordem: regular + NPH (mesma seringa)"#,
    ),
    (
        "salbutamol",
        r#"SALBUTAMOL (Aerolin)

📋 CLASSE: β2-agonista de curta ação

💊 APRESENTAÇÃO:
• Aerosol (spray): 100mcg/jato
• Solução inalação: 5mg/ml
• Comprimido: 2mg, 4mg

⚕️ INDICAÇÕES:
• Broncoespasmo agudo
• Asma
• DPOC
• Prevenção broncoespasmo (exercício)

💉 POSOLOGIA:

INALAÇÃO:
• Spray: 2 jatos, 4-6x/dia (máx 8 jatos/dia)
• Nebulização: 2,5-5mg (0,5-1ml), 3-4x/dia

VO:
• 2-4mg, 3-4x/dia

⚠️ EFEITOS ADVERSOS:
• Tremor (comum)
• Taquicardia
• Palpitações
• Hipocalemia (altas doses)
• Nervosismo

🚫 CONTRAINDICAÇÕES:
• Taquiarritmias
• Cardiopatia grave (relativo)

👨‍⚕️ CUIDADOS:
• Técnica inalatória correta
• Espaçador (melhora deposição)
• Enxaguar boca após
• Monitorar FC
• Monitorar K+ (uso frequente)
• Orientar: não é preventivo
• Se uso >2x/semana: reavaliar controle"#,
    ),
    (
        "dexametasona",
        r#"DEXAMETASONA

📋 CLASSE: Corticoide potente

💊 APRESENTAÇÃO:
• Ampola: 4mg/ml (2,5ml)
• Comprimido: 0,5mg, 0,75mg, 4mg
• Elixir: 0,1mg/ml

⚕️ INDICAÇÕES:
• Edema cerebral
• Reações alérgicas graves
• Asma/DPOC grave
• Náuseas/vômitos (quimioterapia)
• COVID-19 grave

💉 POSOLOGIA:

EDEMA CEREBRAL:
• 10mg EV + 4mg, 6/6h

ALERGIA GRAVE:
• 4-8mg EV/IM

COVID-19 GRAVE:
• 6mg/dia, 10 dias

⚠️ EFEITOS ADVERSOS:
Curto prazo:
• Hiperglicemia
• Insônia
• Agitação
• Retenção hídrica

Longo prazo:
• Osteoporose
• Imunossupressão
• Síndrome de Cushing
• HAS, diabetes

🚫 CONTRAINDICAÇÕES:
• Infecções fúngicas sistêmicas
• Úlcera péptica ativa (relativo)

👨‍⚕️ CUIDADOS:
• Monitorar glicemia
• Administrar com alimentos
• Não suspender abruptamente
• Proteger estômago (omeprazol)
• Suplementar cálcio/vit D (longo prazo)
• Atenção infecções"#,
    ),
    (
        "furosemida",
        r#"FUROSEMIDA (Lasix)

📋 CLASSE: Diurético de alça

💊 APRESENTAÇÃO:
• Comprimido: 40mg
• Ampola: 10mg/ml (2ml)

⚕️ INDICAÇÕES:
• Edema (ICC, cirrose, renal)
• Hipertensão
• Edema agudo pulmão

💉 POSOLOGIA:

VO:
• 20-80mg/dia (manhã)
• Máx: 600mg/dia

EV:
• 20-40mg, lento
• Pode repetir/aumentar

⚠️ EFEITOS ADVERSOS:
• Hipocalemia ⚠️
• Hiponatremia
• Hipomagnesemia
• Desidratação
• Hipotensão
• Ototoxicidade (altas doses EV)

🚫 CONTRAINDICAÇÕES:
• Anúria
• Hipocalemia grave
• Desidratação grave

👨‍⚕️ CUIDADOS CRÍTICOS:
• Monitorar K+ (risco arritmia)
• Monitorar Na+, Mg++
• Monitorar função renal
• Pesar diariamente
• Balanço hídrico
• Administrar EV lento (ototoxicidade)
• Tomar pela manhã (evitar noctúria)
• Suplementar K+ se necessário
• Orientar: levante devagar"#,
    ),
    (
        "espironolactona",
        r#"ESPIRONOLACTONA (Aldactone)

📋 CLASSE: Diurético poupador de potássio

💊 APRESENTAÇÃO:
• Comprimido: 25mg, 50mg, 100mg

⚕️ INDICAÇÕES:
• ICC (reduz mortalidade)
• Hipertensão
• Ascite (cirrose)
• Hiperaldosteronismo

💉 POSOLOGIA:
• ICC: 25-50mg/dia
• HAS: 50-100mg/dia
• Ascite: 100-400mg/dia

⚠️ EFEITOS ADVERSOS:
• Hipercalemia ⚠️
• Ginecomastia (homens)
• Irregularidade menstrual
• Hipotensão

🚫 CONTRAINDICAÇÕES:
• Hipercalemia
• Insuficiência renal grave
• Doença de Addison

👨‍⚕️ CUIDADOS:
• Monitorar K+ rigorosamente
• Monitorar creatinina
• Evitar suplementos K+
• Evitar substitutos sal (KCl)
• Cuidado com IECA/BRA (↑K+)
• Pode tomar com alimentos"#,
    ),
];

/// Nome comercial → nome genérico.
pub const BRAND_NAMES: &[(&str, &str)] = &[
    ("novalgina", "dipirona"),
    ("tylenol", "paracetamol"),
    ("doril", "paracetamol"),
    ("amoxil", "amoxicilina"),
    ("rocefin", "ceftriaxona"),
    ("capoten", "captopril"),
    ("cozaar", "losartana"),
    ("clexane", "heparina"),
    ("marevan", "varfarina"),
    ("coumadin", "varfarina"),
    ("aerolin", "salbutamol"),
    ("decadron", "dexametasona"),
    ("lasix", "furosemida"),
    ("aldactone", "espironolactona"),
];
