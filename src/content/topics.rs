//! # Tópicos — Conteúdo da Base de Conhecimento
//!
//! Tabela estática `(chave, resposta)` com os textos didáticos de cada tópico.
//! A **ordem de declaração importa**: ela define o desempate da pontuação por
//! palavras-chave em [`crate::resolver`] (o primeiro tópico visto vence).
//!
//! As chaves são sequências de palavras separadas por um único espaço, sempre
//! em minúsculas. Cada palavra da chave é comparada por substring contra a
//! pergunta normalizada.

/// Tópicos na ordem em que são avaliados.
pub const TOPICS: &[(&str, &str)] = &[
    (
        "pressão arterial",
        r#"A pressão arterial (PA) é a força que o sangue exerce contra as paredes das artérias. É medida em mmHg e possui dois valores:

• Sistólica (máxima): quando o coração contrai - normal até 120 mmHg
• Diastólica (mínima): quando o coração relaxa - normal até 80 mmHg

Classificação:
- Normal: <120/80
- Pré-hipertensão: 120-139/80-89
- Hipertensão estágio 1: 140-159/90-99
- Hipertensão estágio 2: ≥160/≥100"#,
    ),
    (
        "sinais vitais",
        r#"Os sinais vitais são indicadores essenciais das funções corporais:

1. Temperatura: 36-37°C (axilar)
2. Frequência Cardíaca: 60-100 bpm (adultos)
3. Frequência Respiratória: 12-20 irpm (adultos)
4. Pressão Arterial: 120/80 mmHg
5. Saturação de O₂: >95%
6. Dor: escala 0-10

Verifique sempre em ambiente calmo e registre corretamente!"#,
    ),
    (
        "curativo",
        r#"Técnica de Curativo:

1. Higienize as mãos
2. Reúna material estéril
3. Calce luvas de procedimento
4. Remova curativo anterior
5. Avalie a ferida
6. Limpe com SF 0,9% (centro→periferia)
7. Seque com gaze estéril
8. Aplique cobertura apropriada
9. Fixe adequadamente
10. Descarte material e higienize mãos

Registre: aspecto, tamanho, exsudato, sinais de infecção."#,
    ),
    (
        "sepse",
        r#"SEPSE - Emergência Médica!

Definição: Resposta inflamatória sistêmica grave à infecção.

Sinais de Alerta (qSOFA):
• Alteração do nível de consciência
• Pressão sistólica ≤100 mmHg
• Frequência respiratória ≥22 irpm

Outros sinais:
• Febre >38°C ou hipotermia <36°C
• Taquicardia >90 bpm
• Leucocitose ou leucopenia

Tratamento:
• Antibiótico em 1 hora
• Reposição volêmica
• Suporte hemodinâmico
• Monitorização intensiva"#,
    ),
    (
        "medicação",
        r#"Administração de Medicamentos - 9 Certos:

1. Paciente certo
2. Medicamento certo
3. Via certa
4. Dose certa
5. Horário certo
6. Registro certo
7. Orientação certa
8. Forma certa
9. Resposta certa

Vias:
• VO: oral
• IM: intramuscular
• SC: subcutânea
• EV: endovenosa
• SL: sublingual
• Tópica, retal, inalatória"#,
    ),
    (
        "sonda",
        r#"Sondagem Vesical de Demora (SVD):

Indicações:
• Retenção urinária
• Controle de diurese
• Pós-operatório
• Incontinência com lesão

Técnica:
1. Higiene íntima rigorosa
2. Técnica asséptica
3. Lubrificação adequada
4. Introdução suave
5. Insuflar balão (10ml)
6. Fixar adequadamente
7. Sistema fechado

Cuidados: higiene diária, sistema fechado, trocar conforme protocolo."#,
    ),
    (
        "ferida",
        r#"Classificação de Feridas:

Por profundidade:
• Grau I: epiderme
• Grau II: derme
• Grau III: tecido subcutâneo
• Grau IV: músculo/osso

Por tempo:
• Aguda: <3 meses
• Crônica: >3 meses

Coberturas:
• Hidrocolóide: feridas limpas
• Alginato: exsudato intenso
• Hidrogel: necrose
• AGE: granulação
• Carvão ativado: odor"#,
    ),
    (
        "oxigenoterapia",
        r#"Oxigenoterapia:

Dispositivos:
• Cateter nasal: 1-6 L/min (24-44%)
• Máscara simples: 5-10 L/min (40-60%)
• Máscara com reservatório: 10-15 L/min (60-90%)
• Venturi: concentração precisa

Cuidados:
• Umidificar se >4L/min
• Monitorar saturação
• Avaliar sinais de hipóxia
• Cuidado com DPOC
• Risco de incêndio"#,
    ),
    (
        "diabetes",
        r#"Diabetes Mellitus:

Tipos:
• Tipo 1: autoimune, insulinodependente
• Tipo 2: resistência insulínica
• Gestacional: na gravidez

Sinais:
• Poliúria, polidipsia, polifagia
• Perda de peso
• Glicemia >126 mg/dL (jejum)

Complicações:
• Hipoglicemia (<70 mg/dL)
• Hiperglicemia (>180 mg/dL)
• Cetoacidose diabética
• Neuropatia, retinopatia, nefropatia

Cuidados: dieta, exercício, medicação, monitorização."#,
    ),
    (
        "rcp",
        r#"RCP - Reanimação Cardiopulmonar:

Adulto (Protocolo AHA):
1. Checar responsividade
2. Acionar emergência
3. Posicionar em superfície rígida
4. Compressões: 100-120/min
5. Profundidade: 5-6 cm
6. Relação 30:2 (compressões:ventilações)
7. Minimizar interrupções
8. Trocar socorrista a cada 2 min
9. DEA assim que disponível

Não pare até:
• Retorno da circulação
• Equipe especializada assumir
• Exaustão física
• Ordem médica"#,
    ),
    (
        "lavagem",
        r#"Lavagem das Mãos:

Simples (40-60 seg):
1. Molhe as mãos
2. Aplique sabão
3. Ensaboe palmas
4. Palma direita sobre dorso esquerdo
5. Palma esquerda sobre dorso direito
6. Entrelace os dedos
7. Esfregue polegares
8. Esfregue pontas dos dedos
9. Esfregue punhos
10. Enxágue e seque

Álcool gel: mesma técnica, 20-30 seg"#,
    ),
    (
        "ppe",
        r#"EPI - Equipamento de Proteção Individual:

Sequência de Colocação:
1. Higienize as mãos
2. Avental
3. Máscara/respirador
4. Óculos/face shield
5. Luvas

Sequência de Retirada:
1. Luvas
2. Higienize as mãos
3. Óculos/face shield
4. Avental
5. Higienize as mãos
6. Máscara
7. Higienize as mãos"#,
    ),
    (
        "vacina",
        r#"Vacinação:

Vias:
• IM: deltoide, vasto lateral (90°)
• SC: região deltóidea, face anterior coxa (45°)
• ID: face anterior antebraço (15°)
• VO: oral

Cuidados:
• Verificar validade e conservação
• Assepsia do local
• Aspirar antes de injetar (IM)
• Não massagear após aplicação
• Registrar: data, lote, via, local
• Orientar sobre reações"#,
    ),
    (
        "glicemia",
        r#"Glicemia Capilar:

Técnica:
1. Higienize as mãos
2. Prepare o glicosímetro
3. Faça antissepsia do dedo
4. Aguarde secar
5. Puncione lateral do dedo
6. Descarte primeira gota
7. Aplique sangue na fita
8. Aguarde resultado
9. Faça hemostasia
10. Registre

Valores:
• Jejum: 70-100 mg/dL
• Pós-prandial: <140 mg/dL
• Hipoglicemia: <70 mg/dL
• Hiperglicemia: >180 mg/dL"#,
    ),
    (
        "ecg",
        r#"ECG - Eletrocardiograma:

Derivações:
• V1: 4º EIC direito, paraesternal
• V2: 4º EIC esquerdo, paraesternal
• V3: entre V2 e V4
• V4: 5º EIC esquerdo, linha hemiclavicular
• V5: 5º EIC esquerdo, linha axilar anterior
• V6: 5º EIC esquerdo, linha axilar média

Membros:
• Vermelho: braço direito
• Amarelo: braço esquerdo
• Verde: perna esquerda
• Preto: perna direita"#,
    ),
    (
        "sng",
        r#"Sonda Nasogástrica (SNG):

Indicações:
• Nutrição enteral
• Descompressão gástrica
• Lavagem gástrica
• Administração de medicamentos

Técnica:
1. Medir: nariz-orelha-apêndice xifoide
2. Lubrificar sonda
3. Introduzir pela narina
4. Pedir para deglutir
5. Verificar posicionamento
6. Fixar adequadamente

Teste: aspirar conteúdo gástrico ou ausculta"#,
    ),
    (
        "inalação",
        r#"Inalação/Nebulização:

Indicações:
• Broncoespasmo
• Secreção espessa
• Hidratação de vias aéreas

Técnica:
1. Higienize as mãos
2. Prepare medicação prescrita
3. Adicione SF 0,9% (3-5ml)
4. Conecte máscara/bocal
5. Ligue nebulizador (6-8 L/min)
6. Oriente respiração lenta e profunda
7. Duração: 10-15 min
8. Higienize equipamento"#,
    ),
    (
        "precaução",
        r#"Precauções:

Padrão (todos os pacientes):
• Higiene das mãos
• Luvas se contato com fluidos
• EPI conforme risco

Contato:
• Avental e luvas
• Ex: MRSA, C. difficile

Gotículas:
• Máscara cirúrgica
• Ex: Influenza, meningite

Aerossol:
• N95/PFF2
• Quarto com pressão negativa
• Ex: Tuberculose, COVID-19, sarampo"#,
    ),
    (
        "dor",
        r#"Avaliação da Dor:

Escalas:
• Numérica: 0-10
• Visual analógica: linha
• Faces: Wong-Baker
• CPOT: paciente crítico

Características (PQRST):
• P: Provocação/Paliação
• Q: Qualidade
• R: Região/Irradiação
• S: Severidade (0-10)
• T: Tempo/Duração

Registrar sempre: localização, intensidade, característica, fatores de melhora/piora"#,
    ),
    (
        "ciclo cardíaco",
        r#"Ciclo Cardíaco:

1. DIÁSTOLE (Relaxamento):
• Átrios e ventrículos relaxados
• Sangue entra nos átrios
• Válvulas AV abertas (mitral e tricúspide)
• Válvulas semilunares fechadas
• Enchimento ventricular passivo (70%)

2. SÍSTOLE ATRIAL:
• Contração dos átrios
• Enchimento ventricular ativo (30%)
• Completa enchimento dos ventrículos

3. SÍSTOLE VENTRICULAR:
• Contração dos ventrículos
• Válvulas AV fecham (1ª bulha - TUM)
• Pressão aumenta nos ventrículos
• Válvulas semilunares abrem
• Ejeção do sangue
• Válvulas semilunares fecham (2ª bulha - TÁ)

Débito Cardíaco = FC × Volume Sistólico"#,
    ),
    (
        "icc",
        r#"Insuficiência Cardíaca Congestiva (ICC):

Definição: Incapacidade do coração bombear sangue adequadamente.

Tipos:
• ICC Esquerda: congestão pulmonar
• ICC Direita: congestão sistêmica
• ICC Biventricular: ambos

Sinais e Sintomas:
Esquerda:
• Dispneia, ortopneia
• Tosse seca noturna
• Crepitações pulmonares
• Fadiga

Direita:
• Edema MMII
• Hepatomegalia
• Turgência jugular
• Ascite

Tratamento:
• Diuréticos
• IECA/BRA
• Beta-bloqueadores
• Restrição hídrica e sódio
• Monitorar peso diário"#,
    ),
    (
        "iam",
        r#"Infarto Agudo do Miocárdio (IAM):

Definição: Necrose do músculo cardíaco por falta de oxigênio.

Sinais Clássicos:
• Dor precordial intensa (>20 min)
• Irradiação: braço E, mandíbula, dorso
• Sudorese fria
• Náuseas/vômitos
• Dispneia
• Ansiedade (sensação de morte)

Diagnóstico:
• ECG: supra ST, onda Q
• Troponina elevada
• CK-MB elevada

Tratamento (Tempo = Músculo!):
• AAS 200mg (mastigar)
• Oxigênio se SpO₂ <90%
• Morfina (dor)
• Nitroglicerina
• Angioplastia ou trombolítico
• Monitorização contínua

Cuidados:
• Repouso absoluto
• Dieta leve
• Controle ansiedade
• Prevenir complicações"#,
    ),
    (
        "avc",
        r#"AVC - Acidente Vascular Cerebral:

Tipos:
• Isquêmico (80%): obstrução
• Hemorrágico (20%): ruptura

Sinais (SAMU):
• S: Sorriso - desvio de rima
• A: Abraço - fraqueza em membros
• M: Música - fala arrastada
• U: Urgência - ligar 192

Outros sinais:
• Perda súbita de força
• Alteração visual
• Cefaleia intensa
• Tontura, desequilíbrio
• Confusão mental

Janela Terapêutica:
• Trombolítico: até 4,5h
• Trombectomia: até 24h

Cuidados:
• Cabeceira 30°
• Jejum (risco aspiração)
• Monitorar PA
• Glicemia
• Avaliar deglutição
• Prevenir úlceras pressão"#,
    ),
    (
        "pneumonia",
        r#"Pneumonia:

Definição: Infecção do parênquima pulmonar.

Sinais e Sintomas:
• Febre alta
• Tosse produtiva
• Dispneia
• Dor torácica pleurítica
• Taquipneia
• Crepitações
• Expectoração purulenta

Diagnóstico:
• Raio-X: infiltrado
• Ausculta: crepitações
• Leucocitose
• Cultura escarro

Tratamento:
• Antibiótico (conforme agente)
• Hidratação
• Oxigenoterapia
• Fisioterapia respiratória
• Repouso

Cuidados:
• Cabeceira elevada
• Higiene oral
• Aspiração se necessário
• Monitorar SpO₂
• Incentivar tosse"#,
    ),
    (
        "dpoc",
        r#"DPOC - Doença Pulmonar Obstrutiva Crônica:

Definição: Obstrução crônica das vias aéreas (enfisema + bronquite).

Sinais:
• Dispneia progressiva
• Tosse crônica
• Expectoração
• Sibilos
• Tórax em barril
• Uso musculatura acessória

Fatores de Risco:
• Tabagismo (principal)
• Poluição
• Exposição ocupacional

Tratamento:
• Broncodilatadores
• Corticoides inalatórios
• Oxigenoterapia (cuidado!)
• Cessação tabagismo
• Vacinação
• Reabilitação pulmonar

Cuidados:
• O₂ baixo fluxo (1-3L/min)
• Monitorar SpO₂ (88-92%)
• Fisioterapia respiratória
• Nutrição adequada"#,
    ),
    (
        "choque",
        r#"Choque:

Definição: Perfusão tecidual inadequada.

Tipos:

1. HIPOVOLÊMICO:
• Causa: hemorragia, desidratação
• Sinais: PA↓, FC↑, pele fria
• Tratamento: reposição volêmica

2. CARDIOGÊNICO:
• Causa: IAM, ICC grave
• Sinais: congestão pulmonar
• Tratamento: inotrópicos

3. DISTRIBUTIVO:
• Séptico: infecção
• Anafilático: alergia
• Neurogênico: lesão medular
• Sinais: vasodilatação
• Tratamento: vasopressores

4. OBSTRUTIVO:
• Causa: TEP, tamponamento
• Tratamento: remover obstrução

Sinais Gerais:
• PA sistólica <90 mmHg
• FC >100 bpm
• Pele fria, pegajosa
• Oligúria
• Alteração consciência
• Lactato elevado"#,
    ),
    (
        "queimadura",
        r#"Queimaduras:

Classificação por Profundidade:

1º GRAU:
• Epiderme
• Vermelhidão, dor
• Sem bolhas
• Cura: 3-6 dias

2º GRAU:
• Epiderme + derme
• Bolhas, dor intensa
• Superficial ou profunda
• Cura: 7-21 dias

3º GRAU:
• Todas camadas
• Branca/carbonizada
• Sem dor (nervos destruídos)
• Necessita enxerto

Regra dos 9 (adulto):
• Cabeça: 9%
• Tronco anterior: 18%
• Tronco posterior: 18%
• Braço: 9% cada
• Perna: 18% cada
• Períneo: 1%

Primeiros Socorros:
• Resfriar com água corrente (10-20 min)
• Não usar gelo
• Não furar bolhas
• Cobrir com pano limpo
• Não passar pasta de dente, manteiga, etc

Tratamento:
• Reposição hídrica (Parkland)
• Analgesia
• Curativo apropriado
• Prevenir infecção
• Suporte nutricional"#,
    ),
    (
        "calculo medicação",
        r#"Cálculos de Medicação:

1. REGRA DE TRÊS:
Tenho : Quero = Tem : X

Exemplo: Prescrito 500mg, ampola tem 1g/2ml
1000mg : 500mg = 2ml : X
X = 1ml

2. GOTEJAMENTO:
Gotas/min = (Volume × 20) ÷ Tempo(h)
Microgotas/min = Volume ÷ Tempo(h)

Exemplo: 1000ml SF em 8h
Gotas = (1000 × 20) ÷ 8 = 42 gts/min
Microgotas = 1000 ÷ 8 = 125 mcgts/min

3. DILUIÇÃO:
Concentração = Dose ÷ Volume

4. DOSE POR PESO:
Dose = Peso(kg) × Dose/kg

Exemplo: 10mg/kg para 70kg
Dose = 70 × 10 = 700mg

5. VELOCIDADE INFUSÃO:
ml/h = Volume total ÷ Tempo(h)

Dicas:
• Sempre conferir unidades
• 1g = 1000mg
• 1mg = 1000mcg
• 1ml = 20 gotas = 60 microgotas"#,
    ),
    (
        "hemodiálise",
        r#"Hemodiálise:

Indicações:
• Insuficiência renal crônica
• IRA grave
• Intoxicações
• Hipercalemia grave
• Acidose metabólica
• Sobrecarga hídrica

Acesso Vascular:
• FAV (fístula arteriovenosa) - preferencial
• Cateter duplo lúmen

Cuidados Pré-Diálise:
• Verificar sinais vitais
• Pesar paciente
• Avaliar acesso vascular
• Não puncionar braço da FAV
• Não aferir PA no braço da FAV
• Jejum não obrigatório

Cuidados Durante:
• Monitorar PA, FC
• Observar sinais hipotensão
• Náuseas, vômitos
• Cãibras
• Sangramento

Cuidados Pós:
• Pesar novamente
• Verificar sinais vitais
• Hemostasia do acesso
• Observar sangramento
• Orientar repouso

Cuidados com FAV:
• Auscultar frêmito
• Não comprimir
• Não puncionar
• Não aferir PA
• Observar sinais infecção"#,
    ),
    (
        "parto",
        r#"Assistência ao Parto:

Períodos do Parto:

1º PERÍODO (Dilatação):
• Fase latente: 0-4cm
• Fase ativa: 4-10cm
• Contrações regulares
• Cuidados: deambulação, hidratação, alívio dor

2º PERÍODO (Expulsão):
• Dilatação completa até nascimento
• Puxos (força materna)
• Coroamento
• Nascimento

3º PERÍODO (Dequitação):
• Expulsão da placenta
• Até 30 minutos
• Verificar integridade placenta

4º PERÍODO (Greenberg):
• Primeira hora pós-parto
• Risco hemorragia
• Monitorização rigorosa

Cuidados Imediatos RN:
• Secar e aquecer
• Clampeamento cordão (1-3 min)
• APGAR (1 e 5 min)
• Contato pele a pele
• Amamentação 1ª hora
• Vitamina K IM
• Credé (nitrato prata)
• Identificação

Sinais Alerta:
• Sangramento excessivo
• Hipotonia uterina
• Alteração sinais vitais
• Descolamento prematuro placenta"#,
    ),
    (
        "aleitamento",
        r#"Aleitamento Materno:

Benefícios:
• Nutrição completa até 6 meses
• Proteção imunológica
• Vínculo mãe-bebê
• Reduz mortalidade infantil
• Econômico

Técnica Correta:
• Pega: boca aberta, aréola na boca
• Posição: barriga com barriga
• Nariz livre
• Queixo toca mama
• Lábios evertidos

Posições:
• Tradicional (sentada)
• Cavalinho
• Deitada
• Invertida (futebol americano)

Livre Demanda:
• Sem horários fixos
• Sempre que bebê quiser
• Mínimo 8-12x/dia
• Esvaziar uma mama antes

Problemas Comuns:

FISSURAS:
• Causa: pega incorreta
• Tratamento: corrigir pega, próprio leite

INGURGITAMENTO:
• Causa: acúmulo leite
• Tratamento: ordenha, compressas

MASTITE:
• Sinais: febre, dor, vermelhidão
• Tratamento: antibiótico, continuar amamentar

Contraindicações:
• HIV positivo
• HTLV
• Drogas ilícitas
• Alguns medicamentos"#,
    ),
    (
        "pediatria",
        r#"Cuidados Pediátricos:

Sinais Vitais Normais:

RECÉM-NASCIDO:
• FC: 120-160 bpm
• FR: 30-60 irpm
• PA: 60-90/30-60 mmHg
• Temp: 36,5-37,5°C

LACTENTE (1-12 meses):
• FC: 100-160 bpm
• FR: 25-40 irpm
• PA: 80-100/55-65 mmHg

PRÉ-ESCOLAR (1-5 anos):
• FC: 90-140 bpm
• FR: 20-30 irpm
• PA: 95-105/60-70 mmHg

ESCOLAR (6-12 anos):
• FC: 70-120 bpm
• FR: 18-25 irpm
• PA: 100-120/60-75 mmHg

Desidratação Infantil:

LEVE (5%):
• Sede, mucosas secas
• TEC <2 seg

MODERADA (10%):
• Olhos fundos
• Fontanela deprimida
• TEC 2-3 seg
• Oligúria

GRAVE (15%):
• Letargia
• TEC >3 seg
• Pulso fraco
• Anúria
• Choque

Tratamento:
• Leve: TRO (soro caseiro)
• Moderada/Grave: hidratação EV"#,
    ),
    (
        "idoso",
        r#"Cuidados Geriátricos:

Alterações do Envelhecimento:

CARDIOVASCULAR:
• Rigidez arterial
• Hipertensão
• Arritmias

RESPIRATÓRIO:
• Capacidade vital↓
• Risco pneumonia

RENAL:
• Filtração glomerular↓
• Risco desidratação

MUSCULOESQUELÉTICO:
• Sarcopenia
• Osteoporose
• Risco quedas

NEUROLÓGICO:
• Memória↓
• Reflexos↓
• Risco demência

Síndromes Geriátricas:

1. IMOBILIDADE:
• Úlceras pressão
• Trombose
• Pneumonia
• Prevenção: mobilização

2. INSTABILIDADE:
• Quedas frequentes
• Fraturas
• Prevenção: ambiente seguro

3. INCONTINÊNCIA:
• Urinária/fecal
• Impacto social
• Cuidados: higiene, hidratação

4. INSUFICIÊNCIA COGNITIVA:
• Demência
• Delirium
• Depressão

5. IATROGENIA:
• Polifarmácia
• Reações adversas
• Revisar medicações

Prevenção Quedas:
• Iluminação adequada
• Barras apoio
• Piso antiderrapante
• Calçados adequados
• Óculos corretos
• Revisar medicações"#,
    ),
    (
        "dipirona",
        r#"DIPIRONA (Metamizol):

Classe: Analgésico e antipirético

Indicações:
• Dor leve a moderada
• Febre
• Cólicas

Doses:
• Adulto: 500-1000mg VO/EV 6/6h
• Máximo: 4g/dia
• Criança: 10-15mg/kg/dose

Via EV:
• Diluir em 100ml SF 0,9%
• Infundir em 20-30 min
• NUNCA em bolus (risco choque)

Efeitos Adversos:
• Hipotensão (EV rápido)
• Agranulocitose (raro)
• Reações alérgicas

Contraindicações:
• Alergia conhecida
• Porfiria
• Deficiência G6PD

Cuidados:
• Monitorar PA se EV
• Infusão lenta
• Observar reações"#,
    ),
    (
        "paracetamol",
        r#"PARACETAMOL (Acetaminofeno):

Classe: Analgésico e antipirético

Indicações:
• Dor leve a moderada
• Febre

Doses:
• Adulto: 500-1000mg VO 6/6h
• Máximo: 4g/dia (3g se hepatopata)
• Criança: 10-15mg/kg/dose 4/6h

Apresentações:
• Comprimido 500mg, 750mg
• Solução oral 200mg/ml
• EV 1g/100ml

Efeitos Adversos:
• Hepatotoxicidade (overdose)
• Raros: reações alérgicas

Intoxicação:
• >150mg/kg = tóxico
• Sintomas: náuseas, vômitos
• Antídoto: N-acetilcisteína
• Janela: até 8h

Contraindicações:
• Hepatopatia grave
• Alcoolismo

Cuidados:
• Não exceder dose máxima
• Atenção em hepatopatas
• Verificar outros medicamentos com paracetamol"#,
    ),
    (
        "omeprazol",
        r#"OMEPRAZOL:

Classe: Inibidor da bomba de prótons (IBP)

Indicações:
• DRGE (refluxo)
• Úlcera gástrica/duodenal
• Gastrite
• Prevenção úlcera por AINE
• Erradicação H. pylori

Doses:
• DRGE: 20mg 1x/dia
• Úlcera: 20-40mg 1x/dia
• H. pylori: 20mg 2x/dia + antibióticos

Administração:
• Tomar em jejum (30 min antes café)
• Não mastigar cápsula
• Se SNG: abrir cápsula, diluir em água

Efeitos Adversos:
• Cefaleia
• Diarreia/constipação
• Náuseas
• Uso prolongado: ↓B12, ↓magnésio, ↑risco fratura

Interações:
• ↓absorção: cetoconazol, ferro
• ↑efeito: clopidogrel, varfarina

Cuidados:
• Uso máximo: 8 semanas (sem indicação)
• Desmame gradual
• Monitorar B12 se uso prolongado"#,
    ),
    (
        "captopril",
        r#"CAPTOPRIL:

Classe: IECA (Inibidor ECA)

Indicações:
• Hipertensão arterial
• Insuficiência cardíaca
• Pós-IAM
• Nefropatia diabética

Doses:
• Inicial: 12,5-25mg 2-3x/dia
• Manutenção: 25-50mg 2-3x/dia
• Máximo: 150mg/dia

Administração:
• 1h antes ou 2h após refeições
• Iniciar dose baixa
• Titular gradualmente

Efeitos Adversos:
• Tosse seca (10-20%)
• Hipotensão (1ª dose)
• Hipercalemia
• Angioedema (raro, grave)
• ↑creatinina

Contraindicações:
• Gravidez (teratogênico)
• Estenose renal bilateral
• Angioedema prévio
• Hipercalemia

Cuidados:
• Monitorar PA, K+, creatinina
• Cuidado em idosos
• Orientar sobre tosse
• Suspender se gravidez"#,
    ),
    (
        "losartana",
        r#"LOSARTANA:

Classe: BRA (Bloqueador receptor AT1)

Indicações:
• Hipertensão arterial
• ICC
• Nefropatia diabética
• Alternativa ao IECA (tosse)

Doses:
• Inicial: 25-50mg 1x/dia
• Manutenção: 50-100mg 1x/dia
• Máximo: 100mg/dia

Vantagens sobre IECA:
• Não causa tosse
• Melhor tolerado
• Mesma eficácia

Efeitos Adversos:
• Tontura
• Hipercalemia
• ↑creatinina
• Hipotensão

Contraindicações:
• Gravidez
• Estenose renal bilateral
• Hipercalemia

Cuidados:
• Monitorar PA, K+, creatinina
• Hidratação adequada
• Cuidado com diuréticos poupadores K+"#,
    ),
    (
        "furosemida",
        r#"FUROSEMIDA (Lasix):

Classe: Diurético de alça

Indicações:
• Edema (ICC, cirrose, renal)
• Hipertensão
• Edema agudo pulmão

Doses:
• VO: 20-80mg/dia
• EV: 20-40mg (bolus lento)
• Máximo: 600mg/dia

Administração EV:
• Bolus: 2-4 min (máx 4mg/min)
• Infusão contínua: 5-10mg/h

Efeitos Adversos:
• Hipocalemia (principal)
• Hiponatremia
• Hipomagnesemia
• Desidratação
• Ototoxicidade (dose alta)
• Hiperuricemia

Monitorização:
• Eletrólitos (K+, Na+, Mg++)
• Função renal
• Balanço hídrico
• Peso diário
• PA

Cuidados:
• Repor K+ se necessário
• Administrar pela manhã
• Monitorar diurese
• Cuidado em idosos"#,
    ),
    (
        "insulina",
        r#"INSULINA:

Tipos:

1. ULTRARRÁPIDA (Lispro, Aspart):
• Início: 5-15 min
• Pico: 1-2h
• Duração: 3-5h
• Uso: antes refeições

2. RÁPIDA (Regular):
• Início: 30 min
• Pico: 2-4h
• Duração: 6-8h
• Uso: 30 min antes refeição, EV

3. INTERMEDIÁRIA (NPH):
• Início: 1-2h
• Pico: 4-8h
• Duração: 12-18h
• Uso: basal

4. LENTA (Glargina, Detemir):
• Início: 1-2h
• Sem pico
• Duração: 24h
• Uso: basal

Vias:
• SC: abdome (mais rápida), coxa, braço
• EV: apenas regular
• Rodízio de locais

Doses:
• Individualizada
• Esquema basal-bolus comum

Hipoglicemia:
• Glicemia <70 mg/dL
• Sintomas: sudorese, tremor, confusão
• Tratamento: 15g carboidrato

Cuidados:
• Armazenar 2-8°C
• Após aberto: temperatura ambiente 28 dias
• Não agitar
• Verificar aspecto
• Técnica correta aplicação"#,
    ),
    (
        "heparina",
        r#"HEPARINA:

Tipos:

1. NÃO-FRACIONADA (HNF):
• Via: EV ou SC
• Monitorização: TTPa
• Reversão: protamina
• Uso: TEP, TVP, SCA

Dose EV:
• Ataque: 80 UI/kg bolus
• Manutenção: 18 UI/kg/h
• Ajustar por TTPa (1,5-2,5x controle)

2. BAIXO PESO MOLECULAR (Enoxaparina):
• Via: SC
• Não precisa monitorar
• Dose: 1mg/kg 12/12h ou 1,5mg/kg 1x/dia
• Melhor que HNF

Indicações:
• Trombose venosa profunda
• Embolia pulmonar
• Síndrome coronariana aguda
• Prevenção trombose
• Hemodiálise

Efeitos Adversos:
• Sangramento (principal)
• Trombocitopenia induzida (HIT)
• Osteoporose (uso prolongado)

Contraindicações:
• Sangramento ativo
• Trombocitopenia
• Cirurgia recente SNC

Cuidados:
• Monitorar plaquetas
• Observar sangramentos
• Não massagear local SC
• Protamina disponível"#,
    ),
    (
        "varfarina",
        r#"VARFARINA (Marevan):

Classe: Anticoagulante oral

Indicações:
• Fibrilação atrial
• Prótese valvar
• TVP/TEP (manutenção)
• Prevenção trombose

Dose:
• Inicial: 5mg/dia
• Ajustar por INR
• Individualizada

INR Alvo:
• FA, TVP: 2-3
• Prótese mecânica: 2,5-3,5

Monitorização:
• INR semanal (início)
• INR mensal (estável)

Efeitos Adversos:
• Sangramento
• Necrose cutânea (raro)
• Teratogênico

Interações (MUITAS!):
• ↑INR: antibióticos, amiodarona, omeprazol
• ↓INR: rifampicina, carbamazepina
• Alimentos: vitamina K (↓INR)

Reversão:
• INR alto sem sangramento: suspender
• Sangramento: vitamina K EV + plasma
• Emergência: concentrado protrombina

Cuidados:
• Dieta constante vitamina K
• Evitar IM
• Cartão anticoagulação
• Orientar sinais sangramento"#,
    ),
    (
        "adrenalina",
        r#"ADRENALINA (Epinefrina):

Indicações:
• PCR (1mg EV 3-5 min)
• Anafilaxia (0,3-0,5mg IM)
• Broncoespasmo grave
• Choque

Doses PCR:
• 1mg (1ml 1:1000) EV
• Repetir 3-5 min
• Infusão: 2-10 mcg/min

Doses Anafilaxia:
• 0,3-0,5mg IM (coxa)
• Repetir 5-15 min se necessário
• Criança: 0,01mg/kg

Apresentações:
• 1:1000 (1mg/ml) - IM, SC
• 1:10000 (0,1mg/ml) - EV

Efeitos:
• Taquicardia
• Hipertensão
• Tremor
• Ansiedade
• Arritmias

Cuidados:
• Verificar diluição
• Monitorar ECG, PA
• Acesso venoso calibroso
• Não misturar com bicarbonato"#,
    ),
    (
        "atropina",
        r#"ATROPINA:

Classe: Anticolinérgico

Indicações:
• Bradicardia sintomática
• Intoxicação organofosforados
• Pré-anestésico
• Antídoto colinérgicos

Doses:
• Bradicardia: 0,5mg EV (repetir até 3mg)
• Intoxicação: 2-5mg EV (repetir)
• Mínimo: 0,5mg (evitar bradicardia paradoxal)

Efeitos:
• Taquicardia
• Midríase
• Boca seca
• Retenção urinária
• Confusão (idosos)

Contraindicações:
• Glaucoma ângulo fechado
• Taquiarritmias
• Obstrução intestinal

Cuidados:
• Dose mínima 0,5mg
• Monitorar FC
• Cuidado em idosos
• Pode piorar taquicardia"#,
    ),
    (
        "morfina",
        r#"MORFINA:

Classe: Opioide forte

Indicações:
• Dor intensa
• IAM (dor + ansiedade)
• Edema agudo pulmão
• Dor oncológica

Doses:
• EV: 2-5mg (diluir, lento)
• SC: 5-10mg
• VO: 10-30mg 4/4h
• Titular conforme dor

Administração EV:
• Diluir em 10ml SF
• Infundir 2-5 min
• Repetir 5-15 min

Efeitos Adversos:
• Depressão respiratória
• Náuseas/vômitos
• Constipação
• Sonolência
• Prurido
• Hipotensão

Antídoto:
• Naloxona 0,4mg EV
• Repetir 2-3 min
• Duração curta (vigilância)

Contraindicações:
• Depressão respiratória
• Íleo paralítico
• Trauma craniano

Cuidados:
• Monitorar FR, SpO₂
• Naloxona disponível
• Laxante profilático
• Antiemético se necessário
• Controle especial (receita A)"#,
    ),
    (
        "amiodarona",
        r#"AMIODARONA:

Classe: Antiarrítmico classe III

Indicações:
• Fibrilação/flutter atrial
• Taquicardia ventricular
• PCR (FV/TV sem pulso)
• Prevenção arritmias

Doses:
• PCR: 300mg EV bolus (1ª dose)
• PCR: 150mg EV (2ª dose)
• Arritmia estável: 150mg EV 10 min
• Manutenção: 1mg/min 6h, depois 0,5mg/min
• VO: 200-400mg/dia

Administração:
• Diluir em SG 5%
• Acesso central (preferencial)
• Infusão lenta
• Proteger da luz

Efeitos Adversos:
• Bradicardia
• Hipotensão
• Flebite (periférico)
• Toxicidade pulmonar
• Disfunção tireóide
• Fotossensibilidade
• Depósitos corneanos

Interações:
• Potencializa: digoxina, varfarina
• Prolonga QT

Monitorização:
• ECG, PA
• TSH (6 meses)
• Raio-X tórax
• Função hepática

Cuidados:
• Acesso calibroso
• Monitorar PA
• Protetor solar
• Não suspender abruptamente"#,
    ),
];
