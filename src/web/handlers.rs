//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. As rotas do chat seguem o padrão
//! **HTMX fragment**; as rotas `/api/*` devolvem JSON.
//!
//! ## Padrão de Resposta
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página do chat (Maud) |
//! | `chat` | POST | HTMX fragment | Pergunta + resposta |
//! | `chat_history` | GET | JSON | Histórico da sessão do navegador |
//! | `reset_chat` | POST | HTMX fragment | Saudação após limpar |
//! | `resolve` | POST | JSON | Resposta + etapa do match |
//! | `topics` | GET | JSON | Tópicos, áreas e regras |
//! | `pharmacology` | GET | JSON | Monografia de medicamento |
//! | `status` | GET | JSON | Contagens e prontidão |
//!
//! As rotas `/`, `/chat*` identificam o navegador pelo cookie
//! `enfermagem_sessao` e criam um id novo quando ele falta ou é inválido.
//! Nenhum handler falha por causa do conteúdo da pergunta: o resolvedor é
//! total e texto vazio vira fragmento vazio.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use maud::html;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::state::{AppState, SESSION_COOKIE};
use super::templates;
use crate::chat::ChatMessage;
use crate::resolver::MatchStage;

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// Id da sessão do navegador. Sem cookie válido, gera um id novo e o
/// devolve no jar para ir no `Set-Cookie`.
fn client_session(jar: CookieJar) -> (CookieJar, Uuid) {
    let current = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
    if let Some(id) = current {
        return (jar, id);
    }

    let id = Uuid::new_v4();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), id)
}

/// GET `/` — Página principal do chat com o histórico do navegador.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, id) = client_session(jar);
    let page = state.sessions.with_session(id, |session| {
        templates::full_page(
            session.history(),
            state.resolver.knowledge_base().len(),
            state.resolver.rules().len(),
        )
    });
    (jar, markup_to_html(page))
}

/// Dados do formulário de chat (campo `message` do form HTML).
#[derive(Deserialize)]
pub struct ChatForm {
    pub message: String,
}

/// POST `/chat` — Responde a pergunta e devolve as duas bolhas.
///
/// ```text
/// 1. Lê o campo "message" do form
/// 2. Acha (ou cria) a sessão do cookie e chama ChatSession::ask()
/// 3. Renderiza pergunta + resposta
/// ```
///
/// Mensagem vazia devolve fragmento vazio e não altera o histórico.
pub async fn chat(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<ChatForm>,
) -> (CookieJar, Html<String>) {
    let (jar, id) = client_session(jar);
    let exchange = state.sessions.with_session(id, |session| session.ask(&form.message));

    let fragment = match exchange {
        Some(exchange) => {
            tracing::debug!(session = %id, stage = exchange.stage.name(), "Resposta enviada");
            templates::exchange_fragment(&exchange.question, &exchange.answer)
        }
        None => html! {},
    };
    (jar, markup_to_html(fragment))
}

/// GET `/chat/history` — Histórico da sessão em JSON.
pub async fn chat_history(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Vec<ChatMessage>>) {
    let (jar, id) = client_session(jar);
    let history: Vec<ChatMessage> = state
        .sessions
        .with_session(id, |session| session.history().cloned().collect());
    (jar, Json(history))
}

/// POST `/chat/reset` — Limpa a conversa e devolve a saudação.
pub async fn reset_chat(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, id) = client_session(jar);
    let fragment = state.sessions.with_session(id, |session| {
        session.reset();
        templates::history_fragment(session.history())
    });
    tracing::info!(session = %id, "Conversa reiniciada");
    (jar, markup_to_html(fragment))
}

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub question: String,
}

/// Corpo de `/api/resolve`.
#[derive(Serialize)]
pub struct ResolveResponse {
    pub answer: String,
    /// `override`, `keyword`, `synonym` ou `fallback`.
    pub stage: &'static str,
    /// Campos específicos da etapa (regra, chave, score, termo, área).
    pub detail: serde_json::Value,
}

fn stage_detail(stage: &MatchStage) -> serde_json::Value {
    match stage {
        MatchStage::Override { rule } => json!({ "rule": rule }),
        MatchStage::Keyword { key, score } => json!({ "key": key, "score": score }),
        MatchStage::Synonym { term, key } => json!({ "term": term, "key": key }),
        MatchStage::Fallback { context } => json!({ "context": context }),
    }
}

/// POST `/api/resolve` — Resolve sem tocar no histórico do chat.
pub async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Json<ResolveResponse> {
    let resolution = state.resolver.resolve_detailed(&request.question);
    Json(ResolveResponse {
        stage: resolution.stage.name(),
        detail: stage_detail(&resolution.stage),
        answer: resolution.answer,
    })
}

/// Área de contexto exposta em `/api/topics`.
#[derive(Serialize)]
pub struct CategoryInfo {
    pub category: String,
    pub label: String,
}

#[derive(Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
    pub categories: Vec<CategoryInfo>,
    pub rules: Vec<String>,
    pub synonyms: Vec<String>,
}

/// GET `/api/topics` — O que o resolvedor conhece.
pub async fn topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    let resolver = &state.resolver;
    Json(TopicsResponse {
        topics: resolver.knowledge_base().keys().map(str::to_string).collect(),
        categories: resolver
            .lexicon()
            .keywords
            .iter()
            .map(|k| CategoryInfo {
                category: k.category.clone(),
                label: k.label.clone(),
            })
            .collect(),
        rules: resolver.rules().iter().map(|r| r.name.clone()).collect(),
        synonyms: resolver.lexicon().synonyms.iter().map(|s| s.term.clone()).collect(),
    })
}

#[derive(Deserialize)]
pub struct PharmacologyQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct PharmacologyResponse {
    pub found: bool,
    pub generic: Option<String>,
    pub brand: Option<String>,
    pub answer: Option<String>,
}

/// GET `/api/farmacologia?q=` — Monografia completa do medicamento citado.
pub async fn pharmacology(
    State(state): State<AppState>,
    Query(query): Query<PharmacologyQuery>,
) -> Json<PharmacologyResponse> {
    Json(match state.formulary.lookup(&query.q) {
        Some(found) => PharmacologyResponse {
            found: true,
            generic: Some(found.generic),
            brand: found.brand,
            answer: Some(found.text),
        },
        None => PharmacologyResponse {
            found: false,
            generic: None,
            brand: None,
            answer: None,
        },
    })
}

/// Resposta do endpoint `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    /// Sempre `true`: todo o conteúdo é embutido e carregado antes do bind.
    pub ready: bool,
    pub topics: usize,
    pub rules: usize,
    /// Sessões de chat em memória (uma por navegador).
    pub sessions: usize,
}

/// GET `/status` — Contagens do conteúdo carregado.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: true,
        topics: state.resolver.knowledge_base().len(),
        rules: state.resolver.rules().len(),
        sessions: state.sessions.len(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::content::guides::FALLBACK_MENU;
    use crate::pharmacology::Formulary;
    use crate::resolver::FaqResolver;
    use crate::web::create_router;
    use crate::web::state::{AppState, SESSION_COOKIE};

    fn app() -> (Router, AppState) {
        let state = AppState::new(FaqResolver::builtin(), Formulary::builtin(), 50);
        (create_router(state.clone(), "assets"), state)
    }

    async fn body_string(res: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        serde_json::from_str(&body_string(res).await).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_cookie(mut req: Request<Body>, cookie: &str) -> Request<Body> {
        req.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());
        req
    }

    /// Par `nome=valor` do `Set-Cookie` da sessão.
    fn session_cookie(res: &axum::response::Response) -> String {
        let set_cookie = res
            .headers()
            .get(header::SET_COOKIE)
            .expect("set-cookie")
            .to_str()
            .unwrap();
        assert!(set_cookie.contains("HttpOnly"));
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn session_id(cookie: &str) -> Uuid {
        let value = cookie
            .strip_prefix(&format!("{SESSION_COOKIE}="))
            .expect("cookie da sessão");
        Uuid::parse_str(value).unwrap()
    }

    #[tokio::test]
    async fn index_renders_greeting() {
        let (app, state) = app();
        let res = app.oneshot(get("/")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        session_cookie(&res);
        let html = body_string(res).await;
        assert!(html.contains("Bem-vindo!"));
        assert!(html.contains("chat-form"));
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn chat_returns_both_bubbles_and_records_history() {
        let (app, state) = app();
        let res = app
            .oneshot(form_post("/chat", "message=o+que+%C3%A9+sepse"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let id = session_id(&session_cookie(&res));

        let html = body_string(res).await;
        assert!(html.contains("user-message"));
        assert!(html.contains("o que é sepse"));
        assert!(html.contains("qSOFA"));
        assert_eq!(state.sessions.with_session(id, |s| s.len()), 3);
    }

    #[tokio::test]
    async fn blank_chat_message_is_ignored() {
        let (app, state) = app();
        let res = app.oneshot(form_post("/chat", "message=++")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let id = session_id(&session_cookie(&res));
        assert!(body_string(res).await.is_empty());
        assert_eq!(state.sessions.with_session(id, |s| s.len()), 1);
    }

    #[tokio::test]
    async fn history_and_reset() {
        let (app, _) = app();
        let res = app
            .clone()
            .oneshot(form_post("/chat", "message=rcp"))
            .await
            .unwrap();
        let cookie = session_cookie(&res);

        let res = app
            .clone()
            .oneshot(with_cookie(get("/chat/history"), &cookie))
            .await
            .unwrap();
        assert!(res.headers().get(header::SET_COOKIE).is_none());
        let json = body_json(res).await;
        let messages = json.as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["text"], "rcp");
        assert_eq!(messages[2]["role"], "assistant");

        let res = app
            .clone()
            .oneshot(with_cookie(form_post("/chat/reset", ""), &cookie))
            .await
            .unwrap();
        assert!(body_string(res).await.contains("Bem-vindo!"));

        let res = app
            .oneshot(with_cookie(get("/chat/history"), &cookie))
            .await
            .unwrap();
        assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn each_browser_gets_its_own_history() {
        let (app, state) = app();
        let res = app
            .clone()
            .oneshot(form_post("/chat", "message=sepse"))
            .await
            .unwrap();
        let first = session_cookie(&res);

        // Outro navegador, sem cookie: só a saudação e um cookie diferente.
        let res = app.clone().oneshot(get("/chat/history")).await.unwrap();
        let second = session_cookie(&res);
        assert_ne!(first, second);
        let json = body_json(res).await;
        assert_eq!(json.as_array().unwrap().len(), 1);

        let res = app
            .clone()
            .oneshot(with_cookie(get("/"), &second))
            .await
            .unwrap();
        assert!(!body_string(res).await.contains("qSOFA"));

        let res = app
            .oneshot(with_cookie(get("/chat/history"), &first))
            .await
            .unwrap();
        assert_eq!(body_json(res).await.as_array().unwrap().len(), 3);
        assert_eq!(state.sessions.len(), 2);
    }

    #[tokio::test]
    async fn invalid_session_cookie_gets_replaced() {
        let (app, _) = app();
        let stale = format!("{SESSION_COOKIE}=nao-e-um-uuid");
        let res = app
            .oneshot(with_cookie(get("/chat/history"), &stale))
            .await
            .unwrap();
        let fresh = session_cookie(&res);
        session_id(&fresh);
        assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn api_resolve_reports_stage() {
        let (app, state) = app();
        let req = Request::builder()
            .method("POST")
            .uri("/api/resolve")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "question": "qual a diferença entre icc e iam" }).to_string(),
            ))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(header::SET_COOKIE).is_none());

        let json = body_json(res).await;
        assert_eq!(json["stage"], "override");
        assert_eq!(json["detail"]["rule"], "diferenca-icc-iam");
        assert!(json["answer"].as_str().unwrap().contains("ICC"));
        assert_eq!(state.sessions.len(), 0);
    }

    #[tokio::test]
    async fn api_resolve_falls_back_to_menu() {
        let (app, _) = app();
        let req = Request::builder()
            .method("POST")
            .uri("/api/resolve")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "xyzzy"}"#))
            .unwrap();
        let json = body_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["stage"], "fallback");
        assert_eq!(json["answer"], FALLBACK_MENU);
        assert!(json["detail"]["context"].is_null());
    }

    #[tokio::test]
    async fn topics_lists_content() {
        let (app, _) = app();
        let json = body_json(app.oneshot(get("/api/topics")).await.unwrap()).await;
        assert_eq!(json["topics"][0], "pressão arterial");
        assert_eq!(json["topics"].as_array().unwrap().len(), 46);
        assert_eq!(json["categories"][0]["category"], "anatomia");
        assert_eq!(json["rules"][0], "diferenca-icc-iam");
    }

    #[tokio::test]
    async fn pharmacology_lookup() {
        let (app, _) = app();
        let json = body_json(
            app.clone()
                .oneshot(get("/api/farmacologia?q=ficha%20do%20amoxil"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["found"], true);
        assert_eq!(json["generic"], "amoxicilina");
        assert_eq!(json["brand"], "amoxil");

        let json = body_json(app.oneshot(get("/api/farmacologia?q=xyzzy")).await.unwrap()).await;
        assert_eq!(json["found"], false);
        assert!(json["answer"].is_null());
    }

    #[tokio::test]
    async fn status_reports_counts() {
        let (app, _) = app();
        let json = body_json(app.oneshot(get("/status")).await.unwrap()).await;
        assert_eq!(json["ready"], true);
        assert_eq!(json["topics"], 46);
        assert_eq!(json["rules"], 11);
        assert_eq!(json["sessions"], 0);
    }
}
