//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML gerados com o macro [`maud`](https://maud.lambda.xyz/),
//! compilados junto com o código Rust.
//!
//! ## HTMX + Maud
//!
//! O servidor devolve **fragmentos HTML** e o HTMX os injeta no DOM:
//! - `POST /chat` → duas bolhas (pergunta + resposta) em `#chat-messages`
//! - `POST /chat/reset` → substitui `#chat-messages` pela saudação
//!
//! ## Templates Disponíveis
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Histórico + perguntas rápidas + formulário |
//! | [`message_bubble()`] | Fragment HTMX | Uma mensagem do chat |
//! | [`exchange_fragment()`] | Fragment HTMX | Pergunta + resposta |
//! | [`history_fragment()`] | Fragment HTMX | Histórico inteiro |
//! | [`render_answer()`] | Markup | Texto da resposta com negrito e quebras |
//!
//! ## Layout Principal (`full_page`)
//!
//! ```text
//! ┌──────────────── nav-bar ────────────────────┐
//! │ 🩺 Enfermagem │ 46 tópicos │ 11 regras     │
//! ├─────────────────────────────────────────────┤
//! │  Chat Messages                              │
//! │   ┌──────────────┐                          │
//! │   │ Saudação     │                          │
//! │   └──────────────┘        ┌──────────────┐  │
//! │                           │ Pergunta     │  │
//! │   ┌──────────────┐        └──────────────┘  │
//! │   │ Resposta     │                          │
//! │   └──────────────┘                          │
//! ├─────────────────────────────────────────────┤
//! │ [Sepse] [ICC × IAM] [Febre] [Insulina] ...  │
//! │ [🗑 Limpar] [___________________] [Enviar]  │
//! └─────────────────────────────────────────────┘
//! ```

use std::sync::OnceLock;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use regex::Regex;

use crate::chat::ChatMessage;

/// Perguntas sugeridas exibidas como botões acima do campo de texto.
pub const QUICK_QUESTIONS: &[(&str, &str)] = &[
    ("🦠 Sepse", "O que é sepse?"),
    ("❤️ ICC × IAM", "Qual a diferença entre ICC e IAM?"),
    ("💧 Gotejamento", "Como calcular gotejamento?"),
    ("🌡️ Febre", "Que remédio para febre?"),
    ("💉 Insulina", "Como funciona a insulina?"),
    ("🫀 RCP", "Como fazer RCP?"),
];

/// Página principal do chat.
///
/// `history` é renderizado na ordem recebida; `topics` e `rules` aparecem
/// no cabeçalho.
pub fn full_page<'a>(
    history: impl IntoIterator<Item = &'a ChatMessage>,
    topics: usize,
    rules: usize,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Enfermagem — Tira-dúvidas" }
                link rel="stylesheet" href="/assets/style.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body {
                div class="app-shell" {
                    nav class="nav-bar" {
                        a href="/" class="nav-brand" {
                            span class="nav-brand-icon" { "🩺" }
                            span class="nav-brand-text" { "Enfermagem " em { "Tira-dúvidas" } }
                        }
                        div class="nav-status" {
                            span class="nav-status-dot" {}
                            span { (topics) " tópicos · " (rules) " regras" }
                        }
                    }

                    div class="chat-panel" {
                        div id="chat-messages" class="chat-messages" {
                            (history_fragment(history))
                        }

                        div class="chat-input-area" {
                            div class="quick-questions" {
                                @for (label, question) in QUICK_QUESTIONS {
                                    button class="quick-q"
                                        hx-post="/chat"
                                        hx-vals=(format!(r#"{{"message": "{}"}}"#, question))
                                        hx-target="#chat-messages"
                                        hx-swap="beforeend" {
                                        (label)
                                    }
                                }
                            }

                            div class="chat-controls" {
                                button class="reset-btn"
                                    hx-post="/chat/reset"
                                    hx-target="#chat-messages"
                                    hx-swap="innerHTML"
                                    hx-confirm="Limpar toda a conversa?" {
                                    "🗑 Limpar"
                                }

                                form id="chat-form"
                                    hx-post="/chat"
                                    hx-target="#chat-messages"
                                    hx-swap="beforeend" {
                                    input type="text" name="message"
                                        placeholder="Pergunte sobre enfermagem..."
                                        autocomplete="off"
                                        autofocus;
                                    button type="submit" { "Enviar" }
                                }
                            }
                        }
                    }
                }

                (PreEscaped(r#"<script>
document.addEventListener('DOMContentLoaded', function() {
  var msgs = document.getElementById('chat-messages');
  if (msgs) {
    var observer = new MutationObserver(function() {
      msgs.scrollTop = msgs.scrollHeight;
    });
    observer.observe(msgs, { childList: true, subtree: true });
    msgs.scrollTop = msgs.scrollHeight;
  }
});

document.body.addEventListener('htmx:afterRequest', function(e) {
  if (e.target && e.target.id === 'chat-form') e.target.reset();
});
</script>"#))
            }
        }
    }
}

/// Uma bolha de mensagem.
pub fn message_bubble(message: &ChatMessage) -> Markup {
    let (class, label) = if message.is_user() {
        ("message user-message", "Você")
    } else {
        ("message assistant-message", "Assistente")
    };

    html! {
        div class=(class) id=(format!("msg-{}", message.id)) {
            div class="message-role" { (label) }
            div class="message-content" { (render_answer(&message.text)) }
            div class="message-time" { (message.timestamp.format("%H:%M")) }
        }
    }
}

/// Pergunta + resposta, anexadas ao fim do chat.
pub fn exchange_fragment(question: &ChatMessage, answer: &ChatMessage) -> Markup {
    html! {
        (message_bubble(question))
        (message_bubble(answer))
    }
}

/// Todas as mensagens, em ordem.
pub fn history_fragment<'a>(history: impl IntoIterator<Item = &'a ChatMessage>) -> Markup {
    html! {
        @for message in history {
            (message_bubble(message))
        }
    }
}

/// Converte o texto de uma resposta em HTML seguro.
///
/// ```text
/// 1. \n → <br>
/// 2. **trecho** → <strong>trecho</strong>
/// 3. todo o resto passa pelo escape do maud
/// ```
pub fn render_answer(text: &str) -> Markup {
    html! {
        @for (i, line) in text.split('\n').enumerate() {
            @if i > 0 { br; }
            @for (plain, emphasis) in bold_spans(line) {
                (plain)
                @if let Some(emphasis) = emphasis {
                    strong { (emphasis) }
                }
            }
        }
    }
}

/// Divide uma linha em pares (texto comum, trecho em negrito seguinte).
fn bold_spans(line: &str) -> Vec<(&str, Option<&str>)> {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    let bold = BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("regex de negrito"));

    let mut spans = Vec::new();
    let mut last = 0;
    for caps in bold.captures_iter(line) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            spans.push((&line[last..whole.start()], Some(inner.as_str())));
            last = whole.end();
        }
    }
    spans.push((&line[last..], None));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatSession;
    use crate::resolver::FaqResolver;
    use std::sync::Arc;

    #[test]
    fn render_answer_escapes_then_formats() {
        let html = render_answer("**Dose:** 1g <IV>\n& repetir").into_string();
        assert_eq!(html, "<strong>Dose:</strong> 1g &lt;IV&gt;<br>&amp; repetir");
    }

    #[test]
    fn bold_text_is_escaped_too() {
        let html = render_answer("**<b>&</b>** \"ok\"").into_string();
        assert_eq!(html, "<strong>&lt;b&gt;&amp;&lt;/b&gt;</strong> &quot;ok&quot;");
    }

    #[test]
    fn blank_lines_keep_their_breaks() {
        assert_eq!(render_answer("a\n\nb").into_string(), "a<br><br>b");
    }

    #[test]
    fn unmatched_asterisks_are_kept() {
        assert_eq!(render_answer("a ** b").into_string(), "a ** b");
    }

    #[test]
    fn bold_does_not_cross_pairs() {
        let html = render_answer("**a** e **b**").into_string();
        assert_eq!(html, "<strong>a</strong> e <strong>b</strong>");
    }

    #[test]
    fn full_page_lists_history_and_quick_questions() {
        let mut session = ChatSession::new(Arc::new(FaqResolver::builtin()), 50);
        session.ask("o que é <script>");
        let page = full_page(session.history(), 46, 11).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Bem-vindo!"));
        assert!(page.contains("o que é &lt;script&gt;"));
        assert!(page.contains("46 tópicos"));
        assert!(page.contains("class=\"quick-q\""));
    }

    #[test]
    fn bubbles_are_tagged_by_role() {
        let mut session = ChatSession::new(Arc::new(FaqResolver::builtin()), 50);
        let exchange = session.ask("rcp").unwrap();
        let html = exchange_fragment(&exchange.question, &exchange.answer).into_string();

        assert!(html.contains("user-message"));
        assert!(html.contains("assistant-message"));
        assert!(html.find("user-message") < html.find("assistant-message"));
    }
}
