use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use futures_util::{SinkExt, StreamExt};

use crate::debounce::Debouncer;
use crate::error::ApiError;
use crate::routes;
use crate::session::{InputAction, SessionState, SwapOutcome, View};
use crate::state::AppState;
use crate::translate::interface::{TranslationRequest, TranslationResponse};

/// Quiet period before a pending text change is sent for translation.
const QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Inline error shown in place of a result. The cause stays in the
/// server logs.
const INLINE_ERROR: &str = "Translation error occurred";

type WsSender = futures_util::stream::SplitSink<WebSocket, Message>;

/// Progress reports from dispatched translation tasks, tagged with the
/// request's sequence number.
enum SessionEvent {
    Dispatched(u64),
    Finished(u64, Result<TranslationResponse, ApiError>),
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New live session: {}", client_uid);

    let (mut sender, mut receiver) = socket.split();

    let mut session = SessionState::new("auto", "es");
    let mut debouncer = Debouncer::new(QUIET_PERIOD);
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<SessionEvent>();

    if send_snapshot(&mut sender, &session).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Err(e) = handle_message(
                            &state,
                            &text,
                            &mut session,
                            &mut debouncer,
                            &events_tx,
                            &mut sender,
                        )
                        .await
                        {
                            error!("Error handling live message: {}", e);
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Live session {} closed", client_uid);
                        break;
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
            Some(event) = events_rx.recv() => {
                let applied = match event {
                    SessionEvent::Dispatched(seq) => session.request_dispatched(seq),
                    SessionEvent::Finished(seq, Ok(response)) => {
                        session.translation_resolved(seq, response)
                    }
                    SessionEvent::Finished(seq, Err(cause)) => {
                        error!("Live translation error: {:#}", anyhow::Error::new(cause));
                        session.translation_failed(seq, INLINE_ERROR)
                    }
                };
                // Superseded requests are dropped without touching the view.
                if applied {
                    if send_snapshot(&mut sender, &session).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    debouncer.cancel();
    info!("Cleaned up live session {}", client_uid);
}

async fn handle_message(
    state: &AppState,
    text: &str,
    session: &mut SessionState,
    debouncer: &mut Debouncer,
    events: &mpsc::UnboundedSender<SessionEvent>,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());

    match msg_type {
        Some("text-input") => {
            let input = msg.get("text").and_then(|v| v.as_str()).unwrap_or("");
            match session.text_changed(input) {
                InputAction::Schedule => {
                    let seq = session.schedule_request();
                    debouncer.schedule(translation_task(state, session, seq, events));
                    send_snapshot(sender, session).await?;
                }
                InputAction::Clear => {
                    debouncer.cancel();
                    send_snapshot(sender, session).await?;
                }
                InputAction::Reject => {}
            }
        }
        Some("set-languages") => {
            let source = msg
                .get("sourceLanguage")
                .and_then(|v| v.as_str())
                .unwrap_or("auto");
            let target = msg
                .get("targetLanguage")
                .and_then(|v| v.as_str())
                .unwrap_or("en");
            session.set_languages(source, target);
            retranslate_now(state, session, debouncer, events, sender).await?;
        }
        Some("swap-languages") => match session.swap_languages() {
            SwapOutcome::Retranslate => {
                retranslate_now(state, session, debouncer, events, sender).await?;
            }
            SwapOutcome::Swapped => {
                send_snapshot(sender, session).await?;
            }
            SwapOutcome::Ignored => {}
        },
        _ => {
            warn!("Unknown live message type: {:?}", msg_type);
        }
    }

    Ok(())
}

/// Translate the current text immediately, bypassing the debounce.
/// Used when the language pair changes under existing text.
async fn retranslate_now(
    state: &AppState,
    session: &mut SessionState,
    debouncer: &mut Debouncer,
    events: &mpsc::UnboundedSender<SessionEvent>,
    sender: &mut WsSender,
) -> anyhow::Result<()> {
    debouncer.cancel();
    if !session.source_text().is_empty() {
        let seq = session.schedule_request();
        tokio::spawn(translation_task(state, session, seq, events));
    }
    send_snapshot(sender, session).await?;
    Ok(())
}

/// Build the deferred request from the session's current inputs. The
/// session itself stays on the connection task; only owned data crosses
/// into the spawned future.
fn translation_task(
    state: &AppState,
    session: &SessionState,
    seq: u64,
    events: &mpsc::UnboundedSender<SessionEvent>,
) -> impl std::future::Future<Output = ()> + Send + 'static {
    let request = TranslationRequest {
        text: Some(session.source_text().to_string()),
        source_language: session.source_language().to_string(),
        target_language: Some(session.target_language().to_string()),
    };
    let state = state.clone();
    let events = events.clone();

    async move {
        let _ = events.send(SessionEvent::Dispatched(seq));
        let outcome = routes::translate(&state, &request).await;
        let _ = events.send(SessionEvent::Finished(seq, outcome));
    }
}

async fn send_snapshot(sender: &mut WsSender, session: &SessionState) -> anyhow::Result<()> {
    let snapshot = json!({
        "type": "state",
        "view": view_name(session.view()),
        "translatedText": session.translated_text(),
        "detectedLanguage": session.detected_language(),
        "error": session.error(),
        "charCount": session.char_count(),
        "sourceText": session.source_text(),
        "sourceLanguage": session.source_language(),
        "targetLanguage": session.target_language(),
    });
    sender.send(Message::Text(snapshot.to_string())).await?;
    Ok(())
}

fn view_name(view: View) -> &'static str {
    match view {
        View::Placeholder => "placeholder",
        View::Loading => "loading",
        View::Result => "result",
        View::Error => "error",
    }
}
