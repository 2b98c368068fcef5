//! Turn handling for the Oxford Word Look Up skill
//!
//! One envelope in, one envelope out. Every path produces a well-formed
//! response; lookup failures fail closed to a spoken apology.

use oxford_client::{OxfordClient, OxfordClientError, WordDetails};
use tracing::{error, info, warn};

use crate::{
    envelope::{Intent, Request, RequestEnvelope, ResponseEnvelope, SessionEnvelope, PROTOCOL_VERSION},
    response::Response,
    router::{route, Route},
    session::SessionAttributes,
    speech,
};

pub(crate) const CARD_TITLE: &str = "Oxford Word Look Up";

pub(crate) const WELCOME_SSML: &str =
    "<speak>Welcome to Oxford Word Look up. What word would you like information for?</speak>";
pub(crate) const WHAT_WORD_PROMPT: &str = "What word would you like information for?";
pub(crate) const WELCOME_REPROMPT: &str =
    "I can provide you information for any specific word. \
     You can simply open Oxford Word Look up and ask a question like, \
     what is the meaning of and say the word you are looking for. \
     For a list of supported languages, ask what languages are supported. \
     What word would you like information for?";

pub(crate) const TRY_AGAIN_PROMPT: &str = "Please try again by saying a word.";
pub(crate) const EXAMPLES_REPROMPT: &str =
    "I'm sorry, I didn't understand what you said. Would you like to hear some examples?";
pub(crate) const SERVICE_PROBLEM: &str =
    "Sorry, the Oxford service is experiencing a problem. Please try again later.";
pub(crate) const GOODBYE: &str = "Goodbye.";
pub(crate) const UNSUPPORTED: &str =
    "Sorry, this request is not supported by Oxford Word Look up. Please try again.";
pub(crate) const SUPPORTED_LANGUAGES: &str =
    "At the moment, I can only look up English words. What word would you like information for?";

/// The skill core: dispatches one turn and shapes its spoken response
pub struct Speechlet {
    /// Missing credentials leave this unset; lookups then fail closed
    oxford: Option<OxfordClient>,
}

impl Speechlet {
    pub fn new(oxford: Option<OxfordClient>) -> Self {
        Self { oxford }
    }

    /// Handle one request envelope
    pub async fn handle(&self, envelope: RequestEnvelope) -> ResponseEnvelope {
        let SessionEnvelope {
            new,
            session_id,
            attributes,
            ..
        } = envelope.session.unwrap_or_default();

        if new {
            info!("Session {} started", session_id);
        }

        let mut attrs = SessionAttributes::new(attributes);

        let response = match envelope.request {
            Request::Launch { request_id } => {
                info!("Launch request {} for session {}", request_id, session_id);
                Response::ask_ssml(WELCOME_SSML, WELCOME_REPROMPT)
            }
            Request::Intent { request_id, intent } => {
                info!(
                    "Intent request {} ({}) for session {}",
                    request_id, intent.name, session_id
                );
                self.on_intent(&intent, &mut attrs).await
            }
            Request::SessionEnded { request_id, reason } => {
                info!(
                    "Session {} ended by request {} (reason: {:?})",
                    session_id, request_id, reason
                );
                Response {
                    should_end_session: true,
                    ..Response::default()
                }
            }
        };

        ResponseEnvelope {
            version: PROTOCOL_VERSION.to_string(),
            session_attributes: attrs.into_inner(),
            response,
        }
    }

    async fn on_intent(&self, intent: &Intent, attrs: &mut SessionAttributes) -> Response {
        match route(&intent.name) {
            Route::Oneshot | Route::Dialog => self.handle_lookup(intent, attrs).await,
            Route::Languages => Response::ask(SUPPORTED_LANGUAGES, WHAT_WORD_PROMPT),
            Route::Yes => {
                Response::tell_with_card(&speech::render_examples(&attrs.examples()), CARD_TITLE)
            }
            Route::Exit => Response::tell(GOODBYE),
            Route::Unsupported => Response::ask(UNSUPPORTED, UNSUPPORTED),
        }
    }

    /// Look the word up and shape the spoken result
    ///
    /// A missing or blank `Word` slot prompts for clarification instead of
    /// erroring; this covers the dialog model's unfilled first turn.
    async fn handle_lookup(&self, intent: &Intent, attrs: &mut SessionAttributes) -> Response {
        let Some(word) = intent.slot_value("Word") else {
            return Response::ask(TRY_AGAIN_PROMPT, TRY_AGAIN_PROMPT);
        };

        let result = match &self.oxford {
            Some(client) => client.lookup(word).await,
            None => {
                warn!("Oxford credentials not configured; failing lookup closed");
                Err(OxfordClientError::NotConfigured)
            }
        };

        lookup_response(word, result, attrs)
    }
}

/// Shape the response for a completed (or failed) lookup
///
/// Failures collapse to the apology tell. Results with examples store them
/// in the session and keep the conversation open for the yes/no turn.
pub(crate) fn lookup_response(
    word: &str,
    result: Result<WordDetails, OxfordClientError>,
    attrs: &mut SessionAttributes,
) -> Response {
    let details = match result {
        Ok(details) => details,
        Err(err) => {
            error!("Oxford lookup for '{}' failed: {}", word, err);
            return Response::tell(SERVICE_PROBLEM);
        }
    };

    let speech = speech::lookup_speech(word, &details);

    if details.examples.is_empty() {
        Response::tell_with_card(&speech, CARD_TITLE)
    } else {
        attrs.set_examples(&details.examples);
        Response::ask(&speech, EXAMPLES_REPROMPT)
    }
}
