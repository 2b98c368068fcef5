//! Speech response shapes and constructors
//!
//! An "ask" keeps the conversation open and carries a reprompt; a "tell"
//! ends it. Tells that carry real content also get a display card.

use serde::Serialize;

/// One turn's response body
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

/// Spoken output, plain or with speech markup
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "PlainText")]
    Plain { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// The spoken text regardless of markup kind
    pub fn as_str(&self) -> &str {
        match self {
            OutputSpeech::Plain { text } => text,
            OutputSpeech::Ssml { ssml } => ssml,
        }
    }
}

/// Companion-app display card
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Card {
    #[serde(rename = "Simple")]
    Simple { title: String, content: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl Response {
    /// Ask response: plain speech plus a plain reprompt, session stays open
    pub fn ask(speech: &str, reprompt: &str) -> Self {
        Self {
            output_speech: Some(OutputSpeech::Plain {
                text: speech.to_string(),
            }),
            card: None,
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::Plain {
                    text: reprompt.to_string(),
                },
            }),
            should_end_session: false,
        }
    }

    /// Ask response with marked-up speech and a plain reprompt
    pub fn ask_ssml(ssml: &str, reprompt: &str) -> Self {
        Self {
            output_speech: Some(OutputSpeech::Ssml {
                ssml: ssml.to_string(),
            }),
            card: None,
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::Plain {
                    text: reprompt.to_string(),
                },
            }),
            should_end_session: false,
        }
    }

    /// Tell response: plain speech, session ends
    pub fn tell(speech: &str) -> Self {
        Self {
            output_speech: Some(OutputSpeech::Plain {
                text: speech.to_string(),
            }),
            card: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Tell response with a display card whose content is the spoken text
    pub fn tell_with_card(speech: &str, card_title: &str) -> Self {
        Self {
            card: Some(Card::Simple {
                title: card_title.to_string(),
                content: speech.to_string(),
            }),
            ..Self::tell(speech)
        }
    }

    /// Spoken text, when any
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(|speech| speech.as_str())
    }

    /// Reprompt text, when any
    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt
            .as_ref()
            .map(|reprompt| reprompt.output_speech.as_str())
    }
}
