//! Declarative intent dispatch table
//!
//! Routing is a pure function of the intent name so it can be tested in
//! isolation from the transport and the handlers.

/// Route selected for an incoming intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Single-turn lookup with the word in the first utterance
    Oneshot,
    /// Multi-turn lookup that may still need the word
    Dialog,
    /// List the languages the skill can look up
    Languages,
    /// The user wants to hear the stored examples
    Yes,
    /// Stop, cancel, or decline the examples
    Exit,
    /// Anything the skill does not recognize
    Unsupported,
}

/// Intent names recognized by the skill, matched exactly and case-sensitively
const ROUTES: &[(&str, Route)] = &[
    ("OneshotOxfordIntent", Route::Oneshot),
    ("DialogOxfordIntent", Route::Dialog),
    ("SupportedLanguagesIntent", Route::Languages),
    ("AMAZON.YesIntent", Route::Yes),
    ("AMAZON.StopIntent", Route::Exit),
    ("AMAZON.CancelIntent", Route::Exit),
    ("AMAZON.NoIntent", Route::Exit),
];

/// Map an intent name to its route, defaulting to [`Route::Unsupported`]
pub fn route(intent_name: &str) -> Route {
    ROUTES
        .iter()
        .find(|(name, _)| *name == intent_name)
        .map(|(_, route)| *route)
        .unwrap_or(Route::Unsupported)
}
