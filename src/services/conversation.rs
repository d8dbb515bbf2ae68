use std::sync::Arc;

use crate::errors::DialogueError;
use crate::models::{BookingRequest, ConversationState, Intent, TurnInput, TurnOutput};
use crate::services::booking;
use crate::services::catalog::Catalog;
use crate::services::intent::{classify, extract};
use crate::state::AppState;

const ASK_LOCATION: &str = "Please specify your location.";
const ASK_SPECIALTY: &str = "Please specify the specialty you're looking for.";
const ASK_SPECIALTY_NEXT: &str = "Now, what specialty are you looking for?";

/// Runs one turn: loads the session's state, advances the dialogue and
/// stores the next state. Only session store failures are errors.
pub async fn process_message(
    state: &Arc<AppState>,
    session_id: &str,
    message: &str,
) -> anyhow::Result<String> {
    let current = state.sessions.get(session_id).await?.unwrap_or_default();

    let output = handle(
        &state.catalog,
        TurnInput {
            text: message.to_string(),
            state: current.clone(),
        },
    );

    tracing::info!(
        session_id,
        from = current.as_str(),
        to = output.state.as_str(),
        "processed turn"
    );

    state.sessions.set(session_id, &output.state).await?;

    Ok(output.response)
}

/// Advances the dialogue by one turn. Pure apart from reading the catalog.
pub fn handle(catalog: &Catalog, input: TurnInput) -> TurnOutput {
    let TurnInput { text, state } = input;

    match state {
        ConversationState::Start => start(catalog, &text),

        // The reply is taken verbatim as the location.
        ConversationState::AwaitingLocation => TurnOutput {
            response: ASK_SPECIALTY_NEXT.to_string(),
            state: ConversationState::AwaitingSpecialty { location: text },
        },

        // The reply is taken verbatim as the specialty; the dialogue resets
        // whether or not anything matched.
        ConversationState::AwaitingSpecialty { location } => TurnOutput {
            response: respond(recommend(catalog, &location, &text)),
            state: ConversationState::Start,
        },
    }
}

fn start(catalog: &Catalog, text: &str) -> TurnOutput {
    let intent = classify(text);
    tracing::debug!(intent = intent.as_str(), "classified message");

    match intent {
        Intent::RecommendHospital => {
            let entities = extract(text, catalog);
            match (entities.location, entities.specialty) {
                (Some(location), Some(specialty)) => TurnOutput {
                    response: respond(recommend(catalog, &location, &specialty)),
                    state: ConversationState::Start,
                },
                (Some(location), None) => TurnOutput {
                    response: ASK_SPECIALTY.to_string(),
                    state: ConversationState::AwaitingSpecialty { location },
                },
                // A specialty without a location is dropped; it is asked for
                // again after the location.
                (None, _) => TurnOutput {
                    response: ASK_LOCATION.to_string(),
                    state: ConversationState::AwaitingLocation,
                },
            }
        }
        Intent::BookAppointment => TurnOutput {
            response: booking::book_request(&BookingRequest::placeholder()),
            state: ConversationState::Start,
        },
        Intent::Unknown => TurnOutput {
            response: respond(Err(DialogueError::UnknownIntent)),
            state: ConversationState::Start,
        },
    }
}

fn recommend(catalog: &Catalog, location: &str, specialty: &str) -> Result<String, DialogueError> {
    let hospitals = catalog.lookup(location, specialty)?;
    if hospitals.is_empty() {
        return Err(DialogueError::NoMatch {
            location: location.to_string(),
            specialty: specialty.to_string(),
        });
    }

    let listing = hospitals
        .iter()
        .map(|h| format!("{} ({}, {})", h.name, h.address, h.phone))
        .collect::<Vec<_>>()
        .join("; ");

    Ok(format!(
        "Here are some hospitals in {location} for {specialty}: {listing}"
    ))
}

fn respond(result: Result<String, DialogueError>) -> String {
    result.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "turn ended without a recommendation");
        e.user_message().to_string()
    })
}
