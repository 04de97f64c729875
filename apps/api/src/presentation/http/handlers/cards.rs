use crate::domain::dashboard::cards::CardDeck;
use crate::presentation::http::state::AppState;
use axum::{Json, extract::State};

pub async fn list_cards(State(state): State<AppState>) -> Json<CardDeck> {
    Json(state.cards.as_ref().clone())
}
