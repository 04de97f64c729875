//! Optional on-disk overrides for the risk table and card deck.
//!
//! Both fall back to the built-in defaults when no path is configured. A
//! configured path that cannot be read or parsed is a startup error.

use crate::domain::{dashboard::cards::CardDeck, risk::classifier::RiskTable};
use anyhow::Context;
use std::path::Path;

pub async fn load_risk_table(path: Option<&Path>) -> anyhow::Result<RiskTable> {
    let Some(path) = path else {
        return Ok(RiskTable::default());
    };

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read risk table {}", path.display()))?;
    let table = RiskTable::from_json(&text)?;
    tracing::info!(
        path = %path.display(),
        high = table.high().len(),
        medium = table.medium().len(),
        "risk table loaded"
    );
    Ok(table)
}

pub async fn load_card_deck(path: Option<&Path>) -> anyhow::Result<CardDeck> {
    let Some(path) = path else {
        return Ok(CardDeck::default());
    };

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read card deck {}", path.display()))?;
    let deck = CardDeck::from_json(&text)?;
    tracing::info!(path = %path.display(), cards = deck.cards.len(), "card deck loaded");
    Ok(deck)
}
