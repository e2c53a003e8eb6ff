//! Card collection state, filtering, and derived status.
//!
//! DESIGN
//! ======
//! The collection is server-authoritative: mutations never patch `items`
//! optimistically, they re-fetch. Filtering derives a view and leaves the
//! source untouched.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use chrono::{DateTime, Utc};

use crate::net::error::ApiError;
use crate::net::types::{Card, GenerateCardsRequest};

pub const MAX_GENERATE_COUNT: u32 = 100;

/// Generation form input, kept as entered. The last successfully submitted
/// values stay in place as the next defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateForm {
    pub duration_days: String,
    pub count: String,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            duration_days: "30".to_owned(),
            count: "1".to_owned(),
        }
    }
}

/// Shared card panel state.
#[derive(Clone, Debug, Default)]
pub struct CardsState {
    pub items: Vec<Card>,
    pub search: String,
    pub loading: bool,
    pub show_generate: bool,
    pub generate_pending: bool,
    /// Inline message inside the generate dialog.
    pub form_error: Option<String>,
    /// Card awaiting delete confirmation.
    pub delete_target: Option<Card>,
    pub form: GenerateForm,
}

impl CardsState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn close_generate(&mut self) {
        self.show_generate = false;
        self.generate_pending = false;
        self.form_error = None;
    }
}

/// Derived card status. The check order is authoritative: activation,
/// then expiry, then usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStatus {
    NotActivated,
    Expired,
    Used,
    Active,
}

impl CardStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotActivated => "not activated",
            Self::Expired => "expired",
            Self::Used => "used",
            Self::Active => "active",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::NotActivated => "bg-success",
            Self::Expired => "bg-danger",
            Self::Used => "bg-info",
            Self::Active => "bg-warning",
        }
    }
}

/// Derive a card's status at instant `now`.
pub fn card_status(card: &Card, now: DateTime<Utc>) -> CardStatus {
    if !card.is_activated {
        return CardStatus::NotActivated;
    }
    if card.expires_at.is_some_and(|expires| expires < now) {
        return CardStatus::Expired;
    }
    if card.used_by_identifier.is_some() {
        return CardStatus::Used;
    }
    CardStatus::Active
}

/// Case-insensitive substring filter over card number, creator username,
/// and status label. Pure: derives a view, never mutates `cards`.
pub fn filter_cards(cards: &[Card], query: &str, now: DateTime<Utc>) -> Vec<Card> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return cards.to_vec();
    }
    cards
        .iter()
        .filter(|card| {
            card.card_number.to_lowercase().contains(&query)
                || card
                    .created_by_username
                    .as_ref()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
                || card_status(card, now).label().contains(&query)
        })
        .cloned()
        .collect()
}

/// Validate generation input before anything is sent.
///
/// # Errors
///
/// `ApiError::Validation` when the count is outside [1, 100] or the
/// duration is not a positive whole number of days.
pub fn validate_generate(form: &GenerateForm) -> Result<GenerateCardsRequest, ApiError> {
    let count: u32 = form
        .count
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation("Count must be a whole number".to_owned()))?;
    if count < 1 || count > MAX_GENERATE_COUNT {
        return Err(ApiError::Validation(format!(
            "Count must be between 1 and {MAX_GENERATE_COUNT}"
        )));
    }
    let duration_days: u32 = form
        .duration_days
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation("Duration must be a whole number of days".to_owned()))?;
    if duration_days < 1 {
        return Err(ApiError::Validation(
            "Duration must be at least 1 day".to_owned(),
        ));
    }
    Ok(GenerateCardsRequest {
        duration_days,
        count,
    })
}
