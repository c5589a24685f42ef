//! Axum route handlers for the Distribution API.

use std::collections::{BTreeMap, HashMap};

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::distribution::channels::{Channel, ChannelPolicy};
use crate::distribution::generator::{generate, PromptResult};
use crate::distribution::voice::VoiceKit;
use crate::errors::AppError;
use crate::models::content::{AffiliateLinks, Locale, LocaleContent};
use crate::models::settings::GlobalSettings;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub global: GlobalSettings,
    #[serde(default)]
    pub locales: HashMap<Locale, LocaleContent>,
    #[serde(default)]
    pub affiliate_links: AffiliateLinks,
    /// Channel display names; validated against the registry before generation.
    pub channels: Vec<String>,
    #[serde(default)]
    pub voice_profiles: VoiceKit,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub bundles: BTreeMap<Channel, String>,
    pub results: Vec<PromptResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/distribution/channels
///
/// Returns the static channel registry so operator UIs can render pickers
/// without duplicating the policy table.
pub async fn handle_list_channels() -> Json<Vec<&'static ChannelPolicy>> {
    Json(Channel::ALL.iter().map(|channel| channel.policy()).collect())
}

/// POST /api/v1/distribution/generate
///
/// Runs one generation pass over channels × locales × variants and returns
/// the channel-keyed bundle map plus the flat result list.
pub async fn handle_generate(
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.channels.is_empty() {
        return Err(AppError::Validation(
            "channels cannot be empty".to_string(),
        ));
    }

    let channels = request
        .channels
        .iter()
        .map(|name| name.parse::<Channel>())
        .collect::<Result<Vec<Channel>, AppError>>()?;

    let output = generate(
        &request.global,
        &request.locales,
        &request.affiliate_links,
        &channels,
        &request.voice_profiles,
    );

    if output.is_empty() {
        return Err(AppError::EmptyGeneration);
    }

    let generation_id = Uuid::new_v4();
    info!(
        "Generation {} produced {} prompts across {} channel bundles",
        generation_id,
        output.results.len(),
        output.bundles.len()
    );

    Ok(Json(GenerateResponse {
        generation_id,
        generated_at: Utc::now(),
        bundles: output.bundles,
        results: output.results,
    }))
}
