//! Honeymoon fund payment handlers.
//!
//! Card payments go through the configured provider: the server creates an
//! intent, the browser confirms the card with the provider, and the server
//! re-reads the intent to settle the contribution. UPI transfers happen
//! outside the system entirely and are recorded on the guest's word.

use crate::{
    ApiError, ApiResult, AppState, ConfirmPaymentRequest, ConfirmPaymentResponse,
    ContributionListResponse, ContributionRequest, ContributionTotalResponse,
    CreateIntentResponse, SessionId, UpiContributionResponse, resolve_wedding, session_user,
};
use crate::payment::NewPaymentIntent;

use wc_core::{
    Contribution, ContentValidator, PaymentMethod, PaymentStatus, from_minor_units, generate_upi_reference,
    is_valid_upi_reference, to_minor_units, validate_amount, validate_currency,
    validation::content_validator::{MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH},
};
use wc_db::ContributionRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /api/payment/create-intent
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(req): Json<ContributionRequest>,
) -> ApiResult<Json<CreateIntentResponse>> {
    let provider = state
        .payment_provider
        .clone()
        .ok_or_else(|| ApiError::PaymentUnavailable {
            message: "Card payments are not configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let currency = validate_contribution(&state, &req)?;
    let wedding = resolve_wedding(&state.pool, &req.wedding_id).await?;

    let intent = provider
        .create_intent(&NewPaymentIntent {
            amount_minor: to_minor_units(req.amount),
            currency: currency.clone(),
            metadata: vec![
                (String::from("wedding_id"), wedding.id.to_string()),
                (String::from("contributor_name"), req.contributor_name.clone()),
                (String::from("contributor_email"), req.contributor_email.clone()),
                (String::from("contributor_phone"), req.contributor_phone.clone()),
                (String::from("message"), req.message.clone()),
            ],
        })
        .await?;

    let mut contribution = Contribution::pending_card(
        wedding.id,
        req.contributor_name,
        req.amount,
        currency,
        intent.id.clone(),
    );
    contribution.contributor_email = req.contributor_email;
    contribution.contributor_phone = req.contributor_phone;
    contribution.message = req.message;

    ContributionRepository::new(state.pool.clone())
        .create(&contribution)
        .await?;

    log::info!(
        "Card contribution {} pending on intent {} ({} {})",
        contribution.id,
        intent.id,
        contribution.amount,
        contribution.currency
    );

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
        contribution_id: contribution.id.to_string(),
    }))
}

/// POST /api/payment/confirm
///
/// Settles the contribution from the provider's view of the intent:
/// `succeeded` completes it, anything else fails it.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Json(req): Json<ConfirmPaymentRequest>,
) -> ApiResult<Json<ConfirmPaymentResponse>> {
    let provider = state
        .payment_provider
        .clone()
        .ok_or_else(|| ApiError::PaymentUnavailable {
            message: "Card payments are not configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = ContributionRepository::new(state.pool.clone());
    let contribution = repo
        .find_card_by_intent(&req.payment_intent_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment contribution not found"))?;

    let intent = provider.retrieve_intent(&req.payment_intent_id).await?;
    let status = PaymentStatus::from_provider_status(&intent.status);

    repo.update_status(contribution.id, status, Utc::now())
        .await?;

    log::info!(
        "Contribution {} settled as {} (provider status '{}')",
        contribution.id,
        status,
        intent.status
    );

    Ok(Json(ConfirmPaymentResponse {
        success: true,
        payment_status: intent.status,
        amount_received: from_minor_units(intent.amount_received),
    }))
}

/// POST /api/payment/upi-contribution
///
/// Recorded as completed without verification. The reference is an
/// idempotency key per wedding: resubmitting it returns the original record.
/// A reference already held by a card contribution is a 409.
pub async fn create_upi_contribution(
    State(state): State<AppState>,
    Json(req): Json<ContributionRequest>,
) -> ApiResult<Json<UpiContributionResponse>> {
    let currency = validate_contribution(&state, &req)?;
    let wedding = resolve_wedding(&state.pool, &req.wedding_id).await?;

    let reference = req
        .upi_reference
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(generate_upi_reference);
    if !is_valid_upi_reference(&reference) {
        log::warn!("Non-standard UPI reference '{}' accepted", reference);
    }

    let repo = ContributionRepository::new(state.pool.clone());
    if let Some(existing) = repo.find_by_reference(wedding.id, &reference).await? {
        log::info!("UPI reference {} already recorded as {}", reference, existing.id);
        return upi_replay(&existing).map(Json);
    }

    let mut contribution = Contribution::reported_upi(
        wedding.id,
        req.contributor_name,
        req.amount,
        currency,
        reference,
    );
    contribution.contributor_email = req.contributor_email;
    contribution.contributor_phone = req.contributor_phone;
    contribution.message = req.message;

    match repo.create(&contribution).await {
        Ok(()) => {}
        Err(e) if e.is_unique_violation() => {
            // A concurrent submission of the same reference won
            let existing = repo
                .find_by_reference(wedding.id, &contribution.provider_reference)
                .await?
                .ok_or_else(|| ApiError::Internal {
                    message: "UPI contribution vanished after conflict".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            return upi_replay(&existing).map(Json);
        }
        Err(e) => return Err(e.into()),
    }

    log::info!(
        "UPI contribution {} recorded for wedding {} ({} {}, ref {})",
        contribution.id,
        wedding.id,
        contribution.amount,
        contribution.currency,
        contribution.provider_reference
    );

    Ok(Json(upi_recorded(&contribution)))
}

/// GET /api/payment/contributions/{wedding_id}?session_id= - owner only
pub async fn list_contributions(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(wedding_id): Path<String>,
) -> ApiResult<Json<ContributionListResponse>> {
    let user = session_user(&state.pool, session_id.as_deref()).await?;

    let wedding = match resolve_wedding(&state.pool, &wedding_id).await {
        Ok(wedding) if wedding.user_id == user.id => wedding,
        Ok(_) | Err(ApiError::NotFound { .. }) => {
            return Err(ApiError::Forbidden {
                message: "Not authorized to view these contributions".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e),
    };

    let repo = ContributionRepository::new(state.pool.clone());
    let contributions = repo.find_completed(wedding.id).await?;
    let summary = repo.summarize_completed(wedding.id).await?;

    Ok(Json(ContributionListResponse {
        contributions,
        total_amount: summary.total_amount,
        currency: summary.currency,
        count: summary.count,
    }))
}

/// GET /api/payment/total/{wedding_id} - public
pub async fn get_contribution_total(
    State(state): State<AppState>,
    Path(wedding_id): Path<String>,
) -> ApiResult<Json<ContributionTotalResponse>> {
    let wedding = resolve_wedding(&state.pool, &wedding_id).await?;
    let summary = ContributionRepository::new(state.pool.clone())
        .summarize_completed(wedding.id)
        .await?;

    Ok(Json(summary.into()))
}

/// Validate guest input and settle the currency
fn validate_contribution(state: &AppState, req: &ContributionRequest) -> ApiResult<String> {
    ContentValidator::validate_required(&req.contributor_name, "contributor_name", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(&req.contributor_email, "contributor_email", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(&req.contributor_phone, "contributor_phone", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(&req.message, "message", MAX_MESSAGE_LENGTH)?;
    validate_amount(req.amount)?;

    let currency = req
        .currency
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_else(|| state.settings.default_currency.clone());
    validate_currency(&currency)?;

    Ok(currency)
}

/// Replay a previously recorded UPI submission. Card contributions share the
/// reference column, so a UPI claim on a card intent ID is refused.
fn upi_replay(existing: &Contribution) -> ApiResult<UpiContributionResponse> {
    if existing.payment_method != PaymentMethod::Upi {
        return Err(ApiError::conflict("Reference already belongs to a card payment"));
    }
    Ok(upi_recorded(existing))
}

fn upi_recorded(contribution: &Contribution) -> UpiContributionResponse {
    UpiContributionResponse {
        success: true,
        contribution_id: contribution.id.to_string(),
        message: "UPI contribution recorded successfully".to_string(),
    }
}
