use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::login::TokenPairData;
use super::ApiError;
use super::ApiSuccess;
use crate::auth::models::AuthResult;
use crate::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn refresh(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(body): Json<RefreshRequestBody>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    let result = state
        .auth_service
        .refresh(&body.refresh_token, &peer.ip().to_string())
        .await?;

    match result {
        AuthResult::Granted(grant) => Ok(ApiSuccess::new(StatusCode::OK, grant.into())),
        AuthResult::Denied(reason) => Err(ApiError::Unauthorized(reason.message().to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshRequestBody {
    pub refresh_token: String,
}
