use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::auth::models::AuthResult;
use crate::auth::models::TokenGrant;
use crate::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    let result = state
        .auth_service
        .login(&body.username, &body.password, &peer.ip().to_string())
        .await?;

    match result {
        AuthResult::Granted(grant) => Ok(ApiSuccess::new(StatusCode::OK, grant.into())),
        AuthResult::Denied(reason) => Err(ApiError::Unauthorized(reason.message().to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPairData {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl From<TokenGrant> for TokenPairData {
    fn from(grant: TokenGrant) -> Self {
        Self {
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            expires_in: grant.expires_in,
        }
    }
}
