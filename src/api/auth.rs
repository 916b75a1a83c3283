// src/api/auth.rs
use crate::api::{status_error, ApiClient};
use crate::error::ApiError;

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    token: String,
}

/// `POST /login`. Returns the bearer token to hand to a `CredentialStore`.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<String, ApiError> {
    let rsp = client
        .post("/login")
        .json(&LoginRequest { email, password })
        .send()
        .await?;
    if !rsp.status().is_success() {
        return Err(status_error(rsp).await);
    }
    let body: TokenResponse = rsp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.token)
}

/// `POST /register`. The server creates the account; sign-in is a separate
/// `login` call.
pub async fn register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let rsp = client
        .post("/register")
        .json(&RegisterRequest {
            username,
            email,
            password,
        })
        .send()
        .await?;
    if !rsp.status().is_success() {
        return Err(status_error(rsp).await);
    }
    Ok(())
}
