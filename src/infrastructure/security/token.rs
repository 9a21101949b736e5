// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedAccount, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Ed25519-signed biscuit tokens carrying an
/// `account(id, email)` fact plus issue/expiry dates.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

const ACCESS_TOKEN_CODE: &str = r#"
    account({aid}, {email});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

fn build_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("aid".to_string(), i64::from(subject.account_id).into());
    params.insert("email".to_string(), subject.email.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> Result<String, ApplicationError> {
    let token = Biscuit::builder()
        .code_with_params(ACCESS_TOKEN_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|ttl| ttl.num_seconds())
        .unwrap_or_else(|_| i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX))
        .max(0)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = ChronoDuration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let params = build_params(
            &subject,
            SystemTime::from(issued_at),
            SystemTime::from(expires_at),
        );
        let serialized = build_and_serialize_biscuit(params, self.root.as_ref())?;

        tracing::debug!(account_id = %subject.account_id, "issued access token");

        Ok(AuthTokenDto {
            token: serialized,
            issued_at,
            expires_at,
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAccount> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Enforces the expiry checks embedded in the token.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .policy("allow if true")
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        super::claims::parse_claims(facts)
    }
}
