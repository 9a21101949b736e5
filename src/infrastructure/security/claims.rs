// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedAccount,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::account::{AccountEmail, AccountId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedAccount> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_account(ctx)
}

fn build_authenticated_account(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedAccount> {
    let account_id = ctx
        .account_id
        .ok_or_else(|| ApplicationError::unauthorized("missing account id"))?;
    let email = ctx
        .email
        .ok_or_else(|| ApplicationError::unauthorized("missing email"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let id = AccountId::new(account_id)
        .map_err(|_| ApplicationError::unauthorized("invalid account id"))?;
    let email =
        AccountEmail::new(email).map_err(|_| ApplicationError::unauthorized("invalid email"))?;

    Ok(AuthenticatedAccount {
        id,
        email,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    account_id: Option<i64>,
    email: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match predicate.name.as_str() {
            "account" => self.handle_account(predicate.terms),
            "issued_at" => self.issued_at = first_date(&predicate.terms),
            "expires_at" => self.expires_at = first_date(&predicate.terms),
            _ => {}
        }
    }

    fn handle_account(&mut self, terms: Vec<Term>) {
        if let [Term::Integer(id), Term::Str(email)] = terms.as_slice() {
            self.account_id = Some(*id);
            self.email = Some(email.clone());
        }
    }
}

fn first_date(terms: &[Term]) -> Option<SystemTime> {
    match terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
