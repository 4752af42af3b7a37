use anyhow::Context;

use crate::auth::{generate_jwt, generate_refresh_token, Claims};
use crate::config::SecurityConfig;

/// Sign an access token with JWT_SECRET and print it
pub fn access_token(subject: &str, hours: Option<u64>) -> anyhow::Result<()> {
    let security = SecurityConfig::from_env().context("failed to load security configuration")?;
    let claims = Claims::new(subject, hours.unwrap_or(security.jwt_expiry_hours));
    let token = generate_jwt(&claims, &security.jwt_secret)?;

    println!("{}", token);
    Ok(())
}

pub fn refresh_token() {
    println!("{}", generate_refresh_token());
}
