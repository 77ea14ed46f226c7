//! This example is specially useful for the OAuth tests. It simply obtains an
//! access token and a refresh token with all available scopes.
//!
//! Set LINKEDIN_CLIENT_ID, LINKEDIN_CLIENT_SECRET and LINKEDIN_REDIRECT_URI in
//! an .env file or export them manually as environmental variables for this to
//! work.

use libs::env_logger;
use linkedin::{prelude::*, scopes, AuthCodeLinkedIn, Credentials, OAuth};

#[tokio::main]
async fn main() {
    // You can use any logger for debugging.
    env_logger::init();

    // The credentials must be available in the environment. Enable the
    // `env-file` feature in order to read them from an `.env` file.
    let creds = Credentials::from_env().unwrap();

    // Using every possible scope
    let scopes = scopes!(
        "openid",
        "profile",
        "email",
        "w_member_social",
        "r_organization_social",
        "w_organization_social",
        "rw_organization_admin"
    );
    let oauth = OAuth::from_env(scopes).unwrap();

    let linkedin = AuthCodeLinkedIn::new(creds, oauth);

    let url = linkedin.get_authorize_url().unwrap();
    // This function requires the `cli` feature enabled.
    linkedin.prompt_for_token(&url).await.unwrap();

    let me = linkedin.userinfo().await.unwrap();
    println!("Authenticated as {}", me.name.as_deref().unwrap_or(&me.sub));

    let token = linkedin.token.lock().await;
    let token = token.as_ref().unwrap();
    println!("Access token: {}", &token.access_token);

    // Programmatic refresh tokens are only issued to a limited set of
    // partners.
    // link: https://learn.microsoft.com/en-us/linkedin/shared/authentication/programmatic-refresh-tokens
    if let Some(refresh_token) = &token.refresh_token {
        println!("Refresh token: {}", refresh_token);
    }
}
