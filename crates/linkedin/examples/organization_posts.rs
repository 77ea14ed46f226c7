//! Lists the posts of the organizations administered by the member behind
//! `LINKEDIN_ACCESS_TOKEN`, which can be obtained with the `oauth_tokens`
//! example.
//!
//! `LINKEDIN_API_VERSION` and `LINKEDIN_VERSION` are read as well, see
//! `Config::from_env`.

use futures_util::TryStreamExt;
use libs::env_logger;
use linkedin::{
    model::{AuthorId, OrganizationId},
    prelude::*,
    AuthCodeLinkedIn, Config, Token,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    let token = Token {
        access_token: std::env::var("LINKEDIN_ACCESS_TOKEN").expect("LINKEDIN_ACCESS_TOKEN is required"),
        ..Default::default()
    };
    let linkedin = AuthCodeLinkedIn::from_token_with_config(token, Config::from_env());

    let acls = linkedin.administered_organizations(0, 10).await.unwrap();
    for acl in acls.elements {
        let id = OrganizationId::from_urn(&acl.organization).unwrap();
        let organization = linkedin.organization(&id).await.unwrap();
        let followers = linkedin.follower_count(&id).await.unwrap();
        println!("{} ({} followers)", organization.localized_name, followers);

        let posts = linkedin
            .all_posts_by_author(&AuthorId::from(id), 20)
            .unwrap()
            .try_collect::<Vec<_>>()
            .await
            .unwrap();
        for post in posts {
            println!("  - {}", post.commentary.lines().next().unwrap_or_default());
        }
    }
}
