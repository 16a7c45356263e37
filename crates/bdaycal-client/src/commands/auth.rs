//! Authorization command.

use tracing::info;

use bdaycal_google::{Authorizer, OAuthCredentials};

use crate::config::RunConfig;
use crate::error::ClientResult;

/// Runs the Google authorization flow.
///
/// With `force`, the interactive consent flow runs even when a cached token
/// exists. Without it, a cached token short-circuits to a refresh check so
/// the command doubles as a credential health check.
pub async fn run(config: &RunConfig, force: bool) -> ClientResult<()> {
    let credentials = OAuthCredentials::from_file(&config.credentials_path)?;
    let authorizer =
        Authorizer::new(credentials, &config.token_path)?.with_timeout(config.timeout);

    if authorizer.has_cached_token() && !force {
        // Verify the cached token still yields an access token.
        authorizer.obtain_credential().await?;
        println!("Already authorized; cached token is valid.");
        println!("Use --force to re-run the consent flow.");
        return Ok(());
    }

    println!("Starting Google Calendar authorization...");
    println!();
    println!("A browser window will open for you to authorize access.");
    println!("If the browser doesn't open, check the terminal for a URL to copy.");
    println!();

    authorizer.authorize_interactive().await?;

    info!("Google authorization successful");
    println!();
    println!("Authorization successful!");
    println!("Your token has been saved to {}.", config.token_path.display());

    Ok(())
}
