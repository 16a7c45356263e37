//! Import command: the full pipeline.

use tracing::info;

use bdaycal_core::parse_birthday_file;
use bdaycal_google::{Authorizer, CalendarClient, OAuthCredentials};

use crate::config::RunConfig;
use crate::error::ClientResult;
use crate::importer::run_import;

/// Runs the import pipeline: authorize once, parse the birthday list, then
/// submit one create-event call per entry.
pub async fn run(config: &RunConfig) -> ClientResult<()> {
    let credentials = OAuthCredentials::from_file(&config.credentials_path)?;
    let authorizer =
        Authorizer::new(credentials, &config.token_path)?.with_timeout(config.timeout);

    let credential = authorizer.obtain_credential().await?;
    let client = CalendarClient::new(credential.access_token(), config.timeout);

    let entries = parse_birthday_file(&config.birthdays_path)?;
    info!(
        "importing {} entries from {}",
        entries.len(),
        config.birthdays_path.display()
    );

    let summary = run_import(&entries, &client, &config.calendar_id, config.pacing).await;

    println!(
        "Done: {} created, {} failed, {} skipped.",
        summary.created, summary.failed, summary.skipped
    );

    Ok(())
}
