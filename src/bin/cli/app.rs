use anyhow::{bail, Context, Result};

use bookrec::config;
use bookrec::notion::NotionClient;

/// Shared state for CLI commands
pub struct App {
    pub client: NotionClient,
}

impl App {
    /// Build the API client from the configured token
    pub fn new() -> Result<Self> {
        let Some(token) = config::load_token() else {
            bail!(
                "{token_env} is not set.\n\n\
                 To configure:\n\
                 1. Create an integration at https://www.notion.so/my-integrations\n\
                 2. Share the reading-list pages with the integration\n\
                 3. Set the token:\n\
                 \x20  export {token_env}='your_integration_token'\n\
                 \x20  (or add {token_env}=... to {env_file})",
                token_env = config::TOKEN_ENV,
                env_file = config::ENV_FILE,
            );
        };

        let client = NotionClient::new(token).context("Failed to build the Notion client")?;
        Ok(Self { client })
    }
}
