use super::CommandHandler;
use crate::api::ApiClient;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub endpoint: String,
    pub per_page: u32,
}

impl BrowseCommand {
    pub fn new(endpoint: String, per_page: u32) -> Self {
        Self { endpoint, per_page }
    }
}

impl CommandHandler for BrowseCommand {
    fn execute(&self) -> Result<()> {
        let client = ApiClient::new(&self.endpoint, self.per_page)?;

        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        rt.block_on(crate::cli::tui::run_gallery(client))
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}
