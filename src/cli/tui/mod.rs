/// Terminal User Interface module for interactive commands
pub mod gallery;

use crate::api::ApiClient;
use crate::Result;

/// Run the interactive gallery browser
pub async fn run_gallery(client: ApiClient) -> Result<()> {
    gallery::run(client).await
}
