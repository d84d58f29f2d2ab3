/// Interactive gallery browser implementation
pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod theme;

use crate::api::ApiClient;
use crate::Result;

/// Entry point for the gallery browser
pub async fn run(client: ApiClient) -> Result<()> {
    let app = app::App::new(client);
    app.run().await
}
