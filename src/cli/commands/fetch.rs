use super::CommandHandler;
use crate::api::ApiClient;
use crate::gallery::record::Record;
use crate::Result;

/// Handler for the `fetch` command: one fetch, records printed to stdout.
pub struct FetchCommand {
    pub endpoint: String,
    pub per_page: u32,
    pub format: String,
}

impl FetchCommand {
    pub fn new(endpoint: String, per_page: u32, format: String) -> Self {
        Self {
            endpoint,
            per_page,
            format,
        }
    }

    fn print_text(records: &[Record]) {
        for record in records {
            println!(
                "{:<12} {} — {} ({}, {})",
                record.id, record.name, record.job_title, record.department, record.location
            );
        }
        println!("{} records", records.len());
    }
}

impl CommandHandler for FetchCommand {
    fn execute(&self) -> Result<()> {
        let client = ApiClient::new(&self.endpoint, self.per_page)?;

        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let records = rt.block_on(client.fetch_records())?;

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&records)?),
            _ => Self::print_text(&records),
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "fetch"
    }
}
