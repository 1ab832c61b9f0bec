//! Basic example demonstrating the custom object records client.
//!
//! Run with:
//! ```
//! FRESHSERVICE_API_KEY=your-key FRESHSERVICE_DOMAIN=acme cargo run --example basic -- 42
//! ```

use freshservice::{
    CreateCustomObjectRecordRequest, CustomObjectRecordClient, CustomObjectRecordMetadata,
    FreshserviceClient, UpdateCustomObjectRecordRequest,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Asset {
    name: String,
    #[serde(flatten)]
    meta: CustomObjectRecordMetadata,
}

#[tokio::main]
async fn main() -> freshservice::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let custom_object_id: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .ok_or_else(|| {
            freshservice::FreshserviceError::InvalidArgument(
                "usage: basic <custom-object-id>".to_string(),
            )
        })?;

    // Create client from environment variables
    println!("Creating Freshservice client...");
    let client = FreshserviceClient::from_env()?;
    println!("Connected to: {}", client.base_url());
    let records = CustomObjectRecordClient::<Asset>::new(client);

    // List first page of records
    println!("\n--- Listing Records (first page) ---");
    let page = records.list(custom_object_id, 10).await?;
    println!("Found {} records", page.len());
    for asset in page.iter() {
        println!("  - {} ({:?})", asset.name, asset.meta.display_id);
    }
    if let Some(next) = page.next_page() {
        println!("Next page: {next}");
    }

    // Create, rename, and delete a record
    println!("\n--- Record Lifecycle ---");
    let created = records
        .create(
            custom_object_id,
            CreateCustomObjectRecordRequest::new(Asset {
                name: "Example asset".to_string(),
                meta: CustomObjectRecordMetadata::default(),
            }),
        )
        .await?;
    let Some(record_id) = created.custom_object.data.meta.display_id else {
        println!("Created record has no display id; stopping");
        return Ok(());
    };
    println!("Created record {record_id}");

    let updated = records
        .update(
            custom_object_id,
            record_id,
            UpdateCustomObjectRecordRequest::new(Asset {
                name: "Renamed asset".to_string(),
                meta: CustomObjectRecordMetadata::default(),
            }),
        )
        .await?;
    println!("Updated name: {}", updated.custom_object.data.name);

    records.delete(custom_object_id, record_id).await?;
    println!("Deleted record {record_id}");

    Ok(())
}
