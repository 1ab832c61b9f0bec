//! Freshservice CLI binary.
//!
//! A command-line interface for managing custom object records.

use clap::Parser;
use freshservice::cli::{Cli, Command};
use freshservice::{
    CreateCustomObjectRecordRequest, CustomObjectRecord, CustomObjectRecordClient,
    ListCustomObjectRecordsResponse, UpdateCustomObjectRecordRequest,
};
use serde_json::Value;
use std::process::ExitCode;
use tabled::{Table, Tabled};

type Records = CustomObjectRecordClient<Value>;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match cli.client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set FRESHSERVICE_API_KEY and FRESHSERVICE_DOMAIN environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&Records::new(client), cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(records: &Records, cli: Cli) -> freshservice::Result<()> {
    match cli.command {
        Command::Create { object, data } => {
            let response = records
                .create(object, CreateCustomObjectRecordRequest::new(data))
                .await?;
            output_record(&response.custom_object, cli.json)
        }
        Command::List { object, page_size } => {
            let response = records.list(object, page_size).await?;
            output_list(&response, cli.json)
        }
        Command::Update {
            object,
            record,
            data,
        } => {
            let response = records
                .update(object, record, UpdateCustomObjectRecordRequest::new(data))
                .await?;
            output_record(&response.custom_object, cli.json)
        }
        Command::Delete { object, record } => {
            records.delete(object, record).await?;
            if cli.json {
                let result = serde_json::json!({
                    "deleted": true,
                    "custom_object_id": object,
                    "record_id": record,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Deleted record {record} from custom object {object}");
            }
            Ok(())
        }
    }
}

fn output_record(record: &CustomObjectRecord<Value>, json: bool) -> freshservice::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", Table::new([RecordRow::from(&record.data)]));
    }
    Ok(())
}

fn output_list(response: &ListCustomObjectRecordsResponse<Value>, json: bool) -> freshservice::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    let rows: Vec<RecordRow> = response.iter().map(RecordRow::from).collect();
    println!("{}", Table::new(rows));
    match response.next_page() {
        Some(next) => println!("\n{} records (next page: {next})", response.len()),
        None => println!("\n{} records (end)", response.len()),
    }
    Ok(())
}

// Table row type for non-JSON output

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "display id")]
    display_id: String,
    data: String,
}

impl From<&Value> for RecordRow {
    fn from(data: &Value) -> Self {
        let display_id = data
            .get("bo_display_id")
            .map(|v| v.to_string())
            .unwrap_or_default();

        let fields = match data {
            Value::Object(map) => {
                let visible: serde_json::Map<String, Value> = map
                    .iter()
                    .filter(|(k, _)| !k.starts_with("bo_"))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Value::Object(visible).to_string()
            }
            other => other.to_string(),
        };

        Self {
            display_id,
            data: fields,
        }
    }
}
