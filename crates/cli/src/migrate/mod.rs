//! DynamoDB migration commands.

mod client;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{MigrateError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use dynamigrate_core::schema::{validate_schema, Schema};

/// Apply schema files against DynamoDB.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Apply declarative table schemas against DynamoDB.

Each schema file describes one table: its key columns, secondary indexes,
throughput, and optional seed items. Applying a file optionally drops an
existing table (dropIfExists), creates the table with its indexes, waits
for it to become active, then inserts the seed items.

Files are applied in order; the first failure aborts the run. The command
shows a plan per file before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct ApplyCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Schema files to apply, in order.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<std::path::PathBuf>,
}

/// Delete a table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Delete a DynamoDB table.

Shows a destroy plan and asks for confirmation before deleting. Deleting
a table that does not exist is a no-op.")]
pub struct DestroyCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Table name to delete.
    #[arg(long)]
    pub table_name: String,
}

/// Main entry point for the apply command.
pub async fn run_apply(cmd: ApplyCommand, global: crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;

    for path in &cmd.files {
        apply_file(&dynamo_client, path, &cmd, &global).await?;
    }

    Ok(())
}

async fn apply_file(
    dynamo_client: &aws_sdk_dynamodb::Client,
    path: &std::path::Path,
    cmd: &ApplyCommand,
    global: &crate::Global,
) -> Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let schema = Schema::parse(&raw)?;
    validate_schema(&schema)?;

    if global.is_verbose() {
        aprintln!(
            "{} {} columns, {} GSIs, {} LSIs, {} seed items",
            p_b("Schema:"),
            schema.columns.len(),
            schema.global_indexes.len(),
            schema.local_indexes.len(),
            schema.items.len()
        );
    }

    let current_state = client::get_table_state(dynamo_client, &schema.table).await?;
    let plan = planning::calculate_apply_plan(current_state.as_ref(), &schema);

    if !global.is_silent() {
        aprintln!("{} {}", p_c("Plan for"), path.display());
        for line in planning::format_apply_plan(&plan) {
            if line.starts_with('+') {
                aprintln!("  {}", p_g(&line));
            } else if line.starts_with('-') {
                aprintln!("  {}", p_r(&line));
            } else if line.starts_with('~') || line.starts_with('!') {
                aprintln!("  {}", p_y(&line));
            } else {
                aprintln!("  {}", line);
            }
        }
        aprintln!();
    }

    if let planning::ApplyPlan::Blocked { table_name } = &plan {
        return Err(MigrateError::TableAlreadyExists {
            table_name: table_name.clone(),
        });
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Apply these changes?")
            .default(true)
            .interact()
            .map_err(|e| MigrateError::Prompt(e.to_string()))?;

        if !confirmed {
            return Err(MigrateError::UserCancelled);
        }
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    deploy::execute_apply_plan(dynamo_client, &plan).await?;

    if schema.items.is_empty() {
        if !global.is_silent() {
            aprintln!("{} table '{}' is ready.", p_g("Success:"), schema.table);
        }
        return Ok(());
    }

    let inserted = seed::seed_items(dynamo_client, &schema).await?;

    if !global.is_silent() {
        aprintln!(
            "{} table '{}' is ready, {} items seeded.",
            p_g("Success:"),
            schema.table,
            inserted
        );
    }

    Ok(())
}

/// Main entry point for the destroy command.
pub async fn run_destroy(cmd: DestroyCommand, global: crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;
    let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

    if !global.is_silent() {
        aprintln!("{}", p_y("Destroy Plan:"));
        for line in planning::format_destroy_plan(&plan) {
            aprintln!("  {}", p_r(&line));
        }
        aprintln!();
    }

    if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Nothing to destroy."));
        }
        return Ok(());
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
            .default(false)
            .interact()
            .map_err(|e| MigrateError::Prompt(e.to_string()))?;

        if !confirmed {
            return Err(MigrateError::UserCancelled);
        }
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Deleting table..."));
    }

    deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Table destroyed successfully."));
    }

    Ok(())
}
