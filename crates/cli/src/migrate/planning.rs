//! Pure functions for calculating migration plans (Functional Core).

use dynamigrate_core::schema::{Column, Schema};

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    pub indexes: Vec<IndexState>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Secondary index state.
#[derive(Debug, Clone)]
pub struct IndexState {
    pub name: String,
    pub status: IndexStatus,
}

/// Secondary index status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for one schema file.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyPlan {
    /// Table will be created from the schema, optionally after dropping
    /// an existing copy.
    Create { schema: Schema, drop_existing: bool },
    /// Table exists and the schema does not allow dropping it.
    Blocked { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: decide what applying a schema means given the current
/// table state.
pub fn calculate_apply_plan(current: Option<&TableState>, schema: &Schema) -> ApplyPlan {
    match current {
        None => ApplyPlan::Create {
            schema: schema.clone(),
            drop_existing: false,
        },
        Some(_) if schema.drop_if_exists => ApplyPlan::Create {
            schema: schema.clone(),
            drop_existing: true,
        },
        Some(_) => ApplyPlan::Blocked {
            table_name: schema.table.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format an apply plan for display.
pub fn format_apply_plan(plan: &ApplyPlan) -> Vec<String> {
    match plan {
        ApplyPlan::Create {
            schema,
            drop_existing,
        } => {
            let mut lines = Vec::new();
            if *drop_existing {
                lines.push(format!("- Drop existing table: {}", schema.table));
            }
            lines.push(format!("+ Create table: {}", schema.table));
            for key in schema.key_columns() {
                lines.push(format_key_line("  ", key));
            }
            for gsi in &schema.global_indexes {
                lines.push(format!("  + GSI: {}", gsi.name));
                for key in &gsi.keys {
                    lines.push(format_key_line("    ", key));
                }
            }
            for lsi in &schema.local_indexes {
                lines.push(format!("  + LSI: {}", lsi.name));
                for key in &lsi.keys {
                    lines.push(format_key_line("    ", key));
                }
            }
            match &schema.provisioned_throughput {
                Some(throughput) => lines.push(format!(
                    "  Billing: PROVISIONED ({} read / {} write)",
                    throughput.read_capacity_units, throughput.write_capacity_units
                )),
                None => lines.push("  Billing: PAY_PER_REQUEST".to_string()),
            }
            if !schema.items.is_empty() {
                lines.push(format!("  ~ Seed {} items", schema.items.len()));
            }
            lines
        }
        ApplyPlan::Blocked { table_name } => {
            vec![format!(
                "! Table '{}' already exists and dropIfExists is false",
                table_name
            )]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

fn format_key_line(indent: &str, key: &Column) -> String {
    let role = if key.hash { "Hash key" } else { "Range key" };
    format!(
        "{}{}: {} ({})",
        indent,
        role,
        key.name,
        key.column_type.as_str()
    )
}
