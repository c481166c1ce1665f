use ballast_core::responses::{ReallocationSuggestion, WorkloadEntry, WorkloadReport};
use ballast_core::snapshot::Snapshot;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `ballast schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.type_name)?;
    output(&schema, flags.format)
}

fn schema_value(kind: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        SchemaType::Snapshot => schema_for!(Snapshot),
        SchemaType::WorkloadEntry => schema_for!(WorkloadEntry),
        SchemaType::Suggestion => schema_for!(ReallocationSuggestion),
        SchemaType::Report => schema_for!(WorkloadReport),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_schema_lists_all_tables() {
        let schema = schema_value(SchemaType::Snapshot).unwrap();
        let properties = schema["properties"].as_object().expect("object schema");
        for table in ["users", "tasks", "time_logs", "dependencies", "notifications"] {
            assert!(properties.contains_key(table), "missing {table}");
        }
    }

    #[test]
    fn workload_entry_schema_requires_score() {
        let schema = schema_value(SchemaType::WorkloadEntry).unwrap();
        let required = schema["required"].as_array().expect("required list");
        assert!(required.iter().any(|field| field == "workload_score"));
    }

    #[test]
    fn every_type_has_a_title() {
        for kind in [
            SchemaType::Snapshot,
            SchemaType::WorkloadEntry,
            SchemaType::Suggestion,
            SchemaType::Report,
        ] {
            let schema = schema_value(kind).unwrap();
            assert!(schema["title"].is_string());
        }
    }
}
