use console::Style;
use serde::Serialize;

use crate::payload::UploadPayload;

const REDACTED: &str = "<redacted>";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlannedField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlannedFile {
    pub field: String,
    pub file_name: String,
    pub bytes: usize,
}

/// The request that would be sent, with the upload key redacted.
#[derive(Debug, Serialize)]
pub struct UploadPlan {
    pub target_url: String,
    pub fields: Vec<PlannedField>,
    pub files: Vec<PlannedFile>,
    pub total_bytes: usize,
}

pub fn plan(target_url: &str, payload: &UploadPayload) -> UploadPlan {
    let fields = payload
        .context
        .fields()
        .into_iter()
        .filter_map(|(name, value)| {
            let value = if name == "key" { value.map(|_| REDACTED)? } else { value? };
            Some(PlannedField {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect();

    let files = payload
        .files
        .iter()
        .map(|f| PlannedFile {
            field: f.field.to_string(),
            file_name: f.file_name.clone(),
            bytes: f.contents.len(),
        })
        .collect();

    UploadPlan {
        target_url: target_url.to_string(),
        fields,
        files,
        total_bytes: payload.total_bytes(),
    }
}

/// Print a human-readable view of the planned request.
pub fn print_table(plan: &UploadPlan) {
    let bold = Style::new().bold();

    println!("{} {}", bold.apply_to("POST"), plan.target_url);
    println!();
    println!("{:<14} {}", "FIELD", "VALUE");
    println!("{:<14} {}", "-----", "-----");
    for field in &plan.fields {
        println!("{:<14} {}", field.name, field.value);
    }
    println!();
    println!("{:<8} {:<40} {:>10}", "PART", "FILE", "BYTES");
    println!("{:<8} {:<40} {:>10}", "----", "----", "-----");
    for file in &plan.files {
        println!("{:<8} {:<40} {:>10}", file.field, file.file_name, file.bytes);
    }
    println!();
    println!("{} files, {} bytes", plan.files.len(), plan.total_bytes);
}

/// Print the planned request as JSON.
pub fn print_json(plan: &UploadPlan) {
    match serde_json::to_string_pretty(plan) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing JSON: {e}"),
    }
}
