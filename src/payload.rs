use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::fs;
use std::path::Path;

use crate::context::RunContext;
use crate::manifest;

pub const REPORT_FIELD: &str = "report";
pub const SHOTS_FIELD: &str = "shots";

/// One file attached to the upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: &'static str,
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Everything sent in the single POST.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub context: RunContext,
    pub files: Vec<FilePart>,
}

fn read_part(field: &'static str, dir: &Path, file_name: &str) -> Result<FilePart> {
    let path = dir.join(file_name);
    let contents =
        fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(FilePart {
        field,
        file_name: file_name.to_string(),
        contents,
    })
}

/// Read the manifest and every screenshot it lists from `results_dir`.
///
/// Fails on the first unreadable file, so either every part is present or
/// nothing is returned. File handles are closed before this returns.
pub fn assemble(results_dir: &Path, manifest_name: &str, context: RunContext) -> Result<UploadPayload> {
    let names = manifest::read_manifest(&results_dir.join(manifest_name))?;

    let mut files = Vec::with_capacity(names.len() + 1);
    files.push(read_part(REPORT_FIELD, results_dir, manifest_name)?);
    for name in &names {
        files.push(read_part(SHOTS_FIELD, results_dir, name)?);
    }

    Ok(UploadPayload { context, files })
}

impl UploadPayload {
    pub fn shot_count(&self) -> usize {
        self.files.iter().filter(|f| f.field == SHOTS_FIELD).count()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.contents.len()).sum()
    }

    /// Build the multipart body: text fields first, then files in manifest order.
    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        for (name, value) in self.context.fields() {
            if let Some(value) = value {
                form = form.text(name, value.to_string());
            }
        }
        for part in self.files {
            form = form.part(part.field, Part::bytes(part.contents).file_name(part.file_name));
        }
        form
    }
}
