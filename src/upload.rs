use anyhow::{Context, Result};
use console::Style;

use crate::payload::UploadPayload;
use crate::progress::{finish_spinner, stage_spinner};

/// What the server answered. Never interpreted beyond printing.
#[derive(Debug)]
pub struct UploadResponse {
    pub status: u16,
    pub body: String,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// POST the payload to `target_url` as one multipart request.
///
/// No timeout is set; the CI job's own limit bounds the wait.
pub async fn send(target_url: &str, payload: UploadPayload) -> Result<UploadResponse> {
    let shots = payload.shot_count();
    let pb = stage_spinner(&format!("Uploading {shots} screenshots to {target_url}..."));

    let result = async {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        let response = client
            .post(target_url)
            .multipart(payload.into_form())
            .send()
            .await
            .with_context(|| format!("HTTP upload to {target_url} failed"))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read upload response body")?;
        Ok::<_, anyhow::Error>(UploadResponse { status, body })
    }
    .await;

    finish_spinner(&pb, result.as_ref().ok().map(|r| r.status));
    result
}

/// Print the status line and raw body to stdout.
pub fn print_response(response: &UploadResponse) {
    let style = if response.is_success() {
        Style::new().green().bold()
    } else {
        Style::new().red().bold()
    };
    println!("{}", style.apply_to(format!("== Response: {} ==", response.status)));
    println!("{}", response.body);
}
