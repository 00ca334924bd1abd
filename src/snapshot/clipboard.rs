//! Clipboard integration for snapshot payloads.

use std::process::{Command, Stdio};

use wl_clipboard_rs::copy::{MimeType, Options, Source};

use super::types::{ImagePayload, SnapError};

/// Copy a snapshot payload to the Wayland clipboard.
///
/// Attempts the wl-copy command first (provided by the wl-clipboard
/// package), falling back to the wl-clipboard-rs library if that fails.
/// Binary payloads are tagged `image/png`; data-URL payloads go up as plain
/// text.
pub fn copy_to_clipboard(payload: &ImagePayload) -> Result<(), SnapError> {
    log::debug!(
        "Attempting to copy snapshot to clipboard ({} bytes, {})",
        payload.len(),
        payload.mime_type()
    );

    match copy_via_command(payload) {
        Ok(()) => {
            log::info!("Successfully copied to clipboard via wl-copy command");
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!(
                "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                cmd_err
            );
            match copy_via_library(payload) {
                Ok(()) => {
                    log::info!("Successfully copied to clipboard via wl-clipboard-rs fallback");
                    Ok(())
                }
                Err(lib_err) => {
                    let combined = format!(
                        "wl-copy failed: {} ; wl-clipboard-rs failed: {}",
                        cmd_err, lib_err
                    );
                    Err(SnapError::ClipboardError(combined))
                }
            }
        }
    }
}

/// Copy to clipboard using wl-clipboard-rs library.
fn copy_via_library(payload: &ImagePayload) -> Result<(), SnapError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mime = match payload {
        ImagePayload::Png(_) => MimeType::Specific("image/png".to_string()),
        ImagePayload::DataUrl(_) => MimeType::Text,
    };

    let mut opts = Options::new();

    // Serve one paste then exit so the payload outlives this call.
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(Source::Bytes(payload.bytes().into()), mime)
        .map_err(|e| SnapError::ClipboardError(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

/// Copy to clipboard by shelling out to wl-copy command.
fn copy_via_command(payload: &ImagePayload) -> Result<(), SnapError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg(payload.mime_type())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            SnapError::ClipboardError(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(payload.bytes()).map_err(|e| {
            SnapError::ClipboardError(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| SnapError::ClipboardError(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SnapError::ClipboardError(format!(
            "wl-copy failed: {}",
            stderr
        )));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}

/// Check if clipboard functionality is available.
///
/// Tests if wl-copy command exists as a basic availability check.
pub fn is_clipboard_available() -> bool {
    Command::new("wl-copy")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
