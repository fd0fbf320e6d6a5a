//! Static files the web build serves next to the wasm bundle.

use crate::error::WhiteboardResult;
use crate::export::ExportSink;
use crate::manifest::AppManifest;
use crate::precache::PrecacheManifest;

pub const MANIFEST_FILE_NAME: &str = "manifest.webmanifest";
pub const PRECACHE_FILE_NAME: &str = "precache-manifest.json";

/// Serialize the app manifest and the precache list into `sink`
pub fn write_web_assets(
    sink: &mut dyn ExportSink,
    manifest: &AppManifest,
    precache: &PrecacheManifest,
) -> WhiteboardResult<()> {
    sink.save(MANIFEST_FILE_NAME, manifest.to_json()?.as_bytes())?;
    sink.save(PRECACHE_FILE_NAME, precache.to_json()?.as_bytes())?;
    log::info!("Wrote {} and {}", MANIFEST_FILE_NAME, PRECACHE_FILE_NAME);
    Ok(())
}
