use serde::Serialize;

/// Revision token generated by `build.rs`, unique per build
pub const BUILD_REVISION: &str = env!("WHITEBOARD_BUILD_REVISION");

/// URL of the page served when the app is offline and a route is not cached
pub const OFFLINE_FALLBACK_URL: &str = "/~offline";

/// One asset the service worker stores ahead of time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecacheEntry {
    pub url: String,
    /// `None` for assets whose URL already changes with their content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl PrecacheEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            revision: None,
        }
    }

    pub fn with_revision(url: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            revision: Some(revision.into()),
        }
    }
}

/// The static assets made available offline, ending with the offline
/// fallback page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrecacheManifest {
    entries: Vec<PrecacheEntry>,
}

impl PrecacheManifest {
    pub fn new(assets: impl IntoIterator<Item = PrecacheEntry>) -> Self {
        let mut entries: Vec<PrecacheEntry> = assets
            .into_iter()
            .filter(|entry| entry.url != OFFLINE_FALLBACK_URL)
            .collect();
        entries.push(PrecacheEntry::with_revision(OFFLINE_FALLBACK_URL, BUILD_REVISION));
        Self { entries }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for PrecacheManifest {
    fn default() -> Self {
        Self::new([
            PrecacheEntry::new("/"),
            PrecacheEntry::new("/manifest.webmanifest"),
            PrecacheEntry::new("/icon-192x192.png"),
            PrecacheEntry::new("/icon-512x512.png"),
        ])
    }
}
