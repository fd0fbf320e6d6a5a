use serde::Serialize;

/// An icon entry of the web app manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(src: &str, size: u32) -> Self {
        Self {
            src: src.to_owned(),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
    MinimalUi,
    Browser,
}

/// Installability metadata served as `manifest.webmanifest`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: DisplayMode,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl Default for AppManifest {
    fn default() -> Self {
        Self {
            name: "Whiteboard".to_owned(),
            short_name: "Whiteboard".to_owned(),
            description: "A minimal drawing whiteboard".to_owned(),
            start_url: "/".to_owned(),
            display: DisplayMode::Standalone,
            background_color: "#ffffff".to_owned(),
            theme_color: "#000000".to_owned(),
            icons: vec![
                ManifestIcon::png("/icon-192x192.png", 192),
                ManifestIcon::png("/icon-512x512.png", 512),
            ],
        }
    }
}

impl AppManifest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
