//! Web app manifest for installing the landing page as a standalone app.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: String,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Build the manifest with every URL prefixed by `base_path`
/// (normalized, e.g. "" or "/newcode-agency").
pub fn build(base_path: &str) -> WebManifest {
    let icon = |size: &'static str| ManifestIcon {
        src: format!("{}/icon-{}.png", base_path, size),
        sizes: size,
        mime_type: "image/png",
    };

    WebManifest {
        name: "NewCode Agencia",
        short_name: "NewCode",
        description: "Agencia de programación especializada en desarrollo de software personalizado",
        start_url: format!("{}/", base_path),
        display: "standalone",
        background_color: "#ffffff",
        theme_color: "#000000",
        icons: vec![icon("192x192"), icon("512x512")],
    }
}
