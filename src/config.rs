use serde::Serialize;

/// Id of the element the Yew app mounts into. Falls back to `<body>`.
pub const MOUNT_ID: &str = "zoomControls";

/// Page wiring. Defaults match the stock page markup; each field can be
/// overridden with a `data-*` attribute on the mount host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageConfig {
    pub storage_key: String,
    pub container_id: String,
    pub fade_class: String,
    pub fade_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: "pageZoom".to_string(),
            container_id: "zoomContainer".to_string(),
            fade_class: "page-fade".to_string(),
            // matches the CSS transition duration
            fade_delay_ms: 450,
        }
    }
}

impl PageConfig {
    /// Builds a config from an attribute lookup. Blank or unparsable values keep the default.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let text = |name: &str| attr(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(v) = text("data-storage-key") {
            config.storage_key = v;
        }
        if let Some(v) = text("data-container-id") {
            config.container_id = v;
        }
        if let Some(v) = text("data-fade-class") {
            config.fade_class = v;
        }
        if let Some(v) = text("data-fade-delay-ms").and_then(|v| v.parse::<u32>().ok()) {
            config.fade_delay_ms = v;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.storage_key, "pageZoom");
        assert_eq!(config.container_id, "zoomContainer");
        assert_eq!(config.fade_class, "page-fade");
        assert_eq!(config.fade_delay_ms, 450);
    }

    #[test]
    fn test_no_attributes_gives_default() {
        assert_eq!(PageConfig::from_attributes(lookup(&[])), PageConfig::default());
    }

    #[test]
    fn test_attribute_overrides() {
        let config = PageConfig::from_attributes(lookup(&[
            ("data-storage-key", "docsZoom"),
            ("data-container-id", "main"),
            ("data-fade-delay-ms", "300"),
        ]));
        assert_eq!(config.storage_key, "docsZoom");
        assert_eq!(config.container_id, "main");
        assert_eq!(config.fade_class, "page-fade");
        assert_eq!(config.fade_delay_ms, 300);
    }

    #[test]
    fn test_bad_attributes_keep_defaults() {
        let config = PageConfig::from_attributes(lookup(&[
            ("data-storage-key", "   "),
            ("data-fade-delay-ms", "soon"),
        ]));
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_serializes_for_logging() {
        let json = serde_json::to_string(&PageConfig::default()).unwrap();
        assert!(json.contains("\"fade_delay_ms\":450"));
    }
}
