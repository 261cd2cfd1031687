use serde::{Deserialize, Serialize};

/// One icon-font library as described by the groups manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub prefix: String,
    pub css_path: String,
    pub demo_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_path: Option<String>,
    #[serde(default)]
    pub count: u32,
}

impl IconGroup {
    pub fn is_available(&self) -> bool {
        self.count > 0
    }

    pub fn download_path(&self) -> Option<&str> {
        self.download_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconGroupsConfig {
    #[serde(default)]
    pub icon_groups: Vec<IconGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_uses_camel_case_fields() {
        let raw = r#"{
            "iconGroups": [
                {
                    "id": "bootstrap",
                    "name": "Bootstrap Icons",
                    "description": "Official icon library",
                    "prefix": "bi-",
                    "cssPath": "./src/bootstrap/style.css",
                    "demoPath": "./src/bootstrap/demo.html",
                    "downloadPath": "./downloads/bootstrap.zip",
                    "count": 2000
                },
                {
                    "id": "feather",
                    "name": "Feather",
                    "prefix": "fe-",
                    "cssPath": "./src/feather/style.css",
                    "demoPath": "./src/feather/demo.html",
                    "count": 0
                }
            ]
        }"#;

        let config: IconGroupsConfig = serde_json::from_str(raw).expect("manifest should parse");
        assert_eq!(config.icon_groups.len(), 2);

        let bootstrap = &config.icon_groups[0];
        assert_eq!(bootstrap.css_path, "./src/bootstrap/style.css");
        assert_eq!(bootstrap.download_path(), Some("./downloads/bootstrap.zip"));
        assert!(bootstrap.is_available());

        let feather = &config.icon_groups[1];
        assert_eq!(feather.description, "");
        assert_eq!(feather.download_path(), None);
        assert!(!feather.is_available());
    }

    #[test]
    fn blank_download_path_counts_as_missing() {
        let group = IconGroup {
            id: "x".to_owned(),
            name: "X".to_owned(),
            description: String::new(),
            prefix: "x-".to_owned(),
            css_path: "x.css".to_owned(),
            demo_path: "x.html".to_owned(),
            download_path: Some("   ".to_owned()),
            count: 1,
        };
        assert_eq!(group.download_path(), None);
    }
}
