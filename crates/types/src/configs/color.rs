use serde::{Deserialize, Serialize};

use super::{ConfigType, ThemeColor};
use crate::models::Timestamp;

/// The deployment's color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub version: u32,
    pub deployment_id: String,
    pub config_type: ConfigType,
    pub colors: Vec<ThemeColor>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn palette_keeps_document_order() {
        let config: ColorConfig = serde_json::from_value(json!({
            "version": 1,
            "deployment_id": "dep_1",
            "config_type": "colors",
            "colors": [
                {
                    "id": "brand",
                    "name": "Brand",
                    "light": { "background": "#0044ff", "foreground": "#ffffff" },
                    "dark": { "background": "#3366ff", "foreground": "#000000" }
                },
                {
                    "id": "ink",
                    "name": "Ink",
                    "light": { "background": "#111111", "foreground": "#eeeeee" },
                    "dark": { "background": "#eeeeee", "foreground": "#111111" }
                }
            ],
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        let ids: Vec<_> = config.colors.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["brand", "ink"]);
        assert_eq!(config.colors[0].dark.background, "#3366ff");
    }
}
