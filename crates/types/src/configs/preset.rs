use serde::{Deserialize, Serialize};

/// Header/footer preset summary for selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetMeta {
    pub id: String,
    pub label: String,
    pub is_default: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preset_list() {
        let presets: Vec<PresetMeta> = serde_json::from_value(json!([
            { "id": "minimal", "label": "Minimal", "is_default": false },
            { "id": "full", "label": "Full", "is_default": true }
        ]))
        .unwrap();
        assert_eq!(presets[1].id, "full");
        assert!(presets[1].is_default);
        assert!(serde_json::from_value::<PresetMeta>(json!({ "id": "x", "label": "X" })).is_err());
    }
}
