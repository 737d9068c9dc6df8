//! Editor viewport tools

use super::{ToolDef, object_schema};
use serde_json::json;

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "focus_viewport",
            "Focus the viewport on an actor or a location. Provide either target or location.",
            object_schema(
                json!({
                    "target": { "type": "string", "description": "Actor name to focus on" },
                    "location": { "type": "array", "items": { "type": "number" }, "description": "[x, y, z]" },
                    "distance": { "type": "number", "description": "Camera distance from the target" },
                    "orientation": { "type": "array", "items": { "type": "number" }, "description": "[pitch, yaw, roll]" }
                }),
                &[],
            ),
        )
        .with_defaults(json!({ "distance": 1000.0 })),
        ToolDef::new(
            "take_screenshot",
            "Capture the active viewport to an image file.",
            object_schema(
                json!({
                    "filename": { "type": "string", "description": "Output file name" },
                    "show_ui": { "type": "boolean", "description": "Include editor UI in the capture" },
                    "resolution": { "type": "array", "items": { "type": "integer" }, "description": "[width, height]" }
                }),
                &["filename"],
            ),
        )
        .with_defaults(json!({ "show_ui": false })),
    ]
}
