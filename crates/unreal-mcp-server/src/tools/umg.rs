//! UMG widget tools

use super::{ToolDef, object_schema};
use serde_json::json;

pub(super) fn tools() -> Vec<ToolDef> {
    let vec2 = json!({ "type": "array", "items": { "type": "number" }, "description": "[x, y]" });
    let color = json!({ "type": "array", "items": { "type": "number" }, "description": "[r, g, b, a] in 0..1" });

    vec![
        ToolDef::new(
            "create_umg_widget_blueprint",
            "Create a UMG Widget Blueprint.",
            object_schema(
                json!({
                    "widget_name": { "type": "string" },
                    "parent_class": { "type": "string" },
                    "path": { "type": "string", "description": "Content folder" }
                }),
                &["widget_name"],
            ),
        )
        .with_defaults(json!({ "parent_class": "UserWidget", "path": "/Game/UI" })),
        ToolDef::new(
            "add_text_block_to_widget",
            "Add a Text Block to a Widget Blueprint.",
            object_schema(
                json!({
                    "widget_name": { "type": "string" },
                    "text_block_name": { "type": "string" },
                    "text": { "type": "string" },
                    "position": vec2,
                    "size": vec2,
                    "font_size": { "type": "integer" },
                    "color": color
                }),
                &["widget_name", "text_block_name"],
            ),
        )
        .with_defaults(json!({
            "text": "",
            "position": [0.0, 0.0],
            "size": [200.0, 50.0],
            "font_size": 12,
            "color": [1.0, 1.0, 1.0, 1.0]
        })),
        ToolDef::new(
            "add_button_to_widget",
            "Add a Button to a Widget Blueprint.",
            object_schema(
                json!({
                    "widget_name": { "type": "string" },
                    "button_name": { "type": "string" },
                    "text": { "type": "string" },
                    "position": vec2,
                    "size": vec2,
                    "font_size": { "type": "integer" },
                    "color": color,
                    "background_color": color
                }),
                &["widget_name", "button_name"],
            ),
        )
        .with_defaults(json!({
            "text": "",
            "position": [0.0, 0.0],
            "size": [200.0, 50.0],
            "font_size": 12,
            "color": [1.0, 1.0, 1.0, 1.0],
            "background_color": [0.1, 0.1, 0.1, 1.0]
        })),
        ToolDef::new(
            "bind_widget_event",
            "Bind a widget component event (e.g. OnClicked) to a function.",
            object_schema(
                json!({
                    "widget_name": { "type": "string" },
                    "widget_component_name": { "type": "string" },
                    "event_name": { "type": "string" },
                    "function_name": { "type": "string", "description": "Defaults to <component>_<event> on the editor side" }
                }),
                &["widget_name", "widget_component_name", "event_name"],
            ),
        ),
        ToolDef::new(
            "add_widget_to_viewport",
            "Add a Widget Blueprint instance to the viewport.",
            object_schema(
                json!({
                    "widget_name": { "type": "string" },
                    "z_order": { "type": "integer" }
                }),
                &["widget_name"],
            ),
        )
        .with_defaults(json!({ "z_order": 0 })),
        ToolDef::new(
            "set_text_block_binding",
            "Bind a Text Block's text to a Blueprint property.",
            object_schema(
                json!({
                    "widget_name": { "type": "string" },
                    "text_block_name": { "type": "string" },
                    "binding_property": { "type": "string" },
                    "binding_type": { "type": "string" }
                }),
                &["widget_name", "text_block_name", "binding_property"],
            ),
        )
        .with_defaults(json!({ "binding_type": "Text" })),
    ]
}
