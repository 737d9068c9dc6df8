//! Level actor tools

use super::{ToolDef, object_schema};
use serde_json::json;

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "get_actors_in_level",
            "List all actors in the current level with their names, classes and transforms.",
            object_schema(json!({}), &[]),
        ),
        ToolDef::new(
            "find_actors_by_name",
            "Find actors whose name matches a pattern.",
            object_schema(
                json!({
                    "pattern": { "type": "string", "description": "Substring or wildcard pattern" }
                }),
                &["pattern"],
            ),
        ),
        ToolDef::new(
            "create_actor",
            "Create an actor in the level. Example: {\"name\": \"Cube1\", \"type\": \"CUBE\", \"location\": [0, 0, 100]}",
            object_schema(
                json!({
                    "name": { "type": "string", "description": "Unique actor name" },
                    "type": {
                        "type": "string",
                        "description": "Actor type, e.g. CUBE, SPHERE, PLANE, CYLINDER, CONE, CAMERA, LIGHT, POINT_LIGHT, SPOT_LIGHT"
                    },
                    "location": { "type": "array", "items": { "type": "number" }, "description": "[x, y, z]" },
                    "rotation": { "type": "array", "items": { "type": "number" }, "description": "[pitch, yaw, roll] in degrees" },
                    "scale": { "type": "array", "items": { "type": "number" }, "description": "[x, y, z]" }
                }),
                &["name", "type"],
            ),
        )
        .with_defaults(json!({
            "location": [0.0, 0.0, 0.0],
            "rotation": [0.0, 0.0, 0.0],
            "scale": [1.0, 1.0, 1.0]
        })),
        ToolDef::new(
            "delete_actor",
            "Delete an actor by name.",
            object_schema(
                json!({ "name": { "type": "string", "description": "Actor name" } }),
                &["name"],
            ),
        ),
        ToolDef::new(
            "set_actor_transform",
            "Set location, rotation and/or scale of an actor. Omitted parts are left unchanged.",
            object_schema(
                json!({
                    "name": { "type": "string", "description": "Actor name" },
                    "location": { "type": "array", "items": { "type": "number" } },
                    "rotation": { "type": "array", "items": { "type": "number" } },
                    "scale": { "type": "array", "items": { "type": "number" } }
                }),
                &["name"],
            ),
        ),
        ToolDef::new(
            "get_actor_properties",
            "Get all properties of an actor.",
            object_schema(
                json!({ "name": { "type": "string", "description": "Actor name" } }),
                &["name"],
            ),
        ),
    ]
}
