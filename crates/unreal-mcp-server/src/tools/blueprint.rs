//! Blueprint asset tools

use super::{ToolDef, object_schema};
use serde_json::json;

pub(super) fn tools() -> Vec<ToolDef> {
    let vec3 = json!({ "type": "array", "items": { "type": "number" }, "minItems": 3, "maxItems": 3 });

    vec![
        ToolDef::new(
            "create_blueprint",
            "Create a new Blueprint class under /Game/Blueprints.",
            object_schema(
                json!({
                    "name": { "type": "string", "description": "Blueprint name" },
                    "parent_class": { "type": "string", "description": "Parent class, e.g. Actor or Pawn" }
                }),
                &["name", "parent_class"],
            ),
        ),
        ToolDef::new(
            "add_component_to_blueprint",
            "Add a component to a Blueprint. Use the component class name without the U prefix, e.g. StaticMeshComponent.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "component_type": { "type": "string" },
                    "component_name": { "type": "string" },
                    "location": vec3,
                    "rotation": vec3,
                    "scale": vec3,
                    "component_properties": { "type": "object", "description": "Additional properties to set on the component" }
                }),
                &["blueprint_name", "component_type", "component_name"],
            ),
        )
        .with_defaults(json!({
            "location": [0.0, 0.0, 0.0],
            "rotation": [0.0, 0.0, 0.0],
            "scale": [1.0, 1.0, 1.0]
        })),
        ToolDef::new(
            "set_static_mesh_properties",
            "Set the mesh of a StaticMeshComponent.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "component_name": { "type": "string" },
                    "static_mesh": { "type": "string", "description": "Mesh asset path" }
                }),
                &["blueprint_name", "component_name"],
            ),
        )
        .with_defaults(json!({ "static_mesh": "/Engine/BasicShapes/Cube.Cube" })),
        ToolDef::new(
            "set_component_property",
            "Set a property on a component of a Blueprint.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "component_name": { "type": "string" },
                    "property_name": { "type": "string" },
                    "property_value": { "description": "New value, any JSON type" }
                }),
                &["blueprint_name", "component_name", "property_name", "property_value"],
            ),
        ),
        ToolDef::new(
            "set_physics_properties",
            "Configure physics on a primitive component of a Blueprint.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "component_name": { "type": "string" },
                    "simulate_physics": { "type": "boolean" },
                    "gravity_enabled": { "type": "boolean" },
                    "mass": { "type": "number" },
                    "linear_damping": { "type": "number" },
                    "angular_damping": { "type": "number" }
                }),
                &["blueprint_name", "component_name"],
            ),
        )
        .with_defaults(json!({
            "simulate_physics": true,
            "gravity_enabled": true,
            "mass": 1.0,
            "linear_damping": 0.01,
            "angular_damping": 0.0
        })),
        ToolDef::new(
            "compile_blueprint",
            "Compile a Blueprint. Run this after changes and before spawning.",
            object_schema(json!({ "blueprint_name": { "type": "string" } }), &["blueprint_name"]),
        ),
        ToolDef::new(
            "set_blueprint_property",
            "Set a property on the Blueprint class default object.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "property_name": { "type": "string" },
                    "property_value": { "description": "New value, any JSON type" }
                }),
                &["blueprint_name", "property_name", "property_value"],
            ),
        ),
        ToolDef::new(
            "spawn_blueprint_actor",
            "Spawn an actor from a compiled Blueprint.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "actor_name": { "type": "string" },
                    "location": vec3,
                    "rotation": vec3,
                    "scale": vec3
                }),
                &["blueprint_name", "actor_name"],
            ),
        )
        .with_defaults(json!({
            "location": [0.0, 0.0, 0.0],
            "rotation": [0.0, 0.0, 0.0],
            "scale": [1.0, 1.0, 1.0]
        })),
    ]
}
