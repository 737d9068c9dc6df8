//! Blueprint event graph tools

use super::{ToolDef, object_schema};
use serde_json::json;

pub(super) fn tools() -> Vec<ToolDef> {
    let position = json!({
        "type": "array",
        "items": { "type": "number" },
        "description": "[x, y] position in the graph"
    });
    let at_origin = json!({ "node_position": [0, 0] });

    vec![
        ToolDef::new(
            "add_blueprint_event_node",
            "Add an event node (e.g. BeginPlay, Tick) to a Blueprint's event graph. Returns the node id.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "event_type": { "type": "string", "description": "Event name, e.g. BeginPlay" },
                    "node_position": position
                }),
                &["blueprint_name", "event_type"],
            ),
        )
        .with_defaults(at_origin.clone()),
        ToolDef::new(
            "add_blueprint_input_action_node",
            "Add an input action event node. Returns the node id.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "action_name": { "type": "string" },
                    "node_position": position
                }),
                &["blueprint_name", "action_name"],
            ),
        )
        .with_defaults(at_origin.clone()),
        ToolDef::new(
            "add_blueprint_function_node",
            "Add a function call node. target is the component or class owning the function.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "target": { "type": "string" },
                    "function_name": { "type": "string" },
                    "params": { "type": "object", "description": "Pin default values" },
                    "node_position": position
                }),
                &["blueprint_name", "target", "function_name"],
            ),
        )
        .with_defaults(json!({ "params": {}, "node_position": [0, 0] })),
        ToolDef::new(
            "add_blueprint_get_self_component_reference",
            "Add a node that references a component owned by the Blueprint.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "component_name": { "type": "string" },
                    "node_position": position
                }),
                &["blueprint_name", "component_name"],
            ),
        )
        .with_defaults(at_origin.clone()),
        ToolDef::new(
            "add_blueprint_self_reference",
            "Add a Get Self node.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "node_position": position
                }),
                &["blueprint_name"],
            ),
        )
        .with_defaults(at_origin),
        ToolDef::new(
            "connect_blueprint_nodes",
            "Connect an output pin of one node to an input pin of another.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "source_node_id": { "type": "string" },
                    "source_pin": { "type": "string" },
                    "target_node_id": { "type": "string" },
                    "target_pin": { "type": "string" }
                }),
                &[
                    "blueprint_name",
                    "source_node_id",
                    "source_pin",
                    "target_node_id",
                    "target_pin",
                ],
            ),
        ),
        ToolDef::new(
            "add_blueprint_variable",
            "Add a member variable to a Blueprint.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "variable_name": { "type": "string" },
                    "variable_type": { "type": "string", "description": "e.g. Boolean, Integer, Float, Vector, String" },
                    "is_exposed": { "type": "boolean", "description": "Editable on instances" }
                }),
                &["blueprint_name", "variable_name", "variable_type"],
            ),
        )
        .with_defaults(json!({ "is_exposed": false })),
        ToolDef::new(
            "find_blueprint_nodes",
            "Find nodes in a Blueprint's event graph, optionally filtered by node and event type.",
            object_schema(
                json!({
                    "blueprint_name": { "type": "string" },
                    "node_type": { "type": "string", "description": "e.g. Event" },
                    "event_type": { "type": "string", "description": "e.g. BeginPlay" }
                }),
                &["blueprint_name"],
            ),
        ),
        ToolDef::new(
            "create_input_mapping",
            "Create a project input action mapping.",
            object_schema(
                json!({
                    "action_name": { "type": "string" },
                    "key": { "type": "string", "description": "Key name, e.g. SpaceBar" },
                    "input_type": { "type": "string", "description": "Action or Axis" }
                }),
                &["action_name", "key"],
            ),
        )
        .with_defaults(json!({ "input_type": "Action" })),
    ]
}
