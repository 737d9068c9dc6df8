//! MCP prompts

use serde::Serialize;

/// Prompt definition for MCP prompts/list
#[derive(Debug, Clone, Serialize)]
pub struct PromptDef {
    pub name: &'static str,
    pub description: &'static str,
}

const BEST_PRACTICES_NAME: &str = "unreal_best_practices";

const BEST_PRACTICES: &str = "\
# Unreal MCP tools and best practices

## Actors
- Use `find_actors_by_name` to check whether an actor exists before creating or modifying it.
- `create_actor` needs a unique name. Types include CUBE, SPHERE, PLANE, CYLINDER, CONE, CAMERA, LIGHT, POINT_LIGHT, SPOT_LIGHT.
- Location is [x, y, z] in Unreal units, rotation is [pitch, yaw, roll] in degrees, scale is [x, y, z] multipliers.
- Clean up temporary actors with `delete_actor`.

## Blueprints
- Create with `create_blueprint`, add components with `add_component_to_blueprint`, then configure them with `set_component_property`, `set_static_mesh_properties` or `set_physics_properties`.
- Always run `compile_blueprint` after changes and before `spawn_blueprint_actor`.

## Graph nodes
- Node tools return node ids; pass them to `connect_blueprint_nodes` with pin names.
- Use `find_blueprint_nodes` to look up existing event nodes before adding duplicates.
- Input actions need a mapping from `create_input_mapping`.

## Widgets
- Create with `create_umg_widget_blueprint`, add text blocks and buttons, bind events, then `add_widget_to_viewport`.

## Errors
- Every tool returns `{ok, payload, error_text}`. Check `ok` before continuing a multi-step workflow.
- Commands are not retried automatically. Re-sending a create command after a timeout may create a duplicate, so look the object up first.
";

/// Get list of available prompts
pub fn list_prompts() -> Vec<PromptDef> {
    vec![PromptDef {
        name: BEST_PRACTICES_NAME,
        description: "Best practices for driving the Unreal editor through these tools",
    }]
}

/// Get the messages for a prompt, if it exists
pub fn get_prompt(name: &str) -> Option<serde_json::Value> {
    match name {
        BEST_PRACTICES_NAME => Some(serde_json::json!({
            "description": "Best practices for driving the Unreal editor through these tools",
            "messages": [{
                "role": "user",
                "content": { "type": "text", "text": BEST_PRACTICES }
            }]
        })),
        _ => None,
    }
}
