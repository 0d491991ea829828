//! Action listing

use anyhow::Result;

use ginny_core::{action_definitions, ASSISTANT_INSTRUCTIONS};

pub fn cmd_actions(json: bool, instructions: bool) -> Result<()> {
    if instructions {
        println!("{}", ASSISTANT_INSTRUCTIONS);
        return Ok(());
    }

    let definitions = action_definitions();
    if json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    println!("🤖 Assistant actions ({})", definitions.len());
    println!();
    for definition in &definitions {
        println!(
            "  {}({})",
            definition.name,
            param_summary(&definition.input_schema)
        );
        println!("      {}", definition.description);
    }
    Ok(())
}

/// `category, amount` style list of a schema's properties; optional ones get a `?`
pub fn param_summary(schema: &serde_json::Value) -> String {
    let required: Vec<&str> = schema["required"]
        .as_array()
        .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    schema["properties"]
        .as_object()
        .map(|props| {
            props
                .keys()
                .map(|name| {
                    if required.contains(&name.as_str()) {
                        name.clone()
                    } else {
                        format!("{}?", name)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
