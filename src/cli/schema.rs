//! Schema command

use boolmin::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let name = args.first().map(|s| s.as_str()).unwrap_or("result");

    let schema = match name {
        "request" => schemars::schema_for!(SimplifyRequest),
        "result" | "simplification" => schemars::schema_for!(Simplification),
        "config" => schemars::schema_for!(Config),
        other => {
            return Err(format!(
                "Unknown schema '{}'. Available: request, result, config",
                other
            )
            .into())
        }
    };

    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
