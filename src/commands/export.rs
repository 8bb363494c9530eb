//! `export` subcommand: dump the content model as JSON.

use anyhow::Result;

use crate::content::Profile;

/// Serialize the built-in profile to a JSON string.
pub fn export_json(pretty: bool) -> Result<String> {
    let profile = Profile::builtin();
    let json = if pretty {
        serde_json::to_string_pretty(&profile)?
    } else {
        serde_json::to_string(&profile)?
    };
    Ok(json)
}

/// Print the profile JSON to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_export(pretty: bool) -> Result<()> {
    println!("{}", export_json(pretty)?);
    Ok(())
}
