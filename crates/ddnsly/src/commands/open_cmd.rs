//! Open a client's DDNS link in the default browser.

use ddnsly_core::{ClientRegistry, link};
use tracing::debug;

use crate::cli::{GlobalOpts, OpenArgs};
use crate::error::CliError;

use super::find_client;

pub fn handle(
    registry: &ClientRegistry,
    args: OpenArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = find_client(registry, &args.client).ok_or_else(|| CliError::NotFound {
        resource_type: "client".into(),
        identifier: args.client.clone(),
        list_command: "clients list".into(),
    })?;

    let url = link::normalize(&client.ddns_link);
    debug!(name = %client.name, %url, "opening DDNS link");

    open::that(&url).map_err(|source| CliError::OpenFailed {
        url: url.clone(),
        source,
    })?;

    if !global.quiet {
        eprintln!("Opened {url}");
    }
    Ok(())
}
