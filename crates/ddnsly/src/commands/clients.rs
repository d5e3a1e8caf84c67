//! Client command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use ddnsly_core::{Client, ClientDraft, ClientRegistry};

use crate::cli::{CheckArgs, ClientsArgs, ClientsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::find_client;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "DDNS Link")]
    ddns_link: String,
    #[tabled(rename = "Equipment")]
    equipment: String,
}

impl From<&Client> for ClientRow {
    fn from(c: &Client) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            ddns_link: c.ddns_link.clone(),
            equipment: c.equipment.label().to_owned(),
        }
    }
}

fn detail(c: &Client) -> String {
    [
        format!("ID:         {}", c.id),
        format!("Name:       {}", c.name),
        format!("DDNS Link:  {}", c.ddns_link),
        format!("Equipment:  {}", c.equipment.label()),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(
    registry: &ClientRegistry,
    args: ClientsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ClientsCommand::List => {
            let out = output::render_list(
                &global.output,
                registry.clients(),
                |c| ClientRow::from(c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ClientsCommand::Get { client } => match find_client(registry, &client) {
            Some(c) => {
                let out = output::render_single(&global.output, c, detail, |c| c.id.to_string());
                output::print_output(&out, global.quiet);
                Ok(())
            }
            None => Err(CliError::NotFound {
                resource_type: "client".into(),
                identifier: client,
                list_command: "clients list".into(),
            }),
        },

        ClientsCommand::Check(check) => handle_check(check, global),
    }
}

/// Run a candidate through the validation rules without touching anything.
fn handle_check(args: CheckArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let draft = ClientDraft::new(
        args.name.unwrap_or_default(),
        args.link.unwrap_or_default(),
        args.equipment.map(Into::into),
    );

    let errors = ClientRegistry::validate(&draft);
    if !errors.is_empty() {
        return Err(CliError::Invalid {
            messages: errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        });
    }

    if !global.quiet {
        if output::should_color(&global.color) {
            println!("{}", "valid".green());
        } else {
            println!("valid");
        }
    }
    Ok(())
}
