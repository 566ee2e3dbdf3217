//! CLI entrypoint module structure.
use anyhow::Result;

use crate::{
    endpoint::{self, AddressContext, EndpointUrl, Scheme, UrlAddress},
    tools::EndpointResponse,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, EndpointArgs, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Execute CLI command mode and return the text to print (possibly empty).
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Endpoint(args) => {
            let json = args.json;
            let url = derive_for_args(args);
            if json {
                let payload = EndpointResponse::from(url);
                return Ok(serde_json::to_string_pretty(&payload)?);
            }
            Ok(url.into_string())
        }
    }
}

fn derive_for_args(args: EndpointArgs) -> EndpointUrl {
    if let Some(url) = args.url.as_deref() {
        return endpoint::derive_from(&UrlAddress(url));
    }
    if args.hostname.is_none() && args.port.is_none() && args.scheme.is_none() {
        return endpoint::derive(None);
    }

    let context = AddressContext {
        scheme: args.scheme.as_deref().and_then(Scheme::parse),
        hostname: args.hostname,
        port: args.port,
    };
    endpoint::derive(Some(&context))
}
