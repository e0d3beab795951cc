// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
mod helper;

use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use console::Style;
use helper::{exit_with_js_error, format_capabilities, format_descriptor, json_to_value};
use ownprop_vm::{
    ecmascript::{
        abstract_operations::type_conversion::to_object,
        execution::{Agent, DefaultHostHooks, HostHooks, LegacyHost, Options},
        types::Value,
    },
    get_own_property_descriptor,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Object.getOwnPropertyDescriptor across host profiles
#[derive(Debug, ClapParser)] // requires `derive` feature
#[command(name = "ownprop")]
#[command(about = "Object.getOwnPropertyDescriptor across host profiles", long_about = None)]
struct Cli {
    /// Log every capability check
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Probes a host and prints the strategy it gets
    Probe {
        #[arg(long, value_enum, default_value_t = HostArg::Default)]
        host: HostArg,

        /// Ignore the host's native primitive
        #[arg(long)]
        force_fallback: bool,

        /// Probe every host profile
        #[arg(long, conflicts_with = "host")]
        all: bool,
    },

    /// Prints the descriptor of one own property
    Describe {
        #[arg(long, value_enum, default_value_t = HostArg::Default)]
        host: HostArg,

        /// Ignore the host's native primitive
        #[arg(long)]
        force_fallback: bool,

        /// The target as JSON, or as raw text with --string
        #[arg(short, long)]
        target: String,

        /// The property key
        #[arg(short, long)]
        key: String,

        /// Treat the target as a string primitive instead of JSON
        #[arg(long)]
        string: bool,

        /// Box a primitive target before the lookup
        #[arg(long)]
        boxed: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HostArg {
    Default,
    Evergreen,
    Es3,
    Es3WithoutAccessors,
    Es5,
    PrimitiveTargetsRejected,
    SymbolKeysStringified,
    DomOnly,
    DomBroken,
    StringIndexBroken,
    OrdinaryObjectsRejected,
}

impl HostArg {
    fn host_hooks(self) -> &'static dyn HostHooks {
        match self {
            HostArg::Default => &DefaultHostHooks,
            HostArg::Evergreen => &LegacyHost::Evergreen,
            HostArg::Es3 => &LegacyHost::Es3,
            HostArg::Es3WithoutAccessors => &LegacyHost::Es3WithoutAccessors,
            HostArg::Es5 => &LegacyHost::Es5,
            HostArg::PrimitiveTargetsRejected => &LegacyHost::PrimitiveTargetsRejected,
            HostArg::SymbolKeysStringified => &LegacyHost::SymbolKeysStringified,
            HostArg::DomOnly => &LegacyHost::DomOnly,
            HostArg::DomBroken => &LegacyHost::DomBroken,
            HostArg::StringIndexBroken => &LegacyHost::StringIndexBroken,
            HostArg::OrdinaryObjectsRejected => &LegacyHost::OrdinaryObjectsRejected,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let label = Style::new().cyan().bold();
    match args.command {
        Command::Probe {
            host,
            force_fallback,
            all,
        } => {
            let hosts: Vec<HostArg> = if all {
                HostArg::value_variants().to_vec()
            } else {
                vec![host]
            };
            for host in hosts {
                let name = host
                    .to_possible_value()
                    .map(|value| value.get_name().to_owned())
                    .unwrap_or_default();
                debug!(host = %name, "probing host");
                let agent = Agent::new(Options { force_fallback }, host.host_hooks());
                let resolver = agent.descriptor_resolver();
                println!("{}: {}", label.apply_to(&name), resolver.strategy());
                if !all {
                    print!("{}", format_capabilities(&resolver.capabilities()));
                }
            }
        }
        Command::Describe {
            host,
            force_fallback,
            target,
            key,
            string,
            boxed,
        } => {
            let mut agent = Agent::new(Options { force_fallback }, host.host_hooks());
            debug!(strategy = %agent.descriptor_resolver().strategy(), "describing");
            let target = if string {
                Value::from_string(&mut agent, target)
            } else {
                let json: serde_json::Value = serde_json::from_str(&target)?;
                json_to_value(&mut agent, &json)
                    .unwrap_or_else(|err| exit_with_js_error(&mut agent, err))
            };
            let target = if boxed && target.is_primitive() && !target.is_nullish() {
                to_object(&mut agent, target)
                    .map(Value::Object)
                    .unwrap_or_else(|err| exit_with_js_error(&mut agent, err))
            } else {
                target
            };
            let key = Value::from_string(&mut agent, key);
            let desc = get_own_property_descriptor(&mut agent, target, key)
                .unwrap_or_else(|err| exit_with_js_error(&mut agent, err));
            println!("{}", format_descriptor(&mut agent, desc));
        }
    }

    Ok(())
}
