use clap::{value_parser, Arg, ArgAction, Command};

use crate::{
    flags::{Flag, FlagKind, Schema},
    swarm,
};

pub(crate) const CREATE: &str = "create";
pub(crate) const FLAGS: &str = "flags";

fn flag_arg(flag: &Flag) -> Arg {
    let arg = Arg::new(flag.name)
        .long(flag.name)
        .env(flag.env_var)
        .help(flag.usage)
        .action(ArgAction::Set);

    let arg = match flag.kind {
        FlagKind::String => arg.value_parser(value_parser!(String)),
        FlagKind::Int => arg.value_parser(value_parser!(i64)),
    };

    match &flag.default {
        Some(default) => arg.default_value(default.render()),
        None => arg,
    }
}

fn swarm_args() -> [Arg; 3] {
    [
        Arg::new(swarm::SWARM_MASTER)
            .long(swarm::SWARM_MASTER)
            .help("Configure Machine to be a Swarm master")
            .action(ArgAction::SetTrue),
        Arg::new(swarm::SWARM_HOST)
            .long(swarm::SWARM_HOST)
            .help("ip/socket to listen on for Swarm master"),
        Arg::new(swarm::SWARM_DISCOVERY)
            .long(swarm::SWARM_DISCOVERY)
            .help("Discovery service to use with Swarm"),
    ]
}

/// Command line for the driver, with one flag per catalog entry.
pub(crate) fn command(schema: &Schema) -> Command {
    let create = Command::new(CREATE)
        .about("Resolve, validate and print the machine configuration")
        .args(schema.flags().iter().map(flag_arg))
        .args(swarm_args());

    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Harvester machine driver configuration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(create)
        .subcommand(Command::new(FLAGS).about("List the options accepted by the driver"))
}
