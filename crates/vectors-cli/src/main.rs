use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use vectors_cli::commands::{self, BinaryOp, ScalarOp, UnaryOp};
use vectors_cli::config::{load_config, CliConfig};

fn vector_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    let mut cli = Command::new("vectors-cli")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Fixed-length vector arithmetic and geometry from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(Command::new("demo").about("Print a few sample vectors"))
        .subcommand(
            Command::new("equals")
                .about("Compare A and B, exactly or within a tolerance")
                .arg(vector_arg("a", "First vector, e.g. 1,2,3"))
                .arg(vector_arg("b", "Second vector"))
                .arg(
                    Arg::new("tolerance")
                        .short('t')
                        .long("tolerance")
                        .help(
                            "Absolute tolerance per element. \
                             Overrides the tolerance specified in the configuration file.",
                        )
                        .action(ArgAction::Set)
                        .allow_hyphen_values(true)
                        .value_hint(ValueHint::Other),
                ),
        );

    for op in BinaryOp::ALL {
        cli = cli.subcommand(
            Command::new(op.name())
                .about(op.about())
                .arg(vector_arg("a", "First vector, e.g. 1,2,3"))
                .arg(vector_arg("b", "Second vector")),
        );
    }
    for op in UnaryOp::ALL {
        cli = cli.subcommand(
            Command::new(op.name())
                .about(op.about())
                .arg(vector_arg("a", "Vector, e.g. 1,2,3")),
        );
    }
    for op in ScalarOp::ALL {
        cli = cli.subcommand(
            Command::new(op.name())
                .about(op.about())
                .arg(vector_arg("a", "Vector, e.g. 1,2,3"))
                .arg(
                    Arg::new("scalar")
                        .help("Scalar operand")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_hint(ValueHint::Other),
                ),
        );
    }

    cli.help_template(
        "{usage-heading} {usage}\n\n\
         {about-with-newline}\n\
         Written by {author-with-newline}Version {version}\n\n\
         {all-args}{after-help}",
    )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let (name, sub_m) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => unreachable!("Subcommand is required by CLI configuration"),
    };

    let config = match sub_m.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };

    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("VECTORS_LOG", config.log_filter()))
        .init();

    log::debug!("[Vectors] Running '{}' with config {:?}", name, config);

    match commands::run(name, sub_m, &config) {
        Ok(outcome) => {
            println!("{}", outcome);
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    }
}
