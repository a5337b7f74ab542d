use clap::Arg;
use clap::Command;
use clap_complete::Shell;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn build() -> Command {
    return Command::new("tally-term")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tally Terminal: enter course grades, get the class average")
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to a TOML configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::InitialCourses.to_string())
                .long(ConfigKey::InitialCourses.to_string())
                .help(format!(
                    "How many course rows the form opens with [default: {}]",
                    Config::default(ConfigKey::InitialCourses)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::LogFile.to_string())
                .long(ConfigKey::LogFile.to_string())
                .help("Where logs are written; the terminal itself stays clean of output")
                .num_args(1),
        )
        .subcommand(
            Command::new("completions")
                .about("Generates shell completions")
                .arg(
                    Arg::new("shell")
                        .short('s')
                        .long("shell")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .help("Which shell to generate completions for"),
                ),
        );
}
