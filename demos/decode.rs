use clap::Parser;
use std::{fs, path::PathBuf, process::ExitCode};
use tracing::error;
use zabbix_event::{Config, Decoder};

/// Zabbix event.get result decoder example
#[derive(Debug, Parser)]
struct Opts {
    /// Optional decoder configuration yaml file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file holding the `result` array of an event.get call
    pub events: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();

    let cfg: Config = match opts.config.as_ref() {
        Some(p) => Config::from_yaml_str(&fs::read_to_string(p).unwrap()).unwrap(),
        None => Config::default(),
    };

    let json = fs::read_to_string(&opts.events).unwrap();

    let decoder = Decoder::new(&cfg);

    match decoder.decode_json_list(&json) {
        Ok(events) => {
            for ev in events {
                println!(
                    "{} [{}] {} ({} hosts, ack={})",
                    ev.timestamp.to_rfc3339(),
                    ev.severity(),
                    ev.name,
                    ev.hosts.len(),
                    ev.acknowledged
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
