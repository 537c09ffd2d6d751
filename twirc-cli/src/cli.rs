use std::path::PathBuf;

use clap::Parser;
use twirc_core::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "twirc",
    version,
    about = "Accessible IRC client: one text area for the conversation and your input"
)]
pub struct Cli {
    /// the IRC server to connect to
    pub server: String,
    /// the nick to be used
    pub nick: String,
    /// the channel's name
    pub channel: String,
    /// the port to connect to [default: 6667]
    #[arg(short, long)]
    pub port: Option<u16>,
    /// should the connection use SSL?
    #[arg(short, long)]
    pub ssl: bool,
    /// the username to be used
    #[arg(short, long)]
    pub username: Option<String>,
    /// the password to be used
    #[arg(short = 'w', long)]
    pub password: Option<String>,
    /// configuration file [default: config/twirc.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            ssl: self.ssl,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
