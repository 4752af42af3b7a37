pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "unicrm-api")]
#[command(about = "UniCRM API - courses and leads over HTTP")]
#[command(version)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve,

    #[command(about = "Print a signed access token for local testing")]
    Token {
        #[arg(long, help = "Subject claim (sub)")]
        sub: String,
        #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },

    #[command(about = "Print a random refresh token")]
    RefreshToken,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::handle().await,
        Commands::Token { sub, hours } => commands::token::access_token(&sub, hours),
        Commands::RefreshToken => {
            commands::token::refresh_token();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["unicrm-api"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_token_command() {
        let cli = Cli::try_parse_from(["unicrm-api", "token", "--sub", "alice", "--hours", "2"]).unwrap();
        match cli.command {
            Some(Commands::Token { sub, hours }) => {
                assert_eq!(sub, "alice");
                assert_eq!(hours, Some(2));
            }
            _ => panic!("expected token command"),
        }
    }

    #[test]
    fn token_command_requires_subject() {
        assert!(Cli::try_parse_from(["unicrm-api", "token"]).is_err());
    }
}
