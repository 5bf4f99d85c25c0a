use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use roster_server::{RosterServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn effective_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    config.cors |= args.cors;
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = effective_config(&args)?;
    println!("{} Roster server on {}", "🚀".bold(), config.bind_addr.to_string().bold());
    RosterServer::new(config)
        .serve()
        .await
        .context("server failed")
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn serve_args(config: Option<&Path>, bind: Option<&str>, cors: bool) -> ServeArgs {
        ServeArgs {
            bind: bind.map(|b| b.parse().unwrap()),
            cors,
            config: config.map(Path::to_path_buf),
        }
    }

    #[test]
    fn defaults_without_file() {
        let config = effective_config(&serve_args(None, None, false)).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:4000\"").unwrap();

        let from_file = effective_config(&serve_args(Some(file.path()), None, false)).unwrap();
        assert_eq!(from_file.bind_addr.port(), 4000);

        let overridden =
            effective_config(&serve_args(Some(file.path()), Some("0.0.0.0:5000"), true)).unwrap();
        assert_eq!(overridden.bind_addr, "0.0.0.0:5000".parse().unwrap());
        assert!(overridden.cors);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = effective_config(&serve_args(Some(&path), None, false)).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
