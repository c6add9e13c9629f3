use certcache::cli::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_init() {
    let cli = Cli::try_parse_from(["certcache", "init"]).unwrap();

    assert!(matches!(cli.command, Commands::Init));
    assert!(!cli.json);
    assert!(cli.config.is_none());
    assert!(cli.database.is_none());
}

#[test]
fn test_parse_get_with_output() {
    let cli =
        Cli::try_parse_from(["certcache", "get", "example.com", "-o", "/tmp/example.pem"]).unwrap();

    match cli.command {
        Commands::Get(args) => {
            assert_eq!(args.key, "example.com");
            assert_eq!(args.output, Some(PathBuf::from("/tmp/example.pem")));
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_put_from_stdin() {
    let cli = Cli::try_parse_from(["certcache", "put", "example.com"]).unwrap();

    match cli.command {
        Commands::Put(args) => {
            assert_eq!(args.key, "example.com");
            assert!(args.file.is_none());
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_put_from_file() {
    let cli =
        Cli::try_parse_from(["certcache", "put", "example.com", "--file", "cert.pem"]).unwrap();

    match cli.command {
        Commands::Put(args) => assert_eq!(args.file, Some(PathBuf::from("cert.pem"))),
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_delete() {
    let cli = Cli::try_parse_from(["certcache", "delete", "example.com"]).unwrap();

    match cli.command {
        Commands::Delete(args) => assert_eq!(args.key, "example.com"),
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "certcache",
        "get",
        "example.com",
        "--json",
        "--config",
        "prod.yaml",
        "--database",
        "sqlite:/var/lib/certcache/certs.db",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("prod.yaml")));
    assert_eq!(
        cli.database.as_deref(),
        Some("sqlite:/var/lib/certcache/certs.db")
    );
}

#[test]
fn test_get_requires_key() {
    assert!(Cli::try_parse_from(["certcache", "get"]).is_err());
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["certcache", "renew", "example.com"]).is_err());
}
