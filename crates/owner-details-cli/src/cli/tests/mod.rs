//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_show() {
    match parse(&["owner-details", "show", "1"]) {
        CliCommand::Show {
            owner_id,
            base_url,
            json,
        } => {
            assert_eq!(owner_id, "1");
            assert!(base_url.is_none());
            assert!(!json);
        }
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_with_overrides() {
    match parse(&[
        "owner-details",
        "show",
        "42",
        "--base-url",
        "http://gateway:8080/",
        "--json",
    ]) {
        CliCommand::Show {
            owner_id,
            base_url,
            json,
        } => {
            assert_eq!(owner_id, "42");
            assert_eq!(base_url.as_deref(), Some("http://gateway:8080/"));
            assert!(json);
        }
        _ => panic!("expected Show with overrides"),
    }
}

#[test]
fn cli_parse_show_keeps_id_verbatim() {
    match parse(&["owner-details", "show", "george-1"]) {
        CliCommand::Show { owner_id, .. } => assert_eq!(owner_id, "george-1"),
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_config_path() {
    match parse(&["owner-details", "config-path"]) {
        CliCommand::ConfigPath => {}
        _ => panic!("expected ConfigPath"),
    }
}

#[test]
fn cli_show_requires_owner_id() {
    assert!(Cli::try_parse_from(["owner-details", "show"]).is_err());
}
