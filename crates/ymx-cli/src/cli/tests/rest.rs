//! Tests for the remaining subcommands.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_fetch() {
    match parse(&["ymx", "fetch", "https://www.youtube.com/@chan"]) {
        CliCommand::Fetch { url } => assert_eq!(url, "https://www.youtube.com/@chan"),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_external() {
    match parse(&["ymx", "external", "https://example.com/talk.webm"]) {
        CliCommand::External { url, filename } => {
            assert_eq!(url, "https://example.com/talk.webm");
            assert!(filename.is_none());
        }
        _ => panic!("expected External"),
    }
}

#[test]
fn cli_parse_external_filename() {
    match parse(&[
        "ymx",
        "external",
        "https://example.com/talk.webm",
        "--filename",
        "talk.mp3",
    ]) {
        CliCommand::External { filename, .. } => {
            assert_eq!(filename.as_deref(), Some("talk.mp3"));
        }
        _ => panic!("expected External with --filename"),
    }
}

#[test]
fn cli_parse_cancel() {
    match parse(&["ymx", "cancel", "abc123"]) {
        CliCommand::Cancel { id } => assert_eq!(id, "abc123"),
        _ => panic!("expected Cancel"),
    }
}

#[test]
fn cli_parse_downloads() {
    assert!(matches!(parse(&["ymx", "downloads"]), CliCommand::Downloads));
}

#[test]
fn cli_parse_save() {
    match parse(&["ymx", "save", "MyChannel/song.mp3"]) {
        CliCommand::Save { file, out, delete } => {
            assert_eq!(file, "MyChannel/song.mp3");
            assert!(out.is_none());
            assert!(!delete);
        }
        _ => panic!("expected Save"),
    }
}

#[test]
fn cli_parse_save_delete_out() {
    match parse(&[
        "ymx",
        "save",
        "MyChannel/song.mp3",
        "--out",
        "/tmp/song.mp3",
        "--delete",
    ]) {
        CliCommand::Save { out, delete, .. } => {
            assert_eq!(out.as_deref(), Some(std::path::Path::new("/tmp/song.mp3")));
            assert!(delete);
        }
        _ => panic!("expected Save with --out --delete"),
    }
}

#[test]
fn cli_parse_delete() {
    match parse(&["ymx", "delete", "MyChannel/song.mp3"]) {
        CliCommand::Delete { file } => assert_eq!(file, "MyChannel/song.mp3"),
        _ => panic!("expected Delete"),
    }
}
