use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;

use crate::cli::ListArgs;
use crate::columns::ColumnLayout;
use crate::error::NetworkError;
use crate::index::IndexClient;

pub fn run(args: ListArgs, mirror: &str) -> Result<ExitCode> {
    if !args.remote {
        println!("Sorry, we cannot list local installs yet.");
        return Ok(ExitCode::SUCCESS);
    }

    let printed = report_remote(
        remote_versions(mirror),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(if printed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn remote_versions(mirror: &str) -> Result<Vec<String>, NetworkError> {
    IndexClient::new(mirror)?.lts_versions()
}

/// Prints the LTS table to `out`, or the offline message to `err`.
/// Nothing reaches `out` when the fetch failed. Returns whether the table was printed.
fn report_remote(
    versions: Result<Vec<String>, NetworkError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    match versions {
        Ok(versions) => {
            let layout = ColumnLayout::new(versions);
            log::debug!("[list] {} rows", layout.row_count());
            layout.render(out)?;
            Ok(true)
        }
        Err(e) => {
            log::debug!("[index] {}", e);
            writeln!(err, "{}", NetworkError::USER_MESSAGE)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(versions: Result<Vec<String>, NetworkError>) -> (String, String, bool) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let printed = report_remote(versions, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            printed,
        )
    }

    #[test]
    fn success_prints_table_only_to_stdout() {
        let (out, err, printed) = report(Ok(vec!["v20.11.1".into(), "v18.19.1".into()]));
        assert!(printed);
        assert!(err.is_empty());
        assert!(out.starts_with("Node.js LTS versions available to download:\n\n"));
        assert!(out.contains("v20.11.1    \tv18.19.1    \t    \t\n"));
        assert!(out.contains("ron --lts"));
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let (out, err, printed) = report(Ok(Vec::new()));
        assert!(printed);
        assert!(err.is_empty());
        assert_eq!(out.lines().count(), 7);
    }

    #[test]
    fn parse_failure_prints_one_line_to_stderr() {
        let failure = crate::index::parse_index("not json").map(|_| Vec::new());
        let (out, err, printed) = report(failure);
        assert!(!printed);
        assert!(out.is_empty());
        assert_eq!(err, "Could not fetch remote versions. Are you offline?\n");
    }

    #[test]
    fn remote_table_over_http() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/index.json")
            .with_status(200)
            .with_body(r#"[{"version": "v21.6.2", "lts": false}, {"version": "v20.11.1", "lts": "Iron"}]"#)
            .create();

        let (out, err, printed) = report(remote_versions(&server.url()));
        assert!(printed);
        assert!(err.is_empty());
        assert!(out.contains("v20.11.1    \t    \t    \t\n"));
        assert!(!out.contains("v21.6.2"));
    }

    #[test]
    fn http_error_status_prints_offline_message() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/index.json").with_status(404).create();

        let (out, err, printed) = report(remote_versions(&server.url()));
        assert!(!printed);
        assert!(out.is_empty());
        assert_eq!(err, "Could not fetch remote versions. Are you offline?\n");
    }

    #[test]
    fn invalid_mirror_url_prints_offline_message() {
        let (out, err, printed) = report(remote_versions("not a url"));
        assert!(!printed);
        assert!(out.is_empty());
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn unreachable_mirror_prints_offline_message() {
        let (out, err, printed) = report(remote_versions("http://127.0.0.1:1"));
        assert!(!printed);
        assert!(out.is_empty());
        assert_eq!(err.lines().collect::<Vec<_>>(), vec![NetworkError::USER_MESSAGE]);
    }
}
