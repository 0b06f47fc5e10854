//! curl - Transfer data from or to a server
//!
//! No network access: a fixed set of hosts answer with canned responses and
//! everything else fails name resolution.

use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct CurlCommand;

struct CannedResponse {
    host: &'static str,
    content_type: &'static str,
    body: &'static str,
}

const RESPONSES: &[CannedResponse] = &[
    CannedResponse {
        host: "api.github.com",
        content_type: "application/json; charset=utf-8",
        body: "{\n  \"login\": \"example\",\n  \"public_repos\": 42,\n  \"followers\": 1337\n}",
    },
    CannedResponse {
        host: "example.com",
        content_type: "text/html; charset=UTF-8",
        body: "<!doctype html>\n<html>\n<head><title>Example Domain</title></head>\n<body><h1>Example Domain</h1></body>\n</html>",
    },
    CannedResponse { host: "wttr.in", content_type: "text/plain; charset=utf-8", body: "Weather report: Portfolio\n\n  \\  /   Partly cloudy\n _ /\"\".-.  21 °C" },
    CannedResponse { host: "ifconfig.me", content_type: "text/plain", body: "203.0.113.42" },
];

#[derive(Default)]
struct CurlOptions {
    method: Option<String>,
    include_headers: bool,
    head_only: bool,
    verbose: bool,
    url: Option<String>,
}

fn parse_options(args: &[String]) -> Result<CurlOptions, String> {
    let mut opts = CurlOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-X" | "--request" => {
                i += 1;
                let method = args.get(i).ok_or("curl: option -X: requires parameter")?;
                opts.method = Some(method.to_uppercase());
            }
            "-i" | "--include" => opts.include_headers = true,
            "-I" | "--head" => opts.head_only = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-s" | "--silent" | "-L" | "--location" | "-sL" | "-Ls" => {}
            other if other.starts_with('-') => return Err(format!("curl: option {}: is unknown", other)),
            url => opts.url = Some(url.to_string()),
        }
        i += 1;
    }
    Ok(opts)
}

/// Host part of a URL, scheme and path stripped.
fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    authority.split(':').next().unwrap_or(authority)
}

impl Command for CurlCommand {
    fn name(&self) -> &'static str {
        "curl"
    }

    fn description(&self) -> &'static str {
        "Transfer a URL (simulated)"
    }

    fn usage(&self) -> &'static str {
        "curl [-i] [-I] [-v] [-X METHOD] url"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let opts = match parse_options(&ctx.args) {
            Ok(o) => o,
            Err(msg) => return vec![OutputLine::error(msg)],
        };
        let Some(url) = opts.url.as_deref() else {
            return vec![
                OutputLine::error("curl: try 'curl --help' for more information"),
            ];
        };

        let host = host_of(url);
        let Some(response) = RESPONSES.iter().find(|r| r.host.eq_ignore_ascii_case(host)) else {
            return vec![OutputLine::error(format!("curl: (6) Could not resolve host: {}", host))];
        };

        let method = opts.method.as_deref().unwrap_or(if opts.head_only { "HEAD" } else { "GET" });
        let headers = [
            format!("content-type: {}", response.content_type),
            format!("content-length: {}", response.body.len()),
            "server: folio-edge".to_string(),
        ];

        let mut out = Vec::new();
        if opts.verbose {
            out.push(OutputLine::output(format!("*   Trying {}:443...", host)));
            out.push(OutputLine::output(format!("> {} / HTTP/1.1", method)));
            out.push(OutputLine::output(format!("> Host: {}", host)));
            out.push(OutputLine::output(">"));
            out.push(OutputLine::output("< HTTP/1.1 200 OK"));
            out.extend(headers.iter().map(|h| OutputLine::output(format!("< {}", h))));
            out.push(OutputLine::output("<"));
        } else if opts.include_headers || opts.head_only {
            out.push(OutputLine::output("HTTP/1.1 200 OK"));
            out.extend(headers.iter().map(|h| OutputLine::output(h.clone())));
            if !opts.head_only {
                out.push(OutputLine::output(""));
            }
        }

        if !opts.head_only {
            out.extend(response.body.lines().map(OutputLine::output));
        }
        out
    }
}
