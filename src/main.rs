//! # rest-api
//!
//! Performs a single `GET` against a server and prints the response body.
//!
//! ```text,no_run
//! $ rest-api --server localhost --port 8474 --path /proxies
//! Response:
//!  {"proxies": {}}
//! ```
//!
//! See `rest-api --help` for usage.

use anyhow::Result;
use clap::{App, Arg};
use log::LevelFilter;
use rest_api::reqwest::Method;
use rest_api::{ClientConfig, HttpClient, ReqwestHttpClient, RestApi, Target};
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let matches = App::new("rest-api")
        .version(VERSION)
        .about("Performs a GET request and prints the response")
        .arg(
            Arg::with_name("SERVER")
                .long("server")
                .help("The server IP or FQDN")
                .default_value("localhost"),
        )
        .arg(
            Arg::with_name("PORT")
                .long("port")
                .help("The server port")
                .default_value("8474")
                .validator(is_valid_port),
        )
        .arg(
            Arg::with_name("PATH")
                .long("path")
                .help("The query path")
                .default_value("/"),
        )
        .arg(
            Arg::with_name("USER")
                .short("u")
                .long("user")
                .takes_value(true)
                .help("Username for HTTP basic authentication"),
        )
        .arg(
            Arg::with_name("PASSWORD")
                .short("p")
                .long("password")
                .takes_value(true)
                .requires("USER")
                .help("Password for HTTP basic authentication"),
        )
        .arg(
            Arg::with_name("ACCEPT_INVALID_CERT")
                .short("k")
                .long("danger-accept-invalid-certs")
                .help("Skips certificate validation"),
        )
        .arg(
            Arg::with_name("TIMEOUT")
                .long("timeout")
                .default_value("30")
                .help("Request timeout in seconds, 0 disables it")
                .validator(is_valid_timeout),
        )
        .arg(
            Arg::with_name("DEBUG")
                .short("d")
                .long("debug")
                .help("Traces requests and responses"),
        )
        .usage("rest-api [OPTIONS]")
        .get_matches();

    let server = matches.value_of("SERVER").unwrap();
    let port = matches.value_of("PORT").unwrap();
    let path = matches.value_of("PATH").unwrap();
    let timeout: u64 = matches.value_of("TIMEOUT").unwrap().parse()?;
    let ignore_certificates = matches.is_present("ACCEPT_INVALID_CERT");
    let debug = matches.is_present("DEBUG");

    env_logger::Builder::from_default_env()
        .filter_level(if debug {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        })
        .init();

    let mut config = ClientConfig::new(format!("http://{}:{}", server, port))
        .ignore_ssl(ignore_certificates)
        .timeout(match timeout {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        })
        .debug(debug);
    if let Some(user) = matches.value_of("USER") {
        config = config.basic_auth(user, matches.value_of("PASSWORD").map(String::from));
    }

    let client = ReqwestHttpClient::create(config)?;
    let mut response = String::new();
    let mut api = RestApi::new(Method::GET, path).with_response(Target::text(&mut response));
    if let Err(e) = client.execute(&mut api) {
        println!("Error: {}", e);
    }
    drop(api);
    println!("Response:\n {}", response);

    Ok(())
}

fn is_valid_port(val: String) -> Result<(), String> {
    match val.parse::<u16>() {
        Ok(port) if port > 0 => Ok(()),
        _ => Err(String::from("Port is not a valid port number")),
    }
}

fn is_valid_timeout(val: String) -> Result<(), String> {
    val.parse::<u64>()
        .map(|_| ())
        .map_err(|_| String::from("Timeout is not a valid number of seconds"))
}
