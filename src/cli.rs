use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use ols_boundary as json;
use ols_core::{gateways::normalization::NormalizationService, response_code::ResponseCode, usecases};

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(author, version, about = "Geocode structured Italian addresses with the RFC59 normalization service")]
struct Args {
    /// Configuration file
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Geocode a JSON request read from a file or from stdin
    Geocode {
        #[arg(value_name = "REQUEST_JSON")]
        request: Option<PathBuf>,
    },
    /// List the response codes of the normalization service
    Codes,
}

fn read_request(path: Option<&PathBuf>) -> Result<json::GeocodeRequest> {
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    Ok(serde_json::from_reader(reader)?)
}

fn geocode_json<S>(
    service: &S,
    region: &str,
    request: json::GeocodeRequest,
) -> Result<json::GeocodeResponse, usecases::Error>
where
    S: NormalizationService,
{
    let request = request.into();
    let result = usecases::geocode(service, region, &request)?;
    Ok(result.into())
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    match args.command {
        Command::Codes => {
            for code in ResponseCode::ALL {
                println!("{code}\t{code:?}");
            }
        }
        Command::Geocode { request } => {
            let cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
            let request = read_request(request.as_ref())?;
            let service = gateways::normalization_gateway(&cfg.normalization);
            match geocode_json(&service, &cfg.geocoding.region, request) {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Err(err) => {
                    log::error!("Geocoding failed: {err}");
                    let err = json::Error {
                        message: err.to_string(),
                    };
                    println!("{}", serde_json::to_string_pretty(&err)?);
                    process::exit(1);
                }
            }
        }
    }
    Ok(())
}
