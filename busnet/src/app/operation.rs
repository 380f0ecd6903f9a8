use super::{request_ops, AppError, RequestDocument};
use crate::config::BusnetConfiguration;
use clap::{ArgAction, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

#[derive(Debug, Clone, Subcommand)]
pub enum BusnetOperation {
    /// build the transit base from the base requests and save it
    MakeBase {
        /// request document, read from stdin when omitted
        #[arg(long)]
        input: Option<String>,
        /// .toml or .json file with default routing and serialization settings
        #[arg(long)]
        configuration_file: Option<String>,
        /// replace an existing base file
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        overwrite: bool,
    },
    /// answer the stat requests against a saved transit base
    ProcessRequests {
        /// request document, read from stdin when omitted
        #[arg(long)]
        input: Option<String>,
        /// response file, written to stdout when omitted
        #[arg(long)]
        output: Option<String>,
        /// .toml or .json file with default serialization settings
        #[arg(long)]
        configuration_file: Option<String>,
    },
}

impl BusnetOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            BusnetOperation::MakeBase {
                input,
                configuration_file,
                overwrite,
            } => {
                let conf = read_configuration(configuration_file.as_ref())?;
                let document = read_document(input.as_ref())?;
                request_ops::make_base(&document, &conf, *overwrite)
            }
            BusnetOperation::ProcessRequests {
                input,
                output,
                configuration_file,
            } => {
                let conf = read_configuration(configuration_file.as_ref())?;
                let document = read_document(input.as_ref())?;
                let responses = request_ops::process_requests(&document, &conf)?;
                let writer: Box<dyn Write> = match output {
                    Some(f) => Box::new(BufWriter::new(File::create(f)?)),
                    None => Box::new(BufWriter::new(std::io::stdout().lock())),
                };
                write_responses(writer, &responses)
            }
        }
    }
}

fn read_configuration(configuration_file: Option<&String>) -> Result<BusnetConfiguration, AppError> {
    match configuration_file {
        None => Ok(BusnetConfiguration::default()),
        Some(f) => {
            log::info!("reading busnet configuration from {f}");
            BusnetConfiguration::try_from(f)
        }
    }
}

fn read_document(input: Option<&String>) -> Result<RequestDocument, AppError> {
    let reader: Box<dyn Read> = match input {
        Some(f) => {
            log::info!("reading requests from {f}");
            Box::new(File::open(f)?)
        }
        None => Box::new(std::io::stdin().lock()),
    };
    let document = serde_json::from_reader(BufReader::new(reader))?;
    Ok(document)
}

fn write_responses<W: Write, T: serde::Serialize>(mut writer: W, responses: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, responses)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
