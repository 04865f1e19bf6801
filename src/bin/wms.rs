// ABOUTME: Command-line front end for the SMS PDU codec: decode, dump or build PDUs given as hex
// ABOUTME: Prints one JSON status object per invocation; user errors come back as {"error": ...}

use argh::FromArgs;
use serde::Serialize;
use sms_pdu::hex::parse_hex;
use sms_pdu::pdu::{DecodedMessage, SendRequest};
use sms_pdu::status::{ErrorStatus, MessageStatus, RawStatus, parse_optional_index};
use sms_pdu::PduError;
use std::process::ExitCode;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Decode and encode SMS PDUs as used by modem message storage
#[derive(FromArgs)]
struct CliArgs {
    /// log decode diagnostics to stderr
    #[argh(switch, short = 'd')]
    debug: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Decode(DecodeArgs),
    Raw(RawArgs),
    Send(SendArgs),
}

/// Decode a stored SMS PDU into named fields
#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
struct DecodeArgs {
    /// storage index the PDU was read from
    #[argh(option)]
    index: Option<String>,

    /// the PDU as hex
    #[argh(positional)]
    pdu: String,
}

/// Dump a PDU as space-separated hex octets
#[derive(FromArgs)]
#[argh(subcommand, name = "raw")]
struct RawArgs {
    /// storage index the PDU was read from
    #[argh(option)]
    index: Option<String>,

    /// the PDU as hex
    #[argh(positional)]
    pdu: String,
}

/// Build an SMS-SUBMIT PDU
#[derive(FromArgs)]
#[argh(subcommand, name = "send")]
struct SendArgs {
    /// the service centre number, e.g. +12025550100
    #[argh(option)]
    smsc: Option<String>,

    /// the recipient telephone number
    #[argh(option)]
    target: Option<String>,

    /// send as a class 0 (flash) message
    #[argh(switch)]
    flash: bool,

    /// the message text
    #[argh(positional)]
    text: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Pdu(#[from] PduError),

    #[error("Unable to render status: {0}")]
    Render(#[from] serde_json::Error),
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Decode(args) => {
            let index = parse_optional_index(args.index.as_deref())?;
            let pdu = parse_hex(&args.pdu)?;
            let message = DecodedMessage::decode(&pdu)?;
            to_json(&MessageStatus::from(&message).with_index(index))
        }
        Command::Raw(args) => {
            let index = parse_optional_index(args.index.as_deref())?;
            let pdu = parse_hex(&args.pdu)?;
            to_json(&RawStatus::new(&pdu).with_index(index))
        }
        Command::Send(args) => {
            let mut builder = SendRequest::builder().flash(args.flash);
            if let Some(smsc) = args.smsc {
                builder = builder.smsc(smsc);
            }
            if let Some(target) = args.target {
                builder = builder.target(target);
            }
            let pdu = builder.build(args.text)?.encode()?;
            to_json(&RawStatus::new(&pdu))
        }
    }
}

fn to_json<T: Serialize>(status: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(status)?)
}

fn main() -> ExitCode {
    let cli_args: CliArgs = argh::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli_args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Unable to install log subscriber: {err}");
    }

    match run(cli_args.command) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let status = ErrorStatus::new(&err);
            match serde_json::to_string_pretty(&status) {
                Ok(json) => println!("{json}"),
                Err(_) => println!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}
