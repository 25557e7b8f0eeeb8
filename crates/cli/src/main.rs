use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use ytwav_core::pipeline::extract_audio_use_case::ExtractError;
use ytwav_core::pipeline::pipeline_logger::StageTimingLogger;
use ytwav_core::shared::request::ExtractRequest;
use ytwav_core::{default_use_case, report_success};

const USAGE: &str = "Usage: ytwav <video_id> <output_path> <duration_seconds>";

/// Extract a video's audio track as 16 kHz mono 16-bit PCM WAV.
#[derive(Parser, Debug)]
#[command(name = "ytwav", version)]
struct Cli {
    /// Video identifier (the `v=` value of a watch URL). May start with `-`.
    #[arg(allow_hyphen_values = true)]
    video_id: String,

    /// Destination WAV file. The download is staged next to it.
    output_path: PathBuf,

    /// Maximum length of the output, in whole seconds.
    duration_seconds: u32,
}

#[derive(Debug)]
enum ArgsError {
    /// `--help` or `--version`: print and exit successfully.
    Info(clap::Error),
    Usage(String),
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    process::exit(run(std::env::args_os()));
}

fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let request = match parse_request(args) {
        Ok(request) => request,
        Err(ArgsError::Info(e)) => {
            let _ = e.print();
            return 0;
        }
        Err(ArgsError::Usage(message)) => {
            println!("{message}");
            println!("{USAGE}");
            return 1;
        }
    };
    log::debug!("{request:?}");

    let mut use_case = default_use_case(Box::new(StageTimingLogger::new()));
    match use_case.execute(&request) {
        Ok(outcome) => {
            report_success(&outcome);
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn parse_request<I, T>(args: I) -> Result<ExtractRequest, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Info(e),
        _ => ArgsError::Usage(usage_detail(&e)),
    })?;

    ExtractRequest::new(cli.video_id, cli.output_path, cli.duration_seconds)
        .map_err(|e| ArgsError::Usage(format!("error: {}", ExtractError::from(e))))
}

/// clap's rendered error up to its own usage block.
fn usage_detail(e: &clap::Error) -> String {
    e.render()
        .to_string()
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
