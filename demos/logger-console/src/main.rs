mod cli;

use clap::Parser;
use log::info;
use networking_logger_plugin::prelude::*;
use std::collections::BTreeMap;

/// Request description assembled from the command line
struct CommandLineService {
    url: String,
    method: HttpMethod,
    headers: BTreeMap<String, String>,
    body: Option<serde_json::Value>,
}

impl CommandLineService {
    fn from_args(args: &cli::Args) -> Result<Self, String> {
        let mut headers = BTreeMap::new();
        for header in &args.headers {
            let (name, value) = header
                .split_once(':')
                .ok_or_else(|| format!("Invalid header, expected \"Name: value\": {header}"))?;
            headers.insert(name.trim().to_string(), value.trim().to_string());
        }

        let body = args
            .body
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| format!("Invalid JSON body: {e}"))?;

        Ok(Self {
            url: args.url.clone(),
            method: args.method,
            headers,
            body,
        })
    }
}

impl NetworkingService for CommandLineService {
    type Input = serde_json::Value;

    fn url(&self) -> String {
        self.url.clone()
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn headers(&self) -> Option<BTreeMap<String, String>> {
        Some(self.headers.clone()).filter(|h| !h.is_empty())
    }

    fn input(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

fn build_plugin(args: &cli::Args) -> Result<NetworkingLoggerPlugin, String> {
    let configuration = match args.fields.as_deref() {
        Some(fields) => LoggerConfiguration::from_fields_str(fields),
        None => LoggerConfiguration::from_env(),
    }
    .map_err(|e| e.to_string())?
    // the demo exists to show output, whatever the build profile
    .with_logging_enabled(true);

    let plugin = NetworkingLoggerPlugin::from_configuration(configuration);
    match args.log_file() {
        Some(path) => {
            let sink = WriterSink::append_to(path)
                .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
            Ok(plugin.with_sink(sink))
        }
        None => Ok(plugin),
    }
}

/// Events a networking client would report for the simulated request.
fn lifecycle(args: &cli::Args) -> Vec<NetworkingPluginEvent> {
    if args.unparseable {
        return vec![NetworkingPluginEvent::UnableToParseRequest];
    }

    let status = NetworkingStatus::new(args.status);
    let data = args.response.clone().into_bytes();
    let response = if status.is_success() {
        NetworkingPluginEvent::Success { data, status }
    } else {
        NetworkingPluginEvent::ResponseError { data, status }
    };
    vec![NetworkingPluginEvent::DataRequested, response]
}

fn main() {
    env_logger::init();
    let args = cli::Args::parse();

    let service = CommandLineService::from_args(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });

    let plugin = build_plugin(&args).unwrap_or_else(|e| {
        eprintln!("Failed to create logger plugin: {e}");
        std::process::exit(1);
    });

    if args.verbose {
        info!("Logging fields: {:?}", plugin.fields());
        if let Some(path) = args.log_file() {
            info!("Log file path: {}", path.display());
        }
    }

    let encoder = JsonEncoder::new();
    let decoder = JsonDecoder::new();
    for event in lifecycle(&args) {
        plugin.body(&service, &event, &encoder, &decoder);
    }
}
