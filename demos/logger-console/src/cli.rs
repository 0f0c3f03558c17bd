use networking_logger_plugin::networking::HttpMethod;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the simulated request
    #[clap(long, default_value = "https://api.example.com/users")]
    pub url: String,

    /// HTTP method of the simulated request
    #[clap(long, default_value = "POST")]
    pub method: HttpMethod,

    /// Request header as "Name: value", may be repeated
    #[clap(long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// JSON body sent with the request
    #[clap(long)]
    pub body: Option<String>,

    /// Status code the simulated server answers with
    #[clap(long, default_value_t = 200)]
    pub status: u16,

    /// Raw response body returned by the simulated server
    #[clap(long, default_value = r#"{"ok":true}"#)]
    pub response: String,

    /// Simulate a request that cannot be built instead of a round trip
    #[clap(long)]
    pub unparseable: bool,

    /// Comma separated fields to log (can also be set via NETWORKING_LOGGER_FIELDS env var)
    #[clap(long, env = "NETWORKING_LOGGER_FIELDS")]
    pub fields: Option<String>,

    /// Append log lines to this file instead of printing them
    #[clap(short, long, env = "NETWORKING_LOGGER_FILE")]
    pub log_file: Option<std::path::PathBuf>,

    /// Enable verbose informational messages.
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_file(&self) -> Option<&std::path::Path> {
        self.log_file.as_deref()
    }
}
