use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payflow::application::orchestrator::TransactionOrchestrator;
use payflow::domain::ports::{AuthorizationGatewayBox, PresentationContext};
use payflow::domain::request::{DEFAULT_CALLBACK_URL, DEFAULT_CURRENCY, FlowConfig};
use payflow::infrastructure::scripted::ScriptedAuthorizationGateway;
use payflow::interfaces::csv::report_writer::{AttemptRecord, ReportWriter};
use payflow::interfaces::csv::request_reader::RequestReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Currency applied when a request omits one
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    default_currency: String,

    /// Callback URL applied when a request omits one
    #[arg(long, default_value = DEFAULT_CALLBACK_URL)]
    callback_url: String,

    /// Resolve every authorization as not completed instead of completed
    #[arg(long, conflicts_with = "fail_launch")]
    decline: bool,

    /// Fail while launching the authorization flow instead of resolving it
    #[arg(long)]
    fail_launch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let gateway: AuthorizationGatewayBox = if cli.fail_launch {
        Box::new(ScriptedAuthorizationGateway::failing_launch(
            "authorization flow unavailable",
        ))
    } else if cli.decline {
        Box::new(ScriptedAuthorizationGateway::declining())
    } else {
        Box::new(ScriptedAuthorizationGateway::completing())
    };

    let config = FlowConfig {
        default_currency: cli.default_currency,
        default_callback_url: cli.callback_url,
    };
    let orchestrator = TransactionOrchestrator::with_config(gateway, config);
    let context = PresentationContext::new("terminal");

    // Process requests
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let mut attempts = Vec::new();
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => {
                let reference = request.reference.trim().to_string();
                match orchestrator.initiate(&request, Some(&context)).await {
                    Ok(outcome) => attempts.push(AttemptRecord { reference, outcome }),
                    Err(e) => eprintln!("Error processing request: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    // Output final report
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_attempts(attempts).into_diagnostic()?;

    Ok(())
}
