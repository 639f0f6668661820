use clap::Parser;
use rootwalk_domain::{CliOverrides, DnsQuery, RecordType};
use std::net::Ipv4Addr;
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS resolver that walks the delegation chain from a root server")]
struct Cli {
    /// Domain names to resolve
    #[arg(required = true, value_name = "DOMAIN")]
    domains: Vec<String>,

    /// Record type to ask for (A, NS, AAAA, MX, TXT, TYPE<n>, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Forward to this recursive server instead of walking from the root
    #[arg(long, value_name = "IP")]
    via: Option<Ipv4Addr>,

    /// Root server to start from
    #[arg(long, value_name = "IP")]
    root: Option<Ipv4Addr>,

    /// Maximum nameserver queries per resolution
    #[arg(long)]
    max_hops: Option<usize>,

    /// Per-query receive timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Send one query to the root (or --via server) and print the whole response
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root,
        forwarder: cli.via,
        max_hops: cli.max_hops,
        query_timeout_ms: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    debug!("Starting rootwalk v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config).await?;

    if cli.dump {
        let server = config.resolver.forwarder.unwrap_or(config.resolver.root_server);
        for domain in &cli.domains {
            let message = services
                .client
                .query(server, domain, cli.record_type)
                .await?;
            println!("{}", message);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut failed = false;
    for domain in &cli.domains {
        let query = DnsQuery::new(domain.as_str(), cli.record_type);
        match services.resolve_domain.execute(&query).await {
            Ok(resolution) => println!("{} {} {}", domain, cli.record_type, resolution.data),
            Err(e) => {
                eprintln!("{}: {}", domain, e);
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
