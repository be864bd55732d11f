use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use dashboard_lib::config::MockConfig;
use dashboard_lib::menu::app_routes;
use dashboard_lib::menu::derive_menu;
use dashboard_lib::menu::normalize_routes;
use dashboard_lib::menu::resolve_active;
use dashboard_lib::mock::GenericTableService;
use dashboard_lib::mock::OrderTableService;
use dashboard_lib::mock::PageRequest;
use dashboard_lib::mock::ProductTableService;
use dashboard_lib::mock::SearchParams;
use dashboard_lib::mock::TableService;
use dashboard_lib::mock::UserListService;
use dashboard_lib::mock::UserTableService;
use dashboard_lib::store::TableConfigStore;
use log::debug;
use serde_json::json;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Inspect the dashboard menu, table template and mock data services")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived navigation menu
    Menu {
        /// Also resolve the selected and open keys for this path
        #[arg(long)]
        path: Option<String>,
    },
    /// Print a table config created from the default template
    DefaultConfig {
        #[arg(long, default_value = "Untitled table")]
        name: String,
    },
    /// Fetch one page from a mock data service
    Fetch {
        service: ServiceKind,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        page_size: u32,

        /// Search parameter as key=value (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Override the service's simulated latency
        #[arg(long, env = "DASHBOARD_MOCK_LATENCY_MS")]
        latency_ms: Option<u64>,

        /// Seed for reproducible random fields
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ServiceKind {
    Generic,
    Users,
    Orders,
    Products,
    UserList,
}

impl ServiceKind {
    fn build(self, config: &MockConfig) -> Box<dyn TableService> {
        match self {
            Self::Generic => Box::new(GenericTableService::with_config(config)),
            Self::Users => Box::new(UserTableService::with_config(config)),
            Self::Orders => Box::new(OrderTableService::with_config(config)),
            Self::Products => Box::new(ProductTableService::with_config(config)),
            Self::UserList => Box::new(UserListService::with_config(config)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")?;

    let output = match cli.command {
        Commands::Menu { path } => menu(path.as_deref())?,
        Commands::DefaultConfig { name } => default_config(name)?,
        Commands::Fetch {
            service,
            page,
            page_size,
            params,
            latency_ms,
            seed,
        } => {
            let mut config = MockConfig::new();
            if let Some(ms) = latency_ms {
                config = config.with_latency(Duration::from_millis(ms));
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            fetch(service.build(&config), PageRequest::new(page, page_size), &params).await?
        }
    };

    println!("{}", output);
    Ok(())
}

fn menu(path: Option<&str>) -> anyhow::Result<String> {
    let items = derive_menu(&normalize_routes(&app_routes()));
    let value = match path {
        Some(path) => json!({
            "menu": items,
            "active": resolve_active(path, &items),
        }),
        None => serde_json::to_value(&items)?,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn default_config(name: String) -> anyhow::Result<String> {
    let mut store = TableConfigStore::new();
    let created = store.create(name, None);
    Ok(serde_json::to_string_pretty(&created)?)
}

async fn fetch(service: Box<dyn TableService>, page: PageRequest, raw: &[String]) -> anyhow::Result<String> {
    let params = raw
        .iter()
        .map(|pair| SearchParams::parse_pair(pair))
        .collect::<Result<SearchParams, _>>()
        .context("Invalid --param")?;

    debug!("Fetching {} page {:?}", service.name(), page);
    let result = service.fetch(&page, &params).await;
    Ok(serde_json::to_string_pretty(&result)?)
}
