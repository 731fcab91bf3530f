mod shop;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use storefront::controller::{Intent, Storefront};
use storefront::net::api::{ApiError, HttpApi, StorefrontApi};
use storefront::state::{CustomerDetails, Section};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog is empty or unreachable")]
    EmptyCatalog,
    #[error("unknown template `{0}`")]
    UnknownTemplate(String),
    #[error("order stopped in {section}: {message}")]
    Refused { section: &'static str, message: String },
    #[error("stdin read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cardshop", about = "RFID business-card storefront CLI")]
struct Cli {
    #[arg(long, env = "CARDSHOP_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Log requests and state transitions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the service answers /healthz.
    Ping,
    /// Print the template catalog.
    Catalog,
    Cart(CartCommand),
    /// Print every stored order.
    Orders,
    /// Place a one-item order through the full wizard.
    Order(OrderArgs),
    /// Interactive storefront session on stdin.
    Shop,
}

#[derive(Args, Debug)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Subcommand, Debug)]
enum CartSubcommand {
    List,
    Add(OrderArgs),
    Remove { item_id: u64 },
}

#[derive(Args, Debug)]
struct OrderArgs {
    #[arg(long)]
    template: String,
    #[command(flatten)]
    customer: CustomerArgs,
}

#[derive(Args, Debug)]
struct CustomerArgs {
    #[arg(long)]
    student_id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    institute: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    room: String,
}

impl From<CustomerArgs> for CustomerDetails {
    fn from(args: CustomerArgs) -> Self {
        Self {
            student_id: args.student_id,
            name: args.name,
            institute: args.institute,
            phone: args.phone,
            email: args.email,
            room: args.room,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let client = reqwest::Client::builder().build()?;
    let api = HttpApi::with_client(client, &cli.base_url);

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Catalog => print_json(&serde_json::to_value(api.list_templates().await?)?),
        Command::Cart(cart) => run_cart(&api, cart).await,
        Command::Orders => print_json(&serde_json::to_value(api.list_orders().await?)?),
        Command::Order(args) => run_order(api, args).await,
        Command::Shop => shop::run(Storefront::new(api)).await,
    }
}

async fn run_ping(api: &HttpApi) -> Result<(), CliError> {
    api.health().await?;
    println!("ok");
    Ok(())
}

async fn run_cart(api: &HttpApi, cart: CartCommand) -> Result<(), CliError> {
    match cart.command {
        CartSubcommand::List => print_json(&serde_json::to_value(api.list_cart().await?)?),
        CartSubcommand::Add(args) => {
            let details = CustomerDetails::from(args.customer);
            match api.add_to_cart(&details.to_add_request(&args.template)).await? {
                Some(item) => print_json(&serde_json::to_value(item)?),
                None => {
                    println!("added");
                    Ok(())
                }
            }
        }
        CartSubcommand::Remove { item_id } => {
            api.remove_from_cart(item_id).await?;
            println!("removed item #{item_id}");
            Ok(())
        }
    }
}

/// Drive select → details → preview → cart → checkout → confirmation,
/// stopping at the first step that raises an alert.
async fn run_order(api: HttpApi, args: OrderArgs) -> Result<(), CliError> {
    let mut store = Storefront::new(api);
    store.dispatch(Intent::Load).await;
    if store.state().templates.is_empty() {
        return Err(CliError::EmptyCatalog);
    }
    if store.state().template(&args.template).is_none() {
        return Err(CliError::UnknownTemplate(args.template));
    }

    let steps = [
        Intent::SelectTemplate(args.template),
        Intent::Next,
        Intent::UpdateDetails(args.customer.into()),
        Intent::SubmitDetails,
        Intent::AddToCart,
        Intent::GoToCheckout,
        Intent::ConfirmCheckout,
    ];
    for intent in steps {
        store.dispatch(intent).await;
        let alerts = store.take_alerts();
        if !alerts.is_empty() {
            return Err(CliError::Refused {
                section: store.active().as_str(),
                message: alerts.join("; "),
            });
        }
        match store.active() {
            Section::Preview | Section::Checkout | Section::Confirmation => {
                println!("{}", shop::render_section(&store));
            }
            _ => {}
        }
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
