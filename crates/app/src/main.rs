//! Storefront CLI

use std::{
    io::{self, Write},
    process,
};

use clap::{Args, Parser, Subcommand};
use storefront::{intents::Intent, orders::Address, views::confirmation::OrderConfirmationView};
use storefront_app::{
    checkout::PaymentCard,
    config::{LoggingConfig, StoreConfig},
    context::AppContext,
    intents::{TracingIntentSink, dispatch},
    links::UiResource,
    observability::init_subscriber,
};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List or search the catalog
    Products(ProductsArgs),

    /// Show the shopper's order history
    Orders,

    /// Show the confirmation page for an order token
    Order(OrderArgs),

    /// Fill the cart and check out
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
struct ProductsArgs {
    /// Search terms; `all` lists everything
    #[arg(long)]
    query: Option<String>,
}

#[derive(Debug, Args)]
struct OrderArgs {
    /// Order token as carried in the confirmation link
    #[arg(long)]
    data: String,
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Cart line as `product_id=quantity`; repeatable
    #[arg(long = "item", value_parser = parse_item, required = true)]
    items: Vec<(String, u64)>,

    /// Card number
    #[arg(long)]
    card_number: String,

    /// Card security code
    #[arg(long, default_value = "000")]
    cvv: String,

    /// Card expiry month
    #[arg(long, default_value_t = 12)]
    expiration_month: u8,

    /// Card expiry year
    #[arg(long, default_value_t = 2030)]
    expiration_year: u16,

    /// Street and number
    #[arg(long)]
    street: String,

    /// City
    #[arg(long)]
    city: String,

    /// State or region
    #[arg(long)]
    state: String,

    /// Country
    #[arg(long)]
    country: String,

    /// Postal code
    #[arg(long)]
    zip: String,
}

fn parse_item(value: &str) -> Result<(String, u64), String> {
    let (product_id, quantity) = value
        .split_once('=')
        .ok_or_else(|| format!("expected product_id=quantity, got {value:?}"))?;

    if product_id.is_empty() {
        return Err("product id cannot be empty".to_string());
    }

    let quantity = quantity
        .parse()
        .map_err(|error| format!("invalid quantity {quantity:?}: {error}"))?;

    Ok((product_id.to_string(), quantity))
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    init_subscriber(&cli.logging).map_err(|error| format!("failed to start logging: {error}"))?;

    let app = AppContext::in_memory(&cli.store)
        .await
        .map_err(|error| format!("failed to start storefront: {error}"))?;

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Products(args) => {
            write_resource(&mut out, &app.links.products(args.query.as_deref()))?;

            let page = app
                .products_page(args.query.as_deref())
                .await
                .map_err(|error| format!("failed to list products: {error}"))?;

            page.write_to(&mut out)
                .map_err(|error| format!("failed to write page: {error}"))
        }
        Commands::Orders => {
            write_resource(&mut out, &app.links.orders(&app.user_id))?;

            let page = app
                .orders_page(Some(app.user_id.as_str()))
                .await
                .map_err(|error| format!("failed to load orders: {error}"))?;

            page.write_to(&mut out)
                .map_err(|error| format!("failed to write page: {error}"))
        }
        Commands::Order(args) => OrderConfirmationView::from_query(Some(args.data.as_str()))
            .write_to(&mut out)
            .map_err(|error| format!("failed to write page: {error}")),
        Commands::Checkout(args) => checkout(&app, args, &mut out).await,
    }
}

async fn checkout(app: &AppContext, args: CheckoutArgs, out: &mut impl Write) -> Result<(), String> {
    for (product_id, quantity) in &args.items {
        app.add_to_cart(product_id, *quantity)
            .await
            .map_err(|error| format!("failed to add {product_id} to cart: {error}"))?;
    }

    let card = PaymentCard {
        number: args.card_number,
        cvv: args.cvv,
        expiration_month: args.expiration_month,
        expiration_year: args.expiration_year,
    };

    let address = Address {
        street_address: args.street,
        city: args.city,
        state: args.state,
        country: args.country,
        zip_code: args.zip,
    };

    dispatch(&TracingIntentSink, &Intent::Checkout);

    let receipt = app
        .checkout(card, address)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    write_resource(&mut *out, &receipt.confirmation)?;

    app.order_page(receipt.confirmation.iframe_url())
        .write_to(&mut *out)
        .map_err(|error| format!("failed to write page: {error}"))?;

    writeln!(out).map_err(|error| format!("failed to write page: {error}"))?;

    app.orders_page(Some(app.user_id.as_str()))
        .await
        .map_err(|error| format!("failed to load orders: {error}"))?
        .write_to(&mut *out)
        .map_err(|error| format!("failed to write page: {error}"))
}

fn write_resource(out: &mut impl Write, resource: &UiResource) -> Result<(), String> {
    let json = resource
        .to_json()
        .map_err(|error| format!("failed to encode link: {error}"))?;

    writeln!(out, "{json}").map_err(|error| format!("failed to write link: {error}"))?;
    writeln!(out).map_err(|error| format!("failed to write link: {error}"))
}
