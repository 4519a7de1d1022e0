use anyhow::{bail, Context};
use clap::Parser;
use shop_sketch::adapters::load_products;
use shop_sketch::utils::logger;
use shop_sketch::{Catalog, ConfigProvider, Search, TomlConfig};

#[derive(Parser, Debug)]
#[command(name = "catalog-search")]
#[command(about = "Looks up products in a catalog CSV by exact name or category")]
struct Args {
    /// Catalog CSV file
    #[arg(short, long)]
    products: Option<String>,

    /// TOML configuration file providing `[catalog] products_file`
    #[arg(short, long)]
    config: Option<String>,

    /// Exact product name
    #[arg(long, conflicts_with = "category")]
    name: Option<String>,

    /// Exact category name
    #[arg(long)]
    category: Option<String>,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn resolve_products_file(args: &Args) -> anyhow::Result<String> {
    if let Some(products) = &args.products {
        return Ok(products.clone());
    }
    if let Some(path) = &args.config {
        let config = TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;
        if let Some(products_file) = config.products_file() {
            return Ok(products_file.to_string());
        }
    }
    bail!("No catalog given: pass --products or a config with [catalog] products_file")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let products_file = resolve_products_file(&args)?;
    let products = load_products(&products_file)
        .with_context(|| format!("Failed to load catalog '{}'", products_file))?;
    let catalog = Catalog::from_products(products);
    tracing::info!(
        "📦 Catalog loaded: {} name key(s), {} category key(s)",
        catalog.name_count(),
        catalog.category_count()
    );

    let matches = match (&args.name, &args.category) {
        (Some(name), _) => catalog.search_products_by_name(name),
        (None, Some(category)) => catalog.search_products_by_category(category),
        (None, None) => bail!("Pass --name or --category"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No products found");
    }
    for product in matches {
        println!(
            "{}\t{}\t{}\t{}\t{} in stock",
            product.product_id,
            product.name,
            product.category.name,
            product.price,
            product.available_count()
        );
    }

    Ok(())
}
