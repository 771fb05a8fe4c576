//! Render the collections grid for a set of filter choices.
//!
//! Usage:
//!   dove-storefront --category mens --sort price-asc
//!   dove-storefront --catalog catalog.json --search dress --load-more 1

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use dove_catalog::{CatalogView, Category, FilterCriteria, PriceBucket, Selection, SortOption};
use dove_storefront::StorefrontConfig;

#[derive(Parser, Debug)]
#[command(name = "dove-storefront")]
#[command(about = "Filter, sort and paginate the storefront catalog; prints the visible page as JSON")]
struct Cli {
    /// Catalog JSON file (overrides DOVE_CATALOG_PATH); built-in collection when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Items per page (overrides DOVE_PAGE_SIZE).
    #[arg(long)]
    page_size: Option<usize>,
    /// Category filter: all, womens, mens, accessories, kids, footwear.
    #[arg(long, default_value = "all")]
    category: Selection<Category>,
    /// Price band filter: all, low, medium, high (or 0-50, 50-100, 100+).
    #[arg(long, default_value = "all")]
    price_range: Selection<PriceBucket>,
    /// Ordering: default, price-asc, price-desc, newest.
    #[arg(long, default_value = "default")]
    sort: SortOption,
    /// Case-insensitive substring matched against titles and descriptions.
    #[arg(long, default_value = "")]
    search: String,
    /// Pages to reveal beyond the first.
    #[arg(long, default_value_t = 0)]
    load_more: usize,
}

/// Reveal up to `pages` more pages, stopping once nothing is left to show.
fn load_pages(view: &mut CatalogView, pages: usize) {
    for _ in 0..pages {
        if !view.has_more() {
            break;
        }
        view.load_more();
    }
}

fn main() -> Result<()> {
    dove_observability::init();
    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    let catalog = config.load_catalog().with_context(|| match &config.catalog_path {
        Some(path) => format!("loading catalog {}", path.display()),
        None => "loading built-in catalog".to_string(),
    })?;
    let cursor = config
        .cursor()
        .with_context(|| format!("page size {}", config.page_size))?;

    let mut view = CatalogView::with_cursor(Arc::new(catalog), cursor);
    view.set_criteria(FilterCriteria {
        category: cli.category,
        price_range: cli.price_range,
        sort: cli.sort,
        search_query: cli.search,
    });
    load_pages(&mut view, cli.load_more);

    let page = view.snapshot();
    tracing::info!(
        total = page.total,
        visible = page.visible_count,
        has_more = page.has_more,
        "collections page rendered"
    );
    let json = serde_json::to_string_pretty(&page).context("serializing catalog page")?;
    println!("{json}");
    Ok(())
}
