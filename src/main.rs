use food_log::config::{self, env};
use food_log::core::report::{
    self, CatalogListing, Dashboard, DaySummary, format_amount, format_progress_bar,
};
use food_log::entities::Metric;
use food_log::errors::Result;
use food_log::store;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, then settings
    env::load_dotenv();
    let config_path = env::config_path().inspect_err(|e| error!("{}", e))?;
    let settings = config::load_settings(config_path)
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 3. Pin the report date once; everything below takes it as a parameter
    let date = env::report_date().inspect_err(|e| error!("{}", e))?;
    info!("Building reports for {}", date);

    // 4. Load data
    let paths = &settings.data;
    let catalog = store::load_catalog(&paths.catalog)
        .inspect_err(|e| error!("Failed to load catalog: {}", e))?;
    let inventory = store::load_inventory(&paths.inventory)
        .inspect_err(|e| error!("Failed to load inventory: {}", e))?;
    let goals =
        store::load_goals(&paths.goals).inspect_err(|e| error!("Failed to load goals: {}", e))?;
    let logs = store::load_logs(&paths.logs_dir)
        .inspect_err(|e| error!("Failed to load daily logs: {}", e))?;

    // 5. Build and print
    let today = store::log_for_date(&logs, date);
    let dashboard = report::build_dashboard(date, &today, &catalog, &inventory, &goals);
    let history = report::build_history(&logs, &catalog, &goals);
    let listing = report::build_catalog_listing(&catalog);

    print_dashboard(&dashboard);
    print_history(&history);
    print_catalog(&listing);

    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("Daily Food Log - {}", dashboard.date);
    for card in &dashboard.cards {
        let goal = if card.goal.is_empty() { "N/A" } else { card.goal.as_str() };
        println!(
            "  {:<13} {:>8} / {:<6} {}",
            card.metric.label(),
            format_amount(card.current, card.metric),
            goal,
            format_progress_bar(card.percent, None)
        );
    }
    println!("  Calorie status: {}", dashboard.calories_status);

    println!();
    println!("Today's Log");
    if dashboard.log_rows.is_empty() {
        println!("  No food logged yet today.");
    }
    for row in &dashboard.log_rows {
        let tag = if row.modified { " [Modified]" } else { "" };
        println!(
            "  [{}] {}{} - {} kcal, {}g P / {}g C / {}g F",
            row.brand,
            row.product,
            tag,
            row.nutrients.calories_kcal,
            row.nutrients.protein_g,
            row.nutrients.carbohydrate_g,
            row.nutrients.fat_g
        );
    }

    println!();
    println!("Current Inventory");
    for row in &dashboard.inventory_rows {
        println!(
            "  [{}] {} x{} {} - {} kcal, {}g / {}g / {}g",
            row.brand,
            row.product,
            row.quantity,
            row.unit,
            row.nutrients.calories_kcal,
            row.nutrients.protein_g,
            row.nutrients.carbohydrate_g,
            row.nutrients.fat_g
        );
    }
}

fn print_history(history: &[DaySummary]) {
    println!();
    println!("History");
    for day in history {
        println!(
            "  {}  {:>6} kcal  {:>6}  {}",
            day.date,
            day.totals.calories_kcal,
            format_amount(day.totals.protein_g, Metric::Protein),
            day.calories_status
        );
    }
}

fn print_catalog(listing: &CatalogListing) {
    println!();
    println!("Food Database - {} Items Cataloged", listing.count);
    for row in &listing.rows {
        let flavor = if row.flavor.is_empty() {
            String::new()
        } else {
            format!(" ({})", row.flavor)
        };
        println!(
            "  [{}] {}{} - {} kcal, {}g protein",
            row.brand, row.product, flavor, row.nutrients.calories_kcal, row.nutrients.protein_g
        );
    }
}
