//! Finchboard terminal dashboard.
//!
//! Fetches the current financial state from the remote API, runs the
//! derived-state computations, and prints the result. `dashboard export
//! <transactions|splits|budgets>` runs a CSV export instead.

use chrono::Datelike;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finchboard_client::{ApiClient, ExportFilters, ExportKind, Exporter};
use finchboard_client::export::HttpTransport;
use finchboard_core::breakdown::{ASSET_PALETTE, LIABILITY_PALETTE, aggregate};
use finchboard_core::budget::{BudgetService, BudgetStatus, SpendProgress};
use finchboard_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finchboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    match std::env::args().nth(1).as_deref() {
        Some("export") => {
            let kind: ExportKind = std::env::args()
                .nth(2)
                .ok_or_else(|| anyhow::anyhow!("usage: dashboard export <transactions|splits|budgets>"))?
                .parse()
                .map_err(anyhow::Error::msg)?;
            run_export(&config, kind).await
        }
        _ => run_overview(&config).await,
    }
}

async fn run_export(config: &AppConfig, kind: ExportKind) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&config.api)?;
    let exporter = Exporter::new(
        transport,
        config.api.access_token.clone(),
        config.export.output_dir.clone(),
    );
    let saved = exporter.run(kind, &ExportFilters::default()).await?;
    if let Some(saved) = saved {
        info!(path = %saved.path.display(), bytes = saved.bytes_written, "export complete");
        println!("Saved {} to {}", kind.label(), saved.path.display());
    }
    Ok(())
}

async fn run_overview(config: &AppConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let today = chrono::Local::now().date_naive();

    print_budget(&client, today.year(), today.month()).await?;
    print_net_worth(&client).await;
    print_metrics(&client).await;

    Ok(())
}

async fn print_budget(client: &ApiClient, year: i32, month: u32) -> anyhow::Result<()> {
    println!("== Budget {year}-{month:02} ==");
    let Some(period) = client.budget_period(year, month).await? else {
        println!("No budget created for this month yet.");
        return Ok(());
    };

    let summary = BudgetService::summarize(&period);
    let status = match summary.status {
        BudgetStatus::Balanced => "Balanced",
        BudgetStatus::Unallocated => "Unallocated",
        BudgetStatus::OverBudget => "Over Budget",
    };
    println!("Income:    {}", period.income);
    println!("Allocated: {}", summary.total_allocated);
    println!("Remaining: {} ({status})", summary.remaining);

    // Category icons come from the template catalog when names match.
    let templates = client.category_templates().await.unwrap_or_default();
    for allocation in &period.allocations {
        let icon = templates
            .iter()
            .find(|template| template.name == allocation.category)
            .and_then(|template| template.icon.as_deref())
            .unwrap_or(" ");
        let standing = BudgetService::allocation_standing(allocation.spent, allocation.allocated);
        match standing.overspend {
            Some(overage) => println!(
                "  {icon} {}: {} of {}, over budget by {overage}",
                allocation.category, allocation.spent, allocation.allocated
            ),
            None => {
                let progress = match standing.progress {
                    SpendProgress::Empty => "empty",
                    SpendProgress::Low => "low",
                    SpendProgress::Moderate => "moderate",
                    SpendProgress::High => "high",
                    SpendProgress::Over => "over",
                };
                println!(
                    "  {icon} {}: {} of {} ({progress})",
                    allocation.category, allocation.spent, allocation.allocated
                );
            }
        }
    }
    Ok(())
}

async fn print_net_worth(client: &ApiClient) {
    println!("== Net Worth ==");
    match client.net_worth_summary().await {
        Ok(summary) => {
            println!("Net worth:   {}", summary.net_worth);
            println!("Assets:      {}", summary.total_assets);
            println!("Liabilities: {}", summary.total_liabilities);
            if let (Some(change), Some(pct)) =
                (summary.change_30_days, summary.change_30_days_pct)
            {
                println!("30d change:  {change} ({})", pct.signed_string());
            }
        }
        Err(err) if err.is_expected_absence() => {
            println!("No net worth data yet.");
        }
        Err(err) => warn!(code = err.error_code(), "net worth summary unavailable: {err}"),
    }

    match client.net_worth_alerts().await {
        Ok(alerts) => {
            for alert in alerts {
                println!("{} {}", alert.severity.icon(), alert.message);
            }
        }
        Err(err) => warn!(code = err.error_code(), "alerts unavailable: {err}"),
    }

    if let Ok(entries) = client.asset_breakdown().await {
        for slice in aggregate(entries, ASSET_PALETTE) {
            println!("  {} {} ({})", slice.label, slice.amount, slice.percent);
        }
    }
    if let Ok(entries) = client.liability_breakdown().await {
        for slice in aggregate(entries, LIABILITY_PALETTE) {
            println!("  {} {} ({})", slice.label, slice.amount, slice.percent);
        }
    }
}

async fn print_metrics(client: &ApiClient) {
    println!("== Invoices ==");
    match client.metrics_summary().await {
        Ok(metrics) => {
            println!(
                "Outstanding: {} ({} invoices)",
                metrics.outstanding_total, metrics.outstanding_count
            );
            println!(
                "Overdue:     {} ({} invoices)",
                metrics.overdue_total, metrics.overdue_count
            );
        }
        Err(err) if err.is_expected_absence() => println!("No invoices yet."),
        Err(err) => warn!(code = err.error_code(), "invoice metrics unavailable: {err}"),
    }

    if let Ok(invoices) = client.invoices().await {
        for invoice in invoices.iter().filter(|i| i.balance_due.is_positive()) {
            println!(
                "  {} [{}] due {}",
                invoice.invoice_number,
                invoice.status,
                invoice.balance_due
            );
        }
    }
}
