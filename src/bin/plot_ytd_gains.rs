use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use marketbrief::core::{config, logging};
use marketbrief::download::{DEFAULT_END, DEFAULT_START, DEFAULT_SYMBOLS, utc_midnight};
use marketbrief::{
    ChartSpec, DEFAULT_CHART_FILE, DownloadBuilder, GainTable, MarketClient, MarketError, chart,
};

#[derive(Parser)]
#[command(name = "plot_ytd_gains")]
#[command(about = "Plot year-to-date percentage gains for a set of tickers")]
#[command(long_about = "Plot year-to-date percentage gains for a set of tickers.\n\n\
Chart text uses the font named by MARKETBRIEF_FONT, then a system sans-serif font, \
then a bundled copy of DejaVu Sans.")]
struct Cli {
    /// Comma-separated ticker symbols
    #[arg(short, long, value_delimiter = ',', default_values = DEFAULT_SYMBOLS)]
    tickers: Vec<String>,
    /// First day of the window (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_START)]
    start: NaiveDate,
    /// Day after the last day of the window (YYYY-MM-DD, exclusive)
    #[arg(long, default_value = DEFAULT_END)]
    end: NaiveDate,
    /// Where to write the PNG
    #[arg(short, long, default_value = DEFAULT_CHART_FILE)]
    output: PathBuf,
    /// Save the chart without opening it
    #[arg(long)]
    no_show: bool,
}

async fn run(cli: Cli) -> Result<(), MarketError> {
    let client = MarketClient::builder().build()?;

    let start = utc_midnight(cli.start);
    let end = utc_midnight(cli.end);

    let result = DownloadBuilder::new(&client)
        .symbols(cli.tickers.iter().map(|s| s.trim().to_uppercase()))
        .between(start, end)
        .run()
        .await?;

    let table = GainTable::from_download(&result)?;
    for (symbol, gain) in table.iter() {
        println!("{symbol}: {gain:.2}%");
    }

    let symbols: Vec<&str> = table.symbols().collect();
    let spec = ChartSpec::ytd(&symbols, cli.start.year()).output(cli.output);
    let path = chart::render_bar_chart(&table, &spec)?;
    println!("Chart saved to {}", path.display());

    if !cli.no_show {
        chart::show(&path);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing();
    config::load_dotenv();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
