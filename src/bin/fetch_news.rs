use chrono::NaiveDate;
use clap::Parser;
use marketbrief::core::{config, logging};
use marketbrief::news::{DEFAULT_FROM, DEFAULT_QUERY, DEFAULT_TO};
use marketbrief::{EverythingBuilder, MarketClient, NewsConfig, NewsReport, SortBy};

#[derive(Parser)]
#[command(name = "fetch_news")]
#[command(about = "Print NewsAPI articles mentioning a company", long_about = None)]
struct Cli {
    /// Keyword to search for
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,
    /// Oldest publication date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_FROM)]
    from: NaiveDate,
    /// Newest publication date (YYYY-MM-DD)
    #[arg(long, default_value = DEFAULT_TO)]
    to: NaiveDate,
    /// publishedAt, relevancy or popularity
    #[arg(long, default_value = "publishedAt")]
    sort_by: SortBy,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing();
    config::load_dotenv();

    let news = NewsConfig::from_env();

    let report = match MarketClient::builder().news_api_key(news.api_key).build() {
        Ok(client) => {
            EverythingBuilder::new(&client, cli.query)
                .from(cli.from)
                .to(cli.to)
                .sort_by(cli.sort_by)
                .report()
                .await
        }
        Err(e) => NewsReport::from_result(Err(e)),
    };

    print!("{report}");
}
