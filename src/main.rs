use std::env;

use dotenv::dotenv;
use log::info;

pub mod api;
pub mod config;
pub mod errors;
pub mod functions;
pub mod pages;
pub mod structs;
pub mod utils;


use api::SupabaseClient;
use config::Config;
use pages::{ExploreGrid, Header, LoginForm, LoginOutcome, PortfolioView};
use structs::{CenterLabel, Route, SessionContext};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let session = SessionContext::new();
    let client = SupabaseClient::new(&config, session.clone())?;
    let mut header = Header::new(&session);

    let mut explore = ExploreGrid::new();
    explore.load(&client).await;
    for card in explore.cards() {
        info!("{} | {} | YTD {} | {}", card.name, card.bio, card.ytd_return, card.subscribe_label);
    }
    if let Some(notice) = explore.empty_notice() {
        info!("{notice}");
    }

    // Optional: show the allocation of an account
    let (email, password) = match (env::var("SHAREFOLIO_EMAIL"), env::var("SHAREFOLIO_PASSWORD")) {
        (Ok(email), Ok(password)) => (email, password),
        _ => return Ok(()),
    };
    let mut login = LoginForm::new();
    login.email = email;
    login.password = password;
    let owner = match login.login(&client).await {
        LoginOutcome::Redirect(Route::Portfolio(owner)) => owner,
        _ => {
            info!("Login failed: {}", login.error.unwrap_or_default());
            return Ok(());
        }
    };
    header.refresh();
    info!("Navigation: {:?}", header.items());

    let portfolio = PortfolioView::load(&client, owner).await;
    match (portfolio.chart(), portfolio.center_label()) {
        (Some(slices), Some(CenterLabel::Total { value, assets })) => {
            info!("{value} in {assets}");
            for slice in slices {
                info!("{:<8} {:>6}% {}", slice.label, slice.percentage, slice.color);
            }
        }
        _ => info!("{}", portfolio.empty_chart_notice().unwrap_or_default()),
    }

    header.logout(&client).await;
    Ok(())
}
