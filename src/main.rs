mod config;
mod content;
mod error;
mod events;
mod handlers;
mod i18n;
mod images;
mod keyboards;
mod lang;
mod menu;
mod quiz;
mod store;
mod users;

use std::sync::Arc;

use dotenv::dotenv;
use teloxide::prelude::*;

use config::Config;
use events::EventBoard;
use images::SightImages;
use quiz::{QuestionBank, QuizEngine};
use users::{JsonUserDirectory, UserDirectory};

/// Shared state handed to every handler.
pub struct App {
    pub config: Config,
    pub bot_username: String,
    pub users: Arc<dyn UserDirectory>,
    pub quiz: QuizEngine,
    pub events: EventBoard,
    pub images: SightImages,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting dendro park bot...");

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> handlers::HandlerResult {
    let config = Config::from_env()?;
    let bot = Bot::new(config.token.clone());

    let me = bot.get_me().await?;
    let bot_username = me.user.username.clone().unwrap_or_default();
    log::info!("Logged in as @{}", bot_username);

    let users: Arc<dyn UserDirectory> = Arc::new(JsonUserDirectory::open(&config.users_file)?);
    let bank = Arc::new(QuestionBank::load(&config.quiz_file));
    let events = EventBoard::open(&config.events_file)?;
    let images = SightImages::scan(&config.images_dir);

    let app = Arc::new(App {
        quiz: QuizEngine::new(users.clone(), bank),
        users,
        events,
        images,
        bot_username,
        config,
    });

    Dispatcher::builder(
        bot,
        Update::filter_message().endpoint(handlers::handle_message),
    )
    .dependencies(dptree::deps![app])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}
