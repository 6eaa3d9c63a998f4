mod community;
mod info;
mod quiz;

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{ChatId, KeyboardMarkup},
};

use crate::content;
use crate::error::StorageError;
use crate::i18n;
use crate::keyboards;
use crate::lang::Lang;
use crate::menu::{self, Route};
use crate::users::UserDirectory;
use crate::App;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Everything a handler needs to answer one message.
pub struct Ctx<'a> {
    pub bot: &'a Bot,
    pub app: &'a App,
    pub chat_id: ChatId,
    pub user_id: u64,
    pub lang: Lang,
}

impl Ctx<'_> {
    pub async fn say(&self, text: &str, keyboard: KeyboardMarkup) -> HandlerResult {
        send_text(self.bot, self.chat_id, text, Some(keyboard)).await
    }

    /// Sends `text` leaving the current keyboard in place.
    pub async fn say_plain(&self, text: &str) -> HandlerResult {
        send_text(self.bot, self.chat_id, text, None).await
    }

    pub async fn main_menu(&self, text: &str) -> HandlerResult {
        self.say(text, keyboards::main_menu(self.lang)).await
    }
}

/// Telegram rejects empty messages, so an empty text is replaced by a notice.
async fn send_text(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    keyboard: Option<KeyboardMarkup>,
) -> HandlerResult {
    let mut text = text.trim();
    if text.is_empty() {
        log::error!("Attempt to send empty message to chat {}", chat_id.0);
        text = i18n::TEMPORARILY_UNAVAILABLE.get(Lang::DEFAULT);
    }

    let request = bot.send_message(chat_id, text);
    match keyboard {
        Some(keyboard) => request.reply_markup(keyboard).await?,
        None => request.await?,
    };
    Ok(())
}

pub async fn handle_message(bot: Bot, msg: Message, app: Arc<App>) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0;
    let text = msg.text().unwrap_or_default();
    let route = menu::classify(text, &app.bot_username, app.quiz.is_active(user_id));
    log::debug!("User {} sent {:?} -> {:?}", user_id, text, route);

    let ctx = Ctx {
        bot: &bot,
        app: &app,
        chat_id: msg.chat.id,
        user_id,
        lang: app.users.language(user_id),
    };

    let result = match app.users.ensure_user(
        user_id,
        user.username.as_deref().unwrap_or_default(),
        &user.first_name,
    ) {
        Ok(_) => dispatch(&ctx, &msg, text, route).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Err(e) if e.is::<StorageError>() => {
            log::error!("Storage failure while serving user {}: {}", user_id, e);
            ctx.main_menu(i18n::TEMPORARILY_UNAVAILABLE.get(ctx.lang)).await
        }
        other => other,
    }
}

async fn dispatch(ctx: &Ctx<'_>, msg: &Message, text: &str, route: Route) -> HandlerResult {
    match route {
        Route::Start => {
            let text = format!(
                "{}\n\n{}",
                i18n::MAIN_MENU_PROMPT.get(ctx.lang),
                i18n::WELCOME.get(ctx.lang)
            );
            ctx.main_menu(&text).await
        }
        Route::MainMenu | Route::Unknown => {
            ctx.main_menu(i18n::MAIN_MENU_PROMPT.get(ctx.lang)).await
        }
        Route::LanguagePicker => {
            ctx.say(i18n::CHOOSE_LANGUAGE.get(ctx.lang), keyboards::languages())
                .await
        }
        Route::SetLanguage(lang) => {
            ctx.app.users.set_language(ctx.user_id, lang)?;
            let ctx = Ctx { lang, ..*ctx };
            ctx.main_menu(i18n::MAIN_MENU_PROMPT.get(lang)).await
        }
        Route::Info => info::about(ctx).await,
        Route::InfoMenu => info::menu(ctx).await,
        Route::Address => info::page(ctx, content::ADDRESS_AND_TRANSPORT).await,
        Route::Hours => info::page(ctx, content::HOURS_AND_PRICE).await,
        Route::Rules => info::page(ctx, content::RULES).await,
        Route::Sights => info::sights(ctx).await,
        Route::Sight(number) => info::sight(ctx, number).await,
        Route::Sos => ctx.say_plain(content::SOS.get(ctx.lang)).await,
        Route::Faq => ctx.say_plain(content::FAQ.get(ctx.lang)).await,
        Route::Profile => info::profile(ctx, msg).await,
        Route::Events => community::events(ctx).await,
        Route::Leaderboard => community::leaderboard(ctx).await,
        Route::ListUsers => community::list_users(ctx).await,
        Route::AddEvent(args) => community::add_event(ctx, &args).await,
        Route::QuizStart => quiz::start(ctx).await,
        Route::QuizExit => quiz::exit(ctx).await,
        Route::QuizAnswer => quiz::answer(ctx, text).await,
    }
}
