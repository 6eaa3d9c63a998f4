use teloxide::{prelude::*, types::InputFile};

use crate::content;
use crate::i18n::{self, Tr};
use crate::keyboards;

use super::{Ctx, HandlerResult};

pub async fn about(ctx: &Ctx<'_>) -> HandlerResult {
    let text = format!(
        "{}\n\n{}",
        i18n::MAIN_MENU_PROMPT.get(ctx.lang),
        content::ABOUT.get(ctx.lang)
    );
    ctx.say(&text, keyboards::info(ctx.lang)).await
}

pub async fn menu(ctx: &Ctx<'_>) -> HandlerResult {
    ctx.say(i18n::MAIN_MENU_PROMPT.get(ctx.lang), keyboards::info(ctx.lang))
        .await
}

pub async fn page(ctx: &Ctx<'_>, page: Tr) -> HandlerResult {
    ctx.say(page.get(ctx.lang), keyboards::info(ctx.lang)).await
}

pub async fn sights(ctx: &Ctx<'_>) -> HandlerResult {
    ctx.say(i18n::MAIN_MENU_PROMPT.get(ctx.lang), keyboards::sights(ctx.lang))
        .await
}

/// Sends the sight's photo with its caption, falling back to a document and
/// then to the caption alone.
pub async fn sight(ctx: &Ctx<'_>, number: usize) -> HandlerResult {
    let keyboard = keyboards::sights(ctx.lang);
    let Some(sight) = content::sight(number) else {
        return ctx.say(i18n::TEMPORARILY_UNAVAILABLE.get(ctx.lang), keyboard).await;
    };
    let caption = sight.caption.get(ctx.lang);

    let Some(path) = ctx.app.images.get(number) else {
        return ctx.say(caption, keyboard).await;
    };

    log::info!("Sending image {} for sight {}", path.display(), number);
    let photo = ctx
        .bot
        .send_photo(ctx.chat_id, InputFile::file(path.to_path_buf()))
        .caption(caption)
        .reply_markup(keyboard.clone())
        .await;
    let Err(e) = photo else {
        return Ok(());
    };
    log::error!("Failed to send {} as photo, trying as document: {}", path.display(), e);

    let document = ctx
        .bot
        .send_document(ctx.chat_id, InputFile::file(path.to_path_buf()))
        .caption(caption)
        .reply_markup(keyboard.clone())
        .await;
    match document {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed document fallback for {}: {}", path.display(), e);
            ctx.say(i18n::FILE_UNAVAILABLE.get(ctx.lang), keyboard).await
        }
    }
}

pub async fn profile(ctx: &Ctx<'_>, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let text = i18n::profile(ctx.lang, &user.full_name(), user.username.as_deref());
    ctx.main_menu(&text).await
}
