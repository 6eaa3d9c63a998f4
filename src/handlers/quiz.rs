use crate::i18n;
use crate::keyboards;
use crate::quiz::{Current, Submission};

use super::{Ctx, HandlerResult};

pub async fn start(ctx: &Ctx<'_>) -> HandlerResult {
    ctx.app.quiz.start(ctx.user_id)?;
    ctx.say_plain(i18n::QUIZ_START.get(ctx.lang)).await?;
    ask_current(ctx).await
}

pub async fn exit(ctx: &Ctx<'_>) -> HandlerResult {
    ctx.app.quiz.stop(ctx.user_id)?;
    ctx.main_menu(i18n::QUIZ_EXIT_CONFIRM.get(ctx.lang)).await
}

pub async fn answer(ctx: &Ctx<'_>, text: &str) -> HandlerResult {
    match ctx.app.quiz.submit_answer(ctx.user_id, text)? {
        Submission::Answered(verdict) => {
            if verdict.correct {
                ctx.say_plain(i18n::ANSWER_CORRECT.get(ctx.lang)).await?;
            } else {
                let reply = i18n::answer_wrong(
                    ctx.lang,
                    &verdict.correct_answer,
                    verdict.explanation.as_deref(),
                );
                ctx.say_plain(&reply).await?;
            }
            ask_current(ctx).await
        }
        Submission::Unrecognized(question) => {
            ctx.say(
                i18n::PICK_FROM_BUTTONS.get(ctx.lang),
                keyboards::answers(ctx.lang, &question.options),
            )
            .await
        }
        Submission::Finished { score, total } => {
            ctx.main_menu(&i18n::quiz_finished(ctx.lang, score, total))
                .await
        }
        Submission::NoSession => ctx.main_menu(i18n::MAIN_MENU_PROMPT.get(ctx.lang)).await,
    }
}

/// Shows the next question, or the final score once the questions run out.
async fn ask_current(ctx: &Ctx<'_>) -> HandlerResult {
    match ctx.app.quiz.current_question(ctx.user_id)? {
        Current::Question(question) => {
            ctx.say(
                &i18n::question_text(&question),
                keyboards::answers(ctx.lang, &question.options),
            )
            .await
        }
        Current::Finished { score, total } => {
            log::info!("User {} finished quiz with {}/{}", ctx.user_id, score, total);
            ctx.main_menu(&i18n::quiz_finished(ctx.lang, score, total))
                .await
        }
        Current::NoSession => ctx.main_menu(i18n::MAIN_MENU_PROMPT.get(ctx.lang)).await,
    }
}
