use teloxide::utils::command::BotCommands;

use crate::content;
use crate::i18n;
use crate::lang::Lang;
use crate::quiz::answer::normalize;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Commands:")]
pub enum Command {
    #[command(description = "show the main menu.")]
    Start,
    #[command(description = "opening hours, ticket and address.")]
    Faq,
    #[command(description = "list users (admins only).")]
    Users,
    #[command(description = "add an event: title | date | location | description (admins only).")]
    AddEvent(String),
}

/// What an incoming text asks the bot to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Start,
    MainMenu,
    LanguagePicker,
    SetLanguage(Lang),
    Info,
    InfoMenu,
    Address,
    Hours,
    Rules,
    Sights,
    Sight(usize),
    Sos,
    Profile,
    Faq,
    Events,
    Leaderboard,
    ListUsers,
    AddEvent(String),
    QuizStart,
    QuizExit,
    QuizAnswer,
    Unknown,
}

/// Buttons and commands always win. Any other text goes to the quiz while the
/// user has one running.
pub fn classify(text: &str, bot_username: &str, quiz_active: bool) -> Route {
    let text = text.trim();

    if let Ok(command) = Command::parse(text, bot_username) {
        return match command {
            Command::Start => Route::Start,
            Command::Faq => Route::Faq,
            Command::Users => Route::ListUsers,
            Command::AddEvent(args) => Route::AddEvent(args),
        };
    }

    if let Some((_, lang)) = i18n::LANGUAGE_BUTTONS.iter().find(|(label, _)| *label == text) {
        return Route::SetLanguage(*lang);
    }
    if let Some(sight) = content::sight_by_button(text) {
        return Route::Sight(sight.number);
    }

    let buttons = [
        (i18n::BTN_QUIZ, Route::QuizStart),
        (i18n::BTN_QUIZ_EXIT, Route::QuizExit),
        (i18n::BTN_INFO, Route::Info),
        (i18n::BTN_PROFILE, Route::Profile),
        (i18n::BTN_SOS, Route::Sos),
        (i18n::BTN_LANGUAGE, Route::LanguagePicker),
        (i18n::BTN_EVENTS, Route::Events),
        (i18n::BTN_LEADERBOARD, Route::Leaderboard),
        (i18n::BTN_ADDRESS, Route::Address),
        (i18n::BTN_HOURS, Route::Hours),
        (i18n::BTN_RULES, Route::Rules),
        (i18n::BTN_SIGHTS, Route::Sights),
        (i18n::BTN_BACK, Route::InfoMenu),
        (i18n::BTN_MAIN_MENU, Route::MainMenu),
    ];
    if let Some((_, route)) = buttons.into_iter().find(|(label, _)| label.matches(text)) {
        return route;
    }

    if quiz_active {
        if i18n::QUIZ_EXIT_WORDS.contains(&normalize(text).as_str()) {
            return Route::QuizExit;
        }
        return Route::QuizAnswer;
    }

    Route::Unknown
}
