use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::content::SIGHTS;
use crate::i18n::{self, Tr};
use crate::lang::Lang;

fn rows(lang: Lang, rows: &[&[Tr]]) -> KeyboardMarkup {
    KeyboardMarkup::new(
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|label| KeyboardButton::new(label.get(lang)))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>(),
    )
}

pub fn main_menu(lang: Lang) -> KeyboardMarkup {
    rows(
        lang,
        &[
            &[i18n::BTN_QUIZ],
            &[i18n::BTN_INFO],
            &[i18n::BTN_PROFILE],
            &[i18n::BTN_EVENTS, i18n::BTN_LEADERBOARD],
            &[i18n::BTN_SOS],
            &[i18n::BTN_LANGUAGE],
        ],
    )
}

pub fn languages() -> KeyboardMarkup {
    KeyboardMarkup::new(
        i18n::LANGUAGE_BUTTONS
            .iter()
            .map(|(label, _)| vec![KeyboardButton::new(*label)])
            .collect::<Vec<_>>(),
    )
}

pub fn info(lang: Lang) -> KeyboardMarkup {
    rows(
        lang,
        &[
            &[i18n::BTN_ADDRESS],
            &[i18n::BTN_HOURS],
            &[i18n::BTN_RULES, i18n::BTN_SIGHTS],
            &[i18n::BTN_MAIN_MENU],
        ],
    )
}

pub fn sights(lang: Lang) -> KeyboardMarkup {
    let mut keyboard: Vec<Vec<KeyboardButton>> = SIGHTS
        .iter()
        .map(|sight| vec![KeyboardButton::new(sight.button.get(lang))])
        .collect();
    keyboard.push(vec![
        KeyboardButton::new(i18n::BTN_BACK.get(lang)),
        KeyboardButton::new(i18n::BTN_MAIN_MENU.get(lang)),
    ]);
    KeyboardMarkup::new(keyboard)
}

/// One button per option, plus the exit button.
pub fn answers(lang: Lang, options: &[String]) -> KeyboardMarkup {
    let mut keyboard: Vec<Vec<KeyboardButton>> = options
        .iter()
        .map(|option| vec![KeyboardButton::new(option.clone())])
        .collect();
    keyboard.push(vec![KeyboardButton::new(i18n::BTN_QUIZ_EXIT.get(lang))]);
    KeyboardMarkup::new(keyboard)
}
