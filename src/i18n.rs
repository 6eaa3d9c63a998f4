use crate::lang::Lang;
use crate::quiz::QuestionView;

/// A compile-time string in every interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tr {
    pub kk: &'static str,
    pub ru: &'static str,
    pub en: &'static str,
}

impl Tr {
    pub const fn same(text: &'static str) -> Self {
        Self { kk: text, ru: text, en: text }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Kk => self.kk,
            Lang::Ru => self.ru,
            Lang::En => self.en,
        }
    }

    /// Whether `text` is this string in any language.
    pub fn matches(&self, text: &str) -> bool {
        self.kk == text || self.ru == text || self.en == text
    }
}

// Main menu buttons
pub const BTN_QUIZ: Tr = Tr { kk: "🧪 Викторина", ru: "🧪 Викторина", en: "🧪 Quiz" };
pub const BTN_INFO: Tr = Tr { kk: "ℹ️ Ақпарат", ru: "ℹ️ Инфо", en: "ℹ️ Info" };
pub const BTN_PROFILE: Tr = Tr { kk: "👤 Профиль", ru: "👤 Профиль", en: "👤 Profile" };
pub const BTN_SOS: Tr = Tr::same("🆘 SOS");
pub const BTN_LANGUAGE: Tr = Tr { kk: "🌐 Тіл", ru: "🌐 Язык", en: "🌐 Language" };
pub const BTN_EVENTS: Tr = Tr { kk: "📅 Іс-шаралар", ru: "📅 События", en: "📅 Events" };
pub const BTN_LEADERBOARD: Tr =
    Tr { kk: "🏆 Көшбасшылар", ru: "🏆 Лидерборд", en: "🏆 Leaderboard" };

// Info submenu
pub const BTN_ADDRESS: Tr = Tr { kk: "📍 Орналасқан жері", ru: "📍 Адрес", en: "📍 Location" };
pub const BTN_HOURS: Tr =
    Tr { kk: "🕒 Жұмыс уақыты", ru: "🕒 Время работы", en: "🕒 Opening hours" };
pub const BTN_RULES: Tr = Tr { kk: "📜 Ережелер", ru: "📜 Правила", en: "📜 Rules" };
pub const BTN_SIGHTS: Tr =
    Tr { kk: "🌿 Көрікті жерлер", ru: "🌿 Красивые места", en: "🌿 Sights" };
pub const BTN_BACK: Tr = Tr { kk: "🔙 Артқа", ru: "🔙 Назад", en: "🔙 Back" };
pub const BTN_MAIN_MENU: Tr =
    Tr { kk: "🏠 Басты мәзір", ru: "🏠 Главное меню", en: "🏠 Main menu" };

pub const BTN_QUIZ_EXIT: Tr = Tr { kk: "❌ Шығу", ru: "❌ Выйти", en: "❌ Exit" };

/// Language picker buttons, in keyboard order.
pub const LANGUAGE_BUTTONS: [(&str, Lang); 3] = [
    ("🇰🇿 Қазақша", Lang::Kk),
    ("🇷🇺 Русский", Lang::Ru),
    ("🇬🇧 English", Lang::En),
];

/// Typed words that leave a running quiz, compared after normalization.
pub const QUIZ_EXIT_WORDS: [&str; 5] = ["stop", "exit", "выйти", "стоп", "шығу"];

pub const MAIN_MENU_PROMPT: Tr = Tr::same("Shymkent Dendrosayabaq");
pub const WELCOME: Tr = Tr {
    kk: "Қош келдіңіз! Басты мәзір төменде.",
    ru: "Добро пожаловать! Главное меню ниже.",
    en: "Welcome! Main menu below.",
};
pub const CHOOSE_LANGUAGE: Tr = Tr::same("Тілді таңдаңыз / Выберите язык / Choose language");

pub const QUIZ_START: Tr = Tr {
    kk: "Викторина басталды!",
    ru: "Викторина началась!",
    en: "Quiz started!",
};
pub const QUIZ_EXIT_CONFIRM: Tr = Tr {
    kk: "Викторина тоқтатылды.",
    ru: "Викторина остановлена.",
    en: "Quiz stopped.",
};
pub const ANSWER_CORRECT: Tr = Tr { kk: "Дұрыс!", ru: "Правильно!", en: "Correct!" };
pub const PICK_FROM_BUTTONS: Tr = Tr {
    kk: "Түймешені пайдаланып жауап таңдаңыз.",
    ru: "Пожалуйста, выберите вариант кнопкой.",
    en: "Please pick an option using the buttons.",
};

pub const TEMPORARILY_UNAVAILABLE: Tr = Tr {
    kk: "Уақытша қолжетімсіз. Кейінірек қайталаңыз.",
    ru: "Временно недоступно. Попробуйте позже.",
    en: "Temporarily unavailable. Please try again later.",
};
pub const FILE_UNAVAILABLE: Tr = Tr {
    kk: "Файлды жіберу мүмкін емес. Кейінірек қайталаңыз.",
    ru: "Файл недоступен для отправки. Попробуйте позже.",
    en: "The file cannot be sent right now. Please try again later.",
};
pub const NO_ACCESS: Tr = Tr {
    kk: "⛔ Сізде рұқсат жоқ.",
    ru: "⛔ У вас нет доступа.",
    en: "⛔ You do not have access.",
};

pub const EVENTS_EMPTY: Tr = Tr {
    kk: "📅 Қазіргі уақытта ешқандай іс-шара жоқ.",
    ru: "📅 Сейчас мероприятий нет.",
    en: "📅 There are no events at the moment.",
};
pub const EVENTS_HEADER: Tr = Tr {
    kk: "📅 Алдағы іс-шаралар:",
    ru: "📅 Ближайшие мероприятия:",
    en: "📅 Upcoming events:",
};
pub const EVENT_ADDED: Tr = Tr {
    kk: "✅ Хабарландыру қосылды!",
    ru: "✅ Объявление добавлено!",
    en: "✅ Event added!",
};
pub const EVENT_USAGE: Tr = Tr::same("/addevent <title> | <date> | <location> | <description>");

pub const LEADERBOARD_EMPTY: Tr = Tr {
    kk: "🏆 Көшбасшылар тізімі бос.",
    ru: "🏆 Лидерборд пуст.",
    en: "🏆 The leaderboard is empty.",
};
pub const LEADERBOARD_HEADER: Tr = Tr {
    kk: "🏆 Үздік қатысушылар:",
    ru: "🏆 Лучшие участники:",
    en: "🏆 Top players:",
};
pub const USERS_EMPTY: Tr = Tr { kk: "Тізім бос.", ru: "Список пуст.", en: "No users yet." };

pub fn quiz_finished(lang: Lang, score: usize, total: usize) -> String {
    match lang {
        Lang::Kk => format!("Викторина аяқталды. Сіздің ұпайыңыз: {}/{}.", score, total),
        Lang::Ru => format!("Викторина завершена. Ваш счёт: {}/{}.", score, total),
        Lang::En => format!("Quiz finished. Your score: {}/{}.", score, total),
    }
}

pub fn answer_wrong(lang: Lang, answer: &str, explanation: Option<&str>) -> String {
    let text = match lang {
        Lang::Kk => format!("Дұрыс емес. Дұрыс жауап: {}.", answer),
        Lang::Ru => format!("Неправильно. Правильный ответ: {}.", answer),
        Lang::En => format!("Wrong. Correct answer: {}.", answer),
    };
    match explanation {
        Some(explanation) => format!("{} {}", text, explanation),
        None => text,
    }
}

/// The question with its options numbered, so a digit can be typed instead.
pub fn question_text(question: &QuestionView) -> String {
    let mut out = format!(
        "❓ {}/{}. {}\n\n",
        question.index + 1,
        question.total,
        question.text
    );
    for (i, option) in question.options.iter().enumerate() {
        out.push_str(&format!("{}) {}\n", i + 1, option));
    }
    out
}

pub fn profile(lang: Lang, full_name: &str, username: Option<&str>) -> String {
    let username = username
        .filter(|u| !u.is_empty())
        .map(|u| format!("@{}", u))
        .unwrap_or_else(|| "—".to_string());
    match lang {
        Lang::Kk => format!(
            "👤 Пайдаланушы:\n\nАты: {}\nПайдаланушы аты: {}",
            or(full_name, "Аноним"),
            username
        ),
        Lang::Ru => format!(
            "👤 Ваш профиль:\n\nИмя: {}\nЮзернейм: {}",
            or(full_name, "Аноним"),
            username
        ),
        Lang::En => format!(
            "👤 Your profile:\n\nName: {}\nUsername: {}",
            or(full_name, "Anonymous"),
            username
        ),
    }
}

pub fn leaderboard_line(lang: Lang, place: usize, name: &str, score: usize) -> String {
    match lang {
        Lang::Kk => format!("{}. {} — {} дұрыс жауап", place, name, score),
        Lang::Ru => format!("{}. {} — {} правильных ответов", place, name, score),
        Lang::En => format!("{}. {} — {} correct answers", place, name, score),
    }
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
