//! Screen labels
//!
//! Human output is either English or bilingual Kazakh/Russian, Kazakh first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JuryError;

/// Label language for human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "kk-ru")]
    KkRu,
}

impl FromStr for Language {
    type Err = JuryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "kk-ru" | "kk" | "ru" => Ok(Language::KkRu),
            other => Err(JuryError::invalid_value("language", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::KkRu => write!(f, "kk-ru"),
        }
    }
}

/// Fixed pieces of text shown by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    JuryPanel,
    LiveResults,
    UpdatedAt,
    ScoreEntry,
    Preview,
    CriterionAverages,
    TeamProfiles,
    Totals,
    Winners,
    Place,
    Congratulations,
    ScreenFooter,
    Saved,
    ResetDone,
    DrawOrder,
}

impl Label {
    fn en(self) -> &'static str {
        match self {
            Label::JuryPanel => "Jury panel",
            Label::LiveResults => "Results (live)",
            Label::UpdatedAt => "Updated",
            Label::ScoreEntry => "Score entry",
            Label::Preview => "Preview (as on screen)",
            Label::CriterionAverages => "Average score per criterion (all teams)",
            Label::TeamProfiles => "Team profiles",
            Label::Totals => "Total points (descending)",
            Label::Winners => "Winners",
            Label::Place => "place",
            Label::Congratulations => "Congratulations!",
            Label::ScreenFooter => "Only results are shown on screen",
            Label::Saved => "Saved",
            Label::ResetDone => "Reset done",
            Label::DrawOrder => "Presentation order",
        }
    }

    fn kk_ru(self) -> (&'static str, &'static str) {
        match self {
            Label::JuryPanel => ("Әділқазы панелі", "Панель жюри"),
            Label::LiveResults => ("Нәтижелер (тікелей)", "Результаты (live)"),
            Label::UpdatedAt => ("Жаңартылды", "Обновлено"),
            Label::ScoreEntry => ("Бағаларды енгізу", "Ввод баллов"),
            Label::Preview => ("Алдын ала қарау", "Предпросмотр"),
            Label::CriterionAverages => (
                "Критерийлер бойынша орташа балл",
                "Средний балл по критериям",
            ),
            Label::TeamProfiles => ("Командалардың профилі", "Профиль команд"),
            Label::Totals => ("Жалпы ұпай (кему ретімен)", "Общий балл (по убыванию)"),
            Label::Winners => ("Жеңімпаздар", "Победители"),
            Label::Place => ("орын", "место"),
            Label::Congratulations => ("Құттықтаймыз!", "Поздравляем!"),
            Label::ScreenFooter => (
                "Экранда тек нәтиже көрсетіледі",
                "На экране только результаты",
            ),
            Label::Saved => ("Сақталды", "Сохранено"),
            Label::ResetDone => ("Қайтарылды", "Сброшено"),
            Label::DrawOrder => ("Сөз сөйлеу реті", "Порядок выступлений"),
        }
    }
}

/// Render a label in the given language.
pub fn text(language: Language, label: Label) -> String {
    match language {
        Language::En => label.en().to_string(),
        Language::KkRu => {
            let (kk, ru) = label.kk_ru();
            format!("{} / {}", kk, ru)
        }
    }
}

/// Render a place line such as "1 place" or "1-орын / 1 место".
pub fn place(language: Language, position: usize) -> String {
    match language {
        Language::En => format!("{} {}", ordinal(position), Label::Place.en()),
        Language::KkRu => {
            let (kk, ru) = Label::Place.kk_ru();
            format!("{}-{} / {} {}", position, kk, position, ru)
        }
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
