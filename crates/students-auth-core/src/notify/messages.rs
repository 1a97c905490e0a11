use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "ru-ru" | "russian" => Ok(Locale::Ru),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LoginSucceeded,
    IncorrectPassword,
    UserNotFound,
    UnexpectedServerError,
    NetworkError,
    SessionNotSaved,
    LoggedOut,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => match self {
                Message::LoginSucceeded => "Вход выполнен успешно",
                Message::IncorrectPassword => "Пароль введен неверно",
                Message::UserNotFound => "Пользователь с таким логином не найден",
                Message::UnexpectedServerError => "На сервере произошла непредвиденная ошибка",
                Message::NetworkError => "Не удалось связаться с сервером",
                Message::SessionNotSaved => "Не удалось сохранить сессию",
                Message::LoggedOut => "Выход выполнен",
            },
            Locale::En => match self {
                Message::LoginSucceeded => "Login succeeded",
                Message::IncorrectPassword => "Incorrect password",
                Message::UserNotFound => "User with this login not found",
                Message::UnexpectedServerError => "An unexpected server error occurred",
                Message::NetworkError => "Could not reach the server",
                Message::SessionNotSaved => "Could not save the session",
                Message::LoggedOut => "Logged out",
            },
        }
    }
}
