//! English and French message catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language for messages and cosmetic commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Translatable message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FileNotFound,
    NotADirectory,
    IsADirectory,
    FileExists,
    MissingOperand,
    InvalidDirectoryName,
    InvalidFilename,
    InvalidName,
    FilenameMissing,
    CommandNotFound,
    FileSaved,
    FileVanished,
    Welcome,
    WelcomeHint,
    EditorHelp,
    TasksCompleted,
}

impl Locale {
    /// Pick a locale from a language tag such as `fr-FR` or `en_US.UTF-8`.
    /// Anything that is not French falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("fr") {
            Locale::Fr
        } else {
            Locale::En
        }
    }

    /// Detect the locale from `LC_ALL`, `LC_MESSAGES` or `LANG`.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }

    /// Choose between an English and a French variant.
    pub fn pick<T>(self, en: T, fr: T) -> T {
        match self {
            Locale::En => en,
            Locale::Fr => fr,
        }
    }

    pub fn text(self, message: Message) -> &'static str {
        use Message::*;
        match message {
            FileNotFound => self.pick("No such file or directory", "Aucun fichier ou dossier de ce type"),
            NotADirectory => self.pick("Not a directory", "N'est pas un dossier"),
            IsADirectory => self.pick("Is a directory", "Est un dossier"),
            FileExists => self.pick("File exists", "Le fichier existe"),
            MissingOperand => self.pick("missing operand", "opérande manquant"),
            InvalidDirectoryName => self.pick("invalid directory name", "nom de dossier invalide"),
            InvalidFilename => self.pick("invalid filename", "nom de fichier invalide"),
            InvalidName => self.pick("invalid name", "nom invalide"),
            FilenameMissing => self.pick("filename missing", "nom de fichier manquant"),
            CommandNotFound => self.pick("command not found", "commande introuvable"),
            FileSaved => self.pick("File saved", "Fichier enregistré"),
            FileVanished => self.pick("file no longer exists", "le fichier n'existe plus"),
            Welcome => self.pick("Welcome to Terminux!", "Bienvenue sur Terminux !"),
            WelcomeHint => self.pick(
                "Type 'help' to see available commands.",
                "Tapez 'help' pour voir les commandes disponibles.",
            ),
            EditorHelp => self.pick(
                "^S Save | ^X Exit | ^K Cut line | ^W Help",
                "^S Enregistrer | ^X Quitter | ^K Couper la ligne | ^W Aide",
            ),
            TasksCompleted => self.pick(
                "All tasks completed successfully!",
                "Toutes les tâches ont été exécutées avec succès !",
            ),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        })
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "fr" | "french" | "français" => Ok(Locale::Fr),
            other => Err(format!("unknown locale: {other} (expected en or fr)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_detection() {
        assert_eq!(Locale::from_tag("fr-FR"), Locale::Fr);
        assert_eq!(Locale::from_tag("fr_CA.UTF-8"), Locale::Fr);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("de-DE"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn parse_names() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("french".parse::<Locale>(), Ok(Locale::Fr));
        assert!("klingon".parse::<Locale>().is_err());
    }

    #[test]
    fn messages_differ_per_locale() {
        assert_eq!(Locale::En.text(Message::FileExists), "File exists");
        assert_eq!(Locale::Fr.text(Message::FileExists), "Le fichier existe");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for locale in [Locale::En, Locale::Fr] {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }
}
