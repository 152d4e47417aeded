//! help: List available commands.

use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};
use crate::locale::Locale;
use crate::render::{Output, Tone};

/// Help sections, in display order.
const SECTIONS: &[(Section, &[Command])] = &[
    (
        Section::Files,
        &[
            Command::Ls,
            Command::Cd,
            Command::Pwd,
            Command::Mkdir,
            Command::Touch,
            Command::Rm,
            Command::Cat,
        ],
    ),
    (Section::Editor, &[Command::Nano]),
    (
        Section::System,
        &[
            Command::Clear,
            Command::Whoami,
            Command::Date,
            Command::Echo,
            Command::Tree,
            Command::Help,
        ],
    ),
    (
        Section::Fun,
        &[
            Command::Neofetch,
            Command::Cowsay,
            Command::Sl,
            Command::Matrix,
            Command::Fortune,
            Command::Figlet,
            Command::Joke,
            Command::Weather,
        ],
    ),
];

#[derive(Clone, Copy)]
enum Section {
    Files,
    Editor,
    System,
    Fun,
}

impl Section {
    fn title(self, locale: Locale) -> &'static str {
        match self {
            Section::Files => locale.pick("Files & Navigation:", "Fichiers & Navigation :"),
            Section::Editor => locale.pick("Text editor:", "Éditeur de texte :"),
            Section::System => locale.pick("System:", "Système :"),
            Section::Fun => locale.pick("Fun commands:", "Commandes amusantes :"),
        }
    }
}

pub fn run(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    Ok(ExecResult::success(render_help(ctx.locale())))
}

/// The full help screen.
pub fn render_help(locale: Locale) -> Output {
    let mut out = Output::styled(
        Tone::Muted,
        locale.pick("Available commands:", "Commandes disponibles :"),
    );
    for (section, commands) in SECTIONS {
        out = out
            .text("\n\n")
            .push(Tone::Warning, section.title(locale));
        for &command in *commands {
            let usage = usage(command);
            let padding = 16usize.saturating_sub(command.name().len() + usage.len());
            out = out
                .text("\n  ")
                .push(Tone::Info, command.name())
                .text(format!("{usage}{:padding$}{}", "", describe(command, locale)));
        }
    }
    out
}

fn usage(command: Command) -> &'static str {
    match command {
        Command::Ls | Command::Cd => " [path]",
        Command::Mkdir | Command::Touch | Command::Rm => " [name]",
        Command::Cat | Command::Nano => " [file]",
        Command::Echo | Command::Cowsay | Command::Figlet => " [text]",
        _ => "",
    }
}

/// One-line description of `command`.
pub fn describe(command: Command, locale: Locale) -> &'static str {
    match command {
        Command::Help => locale.pick("- Show this help", "- Afficher cette aide"),
        Command::Ls => locale.pick("- List directory contents", "- Lister le contenu du dossier"),
        Command::Cd => locale.pick("- Change directory", "- Changer de dossier"),
        Command::Pwd => locale.pick("- Print working directory", "- Afficher le dossier courant"),
        Command::Mkdir => locale.pick("- Create a directory", "- Créer un dossier"),
        Command::Touch => locale.pick("- Create an empty file", "- Créer un fichier vide"),
        Command::Rm => locale.pick("- Remove a file or directory", "- Supprimer un fichier ou dossier"),
        Command::Cat => locale.pick("- Show file contents", "- Afficher le contenu d'un fichier"),
        Command::Nano => locale.pick("- Edit a file", "- Éditer un fichier"),
        Command::Tree => locale.pick("- Show directory tree", "- Afficher l'arborescence"),
        Command::Clear => locale.pick("- Clear the screen", "- Effacer l'écran"),
        Command::Whoami => locale.pick("- Show current user", "- Afficher l'utilisateur"),
        Command::Date => locale.pick("- Show date and time", "- Afficher la date et l'heure"),
        Command::Echo => locale.pick("- Print text", "- Afficher du texte"),
        Command::Neofetch => locale.pick("- System information", "- Informations système"),
        Command::Cowsay => locale.pick("- A talking cow", "- Une vache qui parle"),
        Command::Sl => locale.pick("- Steam locomotive", "- Locomotive à vapeur"),
        Command::Matrix => locale.pick("- Enter the Matrix", "- Entrer dans la Matrice"),
        Command::Fortune => locale.pick("- Fortune cookie", "- Biscuit chinois"),
        Command::Figlet => locale.pick("- ASCII art banner", "- Bannière en art ASCII"),
        Command::Joke => locale.pick("- Programmer joke", "- Blague de programmeur"),
        Command::Weather => locale.pick("- Weather forecast", "- Météo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command_once() {
        let listed: usize = SECTIONS.iter().map(|(_, commands)| commands.len()).sum();
        assert_eq!(listed, Command::ALL.len());
        for &command in Command::ALL {
            assert!(
                SECTIONS.iter().any(|(_, commands)| commands.contains(&command)),
                "{command} missing from help"
            );
        }
    }

    #[test]
    fn columns_line_up() {
        let text = render_help(Locale::En).to_plain();
        assert!(text.contains("\n  ls [path]       - List directory contents"));
        assert!(text.contains("\n  pwd             - Print working directory"));
        assert!(text.contains("\n  weather         - Weather forecast"));
    }

    #[test]
    fn french_titles() {
        let text = render_help(Locale::Fr).to_plain();
        assert!(text.starts_with("Commandes disponibles :"));
        assert!(text.contains("Éditeur de texte :"));
    }
}
