//! Cosmetic commands: neofetch, cowsay, sl, matrix, fortune, figlet, joke,
//! weather.
//!
//! None of these touch the filesystem. The random ones draw from the
//! session's seeded generator, so a fixed seed gives a fixed sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::interpreter::{CommandError, ExecContext, ExecResult};
use crate::locale::Locale;
use crate::render::{Output, Tone};

const MATRIX_ROWS: usize = 10;
const MATRIX_COLUMNS: usize = 60;
const MATRIX_CHARS: &[char] = &['0', '1', ' ', ' ', ' '];

const FIGLET_MAX_CHARS: usize = 8;

const LOCOMOTIVE: &str = r"      ====        ________                ___________
  _D _|  |_______/        \__I_I_____===__|_________|
   |(_)---  |   H\________/ |   |        =|___ ___|
   /     |  |   H  |  |     |   |         ||_| |_||
  |      |  |   H  |__--------------------| [___] |
  | ________|___H__/__|_____/[][]~\_______|       |
  |/ |   |-----------I_____I [][] []  D   |=======|__
__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__
 |/-=|___|=O=====O=====O=====O   |_____/~\___/
  \_/      \__/  \__/  \__/  \__/      \_/";

const BANNER: &str = "████████ ████████ ██████   ███    ███ ██ ███    ██ ██    ██ ██   ██
   ██    ██       ██   ██  ████  ████ ██ ████   ██ ██    ██  ██ ██
   ██    █████    ██████   ██ ████ ██ ██ ██ ██  ██ ██    ██   ███
   ██    ██       ██   ██  ██  ██  ██ ██ ██  ██ ██ ██    ██  ██ ██
   ██    ████████ ██   ██  ██      ██ ██ ██   ████  ██████  ██   ██";

const COW: &str = r"   \   ^__^
    \  (oo)\_______
       (__) \       )\/\
           ||----w |
           ||     ||";

/// neofetch: A small system information card.
pub fn neofetch(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let locale = ctx.locale();
    let user_host = format!("{}@{}", ctx.config.user, ctx.config.hostname);
    let language = locale.pick("English", "Français");
    let rows: [(&str, &str); 4] = [
        ("OS:", "Ubuntu (Web)"),
        ("Shell:", "terminux"),
        (locale.pick("Host:", "Hôte :"), user_host.as_str()),
        (locale.pick("Language:", "Langue :"), language),
    ];
    let title = format!("Terminux {}", env!("CARGO_PKG_VERSION"));
    let rule = "─".repeat(20);

    let inner = rows
        .iter()
        .map(|(label, value)| label.chars().count() + 1 + value.chars().count())
        .chain([title.chars().count(), rule.chars().count()])
        .max()
        .unwrap_or(0)
        + 4;

    let pad = |used: usize| " ".repeat(inner.saturating_sub(used + 2));
    let mut out = Output::styled(Tone::Info, format!("╭{}╮\n", "─".repeat(inner)));
    out = out
        .push(Tone::Info, "│  ")
        .push(Tone::Success, title.as_str())
        .text(pad(title.chars().count()))
        .push(Tone::Info, "│\n│  ")
        .push(Tone::Info, rule.as_str())
        .text(pad(rule.chars().count()))
        .push(Tone::Info, "│\n");
    for (label, value) in rows {
        let used = label.chars().count() + 1 + value.chars().count();
        out = out
            .push(Tone::Info, "│  ")
            .push(Tone::Warning, label)
            .text(format!(" {value}{}", pad(used)))
            .push(Tone::Info, "│\n");
    }
    out = out.push(Tone::Info, format!("╰{}╯", "─".repeat(inner)));
    Ok(ExecResult::success(out))
}

/// cowsay: A cow saying the argument, or `Moo!`.
pub fn cowsay(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let message = if args.trim().is_empty() {
        ctx.locale().pick("Moo!", "Meuh!")
    } else {
        args
    };
    let border = "─".repeat(message.chars().count() + 2);
    let out = Output::styled(Tone::Warning, format!("╭─{border}─╮\n│"))
        .text(format!("  {message}  "))
        .push(Tone::Warning, format!("│\n╰─{border}─╯\n"))
        .push(Tone::Success, COW);
    Ok(ExecResult::success(out))
}

/// sl: A steam locomotive.
pub fn sl(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let out = Output::styled(Tone::Warning, LOCOMOTIVE).text("\n").push(
        Tone::Info,
        ctx.locale().pick("Steam Locomotive!", "Locomotive à Vapeur!"),
    );
    Ok(ExecResult::success(out))
}

/// matrix: A block of falling-code noise.
pub fn matrix(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let grid = matrix_grid(ctx.rng);
    let out = Output::styled(Tone::Success, grid).text("\n").push(
        Tone::Info,
        ctx.locale()
            .pick("Welcome to the Matrix...", "Bienvenue dans la Matrice..."),
    );
    Ok(ExecResult::success(out))
}

fn matrix_grid(rng: &mut StdRng) -> String {
    (0..MATRIX_ROWS)
        .map(|_| {
            (0..MATRIX_COLUMNS)
                .map(|_| MATRIX_CHARS.choose(rng).copied().unwrap_or(' '))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// fortune: A random programming aphorism.
pub fn fortune(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let fortunes = fortunes(ctx.locale());
    Ok(ExecResult::success(Output::styled(
        Tone::Warning,
        choose(ctx.rng, fortunes),
    )))
}

fn fortunes(locale: Locale) -> &'static [&'static str] {
    locale.pick(
        &[
            "Today is a good day to code!",
            "The best way to predict the future is to implement it.",
            "Code is poetry written for machines to understand.",
            "Every expert was once a beginner. Keep coding!",
            "Talk is cheap. Show me the code. - Linus Torvalds",
        ],
        &[
            "Aujourd'hui est un bon jour pour coder!",
            "La meilleure façon de prédire l'avenir est de l'implémenter.",
            "Le code est de la poésie écrite pour que les machines comprennent.",
            "Chaque expert était autrefois débutant. Continuez à coder!",
            "Les paroles sont gratuites. Montrez-moi le code. - Linus Torvalds",
        ],
    )
}

/// figlet: The TERMINUX banner, captioned with the argument.
///
/// The banner itself is fixed; the caption is the argument upper-cased and
/// cut to eight characters.
pub fn figlet(args: &str, _ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let mut out = Output::styled(Tone::Success, BANNER);
    let caption: String = args
        .trim()
        .to_uppercase()
        .chars()
        .take(FIGLET_MAX_CHARS)
        .collect();
    if !caption.is_empty() {
        out = out.text("\n").push(Tone::Highlight, caption);
    }
    Ok(ExecResult::success(out))
}

/// joke: A random programmer joke.
pub fn joke(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let jokes = jokes(ctx.locale());
    Ok(ExecResult::success(Output::styled(
        Tone::Warning,
        choose(ctx.rng, jokes),
    )))
}

fn jokes(locale: Locale) -> &'static [&'static str] {
    locale.pick(
        &[
            "Why do programmers prefer dark mode?\nBecause light attracts bugs!",
            "How many programmers does it take to change a light bulb?\nNone. That's a hardware problem.",
            "Why do Java developers wear glasses?\nBecause they can't C#",
            "What's the object-oriented way to become wealthy?\nInheritance!",
        ],
        &[
            "Pourquoi les programmeurs préfèrent le mode sombre?\nParce que la lumière attire les bugs!",
            "Combien faut-il de programmeurs pour changer une ampoule?\nAucun. C'est un problème hardware.",
            "Pourquoi les développeurs Java portent des lunettes?\nParce qu'ils ne peuvent pas C#",
            "Quelle est la façon orientée objet de devenir riche?\nL'héritage!",
        ],
    )
}

/// weather: A made-up forecast for Terminux City.
pub fn weather(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let locale = ctx.locale();
    let conditions = [
        ("☀️", locale.pick("Sunny", "Ensoleillé")),
        ("⛅", locale.pick("Partly Cloudy", "Partiellement nuageux")),
        ("🌧️", locale.pick("Rainy", "Pluvieux")),
    ];
    let (icon, description) = conditions
        .choose(&mut *ctx.rng)
        .copied()
        .unwrap_or(conditions[0]);
    let celsius: u8 = ctx.rng.gen_range(5..35);
    Ok(ExecResult::success(Output::styled(
        Tone::Info,
        format!("{icon} {description}\n🌡️  {celsius}°C\n📍 Terminux City"),
    )))
}

fn choose(rng: &mut StdRng, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}
