//! whoami and date.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::interpreter::{CommandError, ExecContext, ExecResult};
use crate::locale::Locale;
use crate::render::Output;

/// whoami: The configured user name.
pub fn whoami(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    Ok(ExecResult::success(Output::plain(ctx.config.user.as_str())))
}

/// date: Local date and time in the session's locale.
pub fn date(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    Ok(ExecResult::success(Output::plain(format_date(
        &Local::now(),
        ctx.locale(),
    ))))
}

/// `10/19/2026, 3:04:05 PM` in English, `19/10/2026 15:04:05` in French.
pub fn format_date<Tz>(when: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = locale.pick("%-m/%-d/%Y, %-I:%M:%S %p", "%d/%m/%Y %H:%M:%S");
    when.format(pattern).to_string()
}
