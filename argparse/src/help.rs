//! Usage and help text.

use std::io::{self, Write};

use crate::arity::NArgs;
use crate::parser::{ArgumentParser, Opt};

/// How a metavar is shown for a given arity.
fn args_string(nargs: NArgs, metavar: &str) -> String {
    match nargs {
        NArgs::Optional => format!("{}?", metavar),
        NArgs::OneOrMore => format!("{} {}...", metavar, metavar),
        NArgs::ZeroOrMore => format!("{}...", metavar),
        NArgs::Exact(n) if n > 1 => vec![metavar; n].join(" "),
        NArgs::Exact(_) => metavar.to_string(),
    }
}

/// Break `text` at whitespace so no line exceeds `width` columns, indenting
/// continuation lines by `hanging_indent`. The result ends with a newline.
///
/// A word too long to fit makes the whole text retry ten columns wider.
pub fn word_wrap(text: &str, width: usize, hanging_indent: usize) -> String {
    let usable = match width.checked_sub(hanging_indent) {
        Some(w) if w > 0 => w,
        _ => 10,
    };

    let mut rest = text.trim();
    let mut result = String::new();

    while rest.len() > usable {
        let bytes = rest.as_bytes();
        let Some(p) = (0..=usable).rev().find(|&i| bytes[i].is_ascii_whitespace()) else {
            return word_wrap(text, usable + hanging_indent + 10, hanging_indent);
        };

        result.push_str(rest[..p].trim_end());
        result.push('\n');
        result.push_str(&" ".repeat(hanging_indent));
        rest = &rest[p + 1..];
    }

    result.push_str(rest);
    result.push('\n');
    result
}

fn option_label(opt: &Opt) -> String {
    let metavar = opt.display_metavar();
    let mut forms = Vec::new();

    if let Some(c) = opt.short_name() {
        if metavar.is_empty() {
            forms.push(format!("-{}", c));
        } else {
            forms.push(format!("-{} {}", c, metavar));
        }
    }
    if !opt.long_name().is_empty() {
        if metavar.is_empty() {
            forms.push(format!("--{}", opt.long_name()));
        } else {
            forms.push(format!("--{}={}", opt.long_name(), metavar));
        }
    }

    format!("  {} ", forms.join(", "))
}

/// Write each label padded to a common column, followed by its wrapped help.
fn write_table<W: Write>(out: &mut W, rows: &[(String, &str)], width: usize) -> io::Result<()> {
    let column = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, help) in rows {
        write!(
            out,
            "{:column$}{}",
            label,
            word_wrap(help, width, column),
            column = column
        )?;
    }
    Ok(())
}

impl ArgumentParser {
    /// One-line synopsis followed by the description, if any.
    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let prog = self.prog_name();

        let options = if self.options.is_empty() {
            ""
        } else {
            " (options)"
        };
        let mut positionals = String::new();
        for arg in &self.arguments {
            positionals.push(' ');
            positionals.push_str(&args_string(arg.nargs, &arg.display_metavar()));
        }
        writeln!(out, "usage: {}{}{}", prog, options, positionals)?;

        if !self.description.is_empty() {
            let lead = format!("{} - ", prog);
            write!(
                out,
                "\n{}{}",
                lead,
                word_wrap(&self.description, self.word_wrap_width, lead.len())
            )?;
        }
        Ok(())
    }

    /// Usage plus a table of positional arguments and options.
    pub fn write_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_usage(out)?;

        if !self.arguments.is_empty() {
            writeln!(out, "\nPositional arguments:")?;
            let rows: Vec<(String, &str)> = self
                .arguments
                .iter()
                .map(|arg| {
                    let label = format!("  {}  ", args_string(arg.nargs, &arg.display_metavar()));
                    (label, arg.help.as_str())
                })
                .collect();
            write_table(out, &rows, self.word_wrap_width)?;
        }

        if !self.options.is_empty() {
            writeln!(out, "\nOptions:")?;
            let rows: Vec<(String, &str)> = self
                .options
                .iter()
                .map(|opt| (option_label(opt), opt.help.as_str()))
                .collect();
            write_table(out, &rows, self.word_wrap_width)?;
        }
        Ok(())
    }

    pub fn usage(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_usage(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn help(&self) -> String {
        let mut buf = Vec::new();
        let _ = self.write_help(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
