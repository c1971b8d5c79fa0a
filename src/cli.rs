// src/cli.rs
use std::{
    io::{self, Write},
    num::ParseIntError,
    path::PathBuf,
    sync::Arc,
};

use thiserror::Error;

use crate::{
    config::{options::AppOptions, state::SearchState},
    dispatch::{dispatch, Action, OpenError, RecordingOpener, SystemOpener},
    error::LoadError,
    render::{CandidateCard, ContactAction, ResumeAction},
    runner::{render_pass, ResultsPage},
    store::CandidateStore,
};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("Invalid number: {0}")]
    Number(#[from] ParseIntError),
    #[error(transparent)]
    Load(#[from] Arc<LoadError>),
    #[error(transparent)]
    Open(#[from] OpenError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenTarget {
    Resume(usize),
    WhatsApp(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub options: AppOptions,
    pub search: SearchState,
    pub open: Option<OpenTarget>,
    pub dry_run: bool,
    pub help: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    let mut page = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => out.options.dataset = PathBuf::from(value(&a, &mut args)?),
            "-r" | "--role" => { out.search.set_role(&value(&a, &mut args)?); }
            "-n" | "--name" => { out.search.set_name(&value(&a, &mut args)?); }
            "-l" | "--location" => { out.search.set_location(&value(&a, &mut args)?); }
            "-p" | "--page" => page = Some(value(&a, &mut args)?.parse()?),
            "--open-resume" => out.open = Some(OpenTarget::Resume(value(&a, &mut args)?.parse()?)),
            "--open-whatsapp" => out.open = Some(OpenTarget::WhatsApp(value(&a, &mut args)?.parse()?)),
            "--dry-run" => out.dry_run = true,
            "-h" | "--help" => out.help = true,
            _ => return Err(CliError::Usage(format!("Unknown arg: {a}"))),
        }
    }

    // Filters reset the page, so the request goes in last.
    if let Some(p) = page { out.search.set_page(p); }

    Ok(out)
}

fn value(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    args.next().ok_or_else(|| CliError::Usage(format!("Missing value for {flag}")))
}

/// Run one search and print it. Opens at most one link.
pub fn run(args: CliArgs, out: &mut dyn Write) -> Result<(), CliError> {
    if args.help {
        write!(out, "{HELP}")?;
        return Ok(());
    }

    let CliArgs { options, mut search, open, dry_run, .. } = args;

    let mut store = CandidateStore::new(&options.dataset);
    let table = store.table()?;
    let results = render_pass(&table, &mut search, options.page_size);

    print_page(out, &results)?;

    let Some(target) = open else { return Ok(()) };
    let action = pick_action(&results, target)?;

    if dry_run {
        let mut rec = RecordingOpener::default();
        dispatch(&mut rec, &action)?;
        writeln!(out, "{}", action.url())?;
    } else {
        dispatch(&mut SystemOpener, &action)?;
        writeln!(out, "Opened {}: {}", action, action.url())?;
    }
    Ok(())
}

fn pick_action(results: &ResultsPage, target: OpenTarget) -> Result<Action, CliError> {
    let (k, what) = match target {
        OpenTarget::Resume(k) => (k, "resume"),
        OpenTarget::WhatsApp(k) => (k, "WhatsApp"),
    };

    let card = k
        .checked_sub(1)
        .and_then(|i| results.cards.get(i))
        .ok_or_else(|| {
            CliError::Usage(format!(
                "No candidate #{k} on page {} ({} shown)",
                results.page,
                results.cards.len()
            ))
        })?;

    let action = match target {
        OpenTarget::Resume(_) => card.resume.action(),
        OpenTarget::WhatsApp(_) => card.whatsapp.action(),
    };

    action.ok_or_else(|| CliError::Usage(format!("Candidate #{k} has no {what} link")))
}

pub fn print_page(out: &mut dyn Write, results: &ResultsPage) -> io::Result<()> {
    writeln!(out, "{}", results.heading())?;
    if results.clamped {
        writeln!(out, "(requested page is out of range; showing page {})", results.page)?;
    }
    writeln!(out)?;

    for (i, card) in results.cards.iter().enumerate() {
        print_card(out, i + 1, card)?;
    }

    writeln!(out, "{}", results.footer())
}

fn print_card(out: &mut dyn Write, k: usize, card: &CandidateCard) -> io::Result<()> {
    writeln!(out, "#{k}")?;
    for (label, value) in crate::render::FIELD_LABELS.iter().zip(card.fields()) {
        writeln!(out, "  {label}: {value}")?;
    }

    let resume = match &card.resume {
        ResumeAction::Open { url } => url.as_str(),
        ResumeAction::Unavailable => ResumeAction::disabled_label(),
    };
    let whatsapp = match &card.whatsapp {
        ContactAction::WhatsApp { url, .. } => url.as_str(),
        ContactAction::Unavailable => ContactAction::disabled_label(),
    };
    writeln!(out, "  Resume: {resume}")?;
    writeln!(out, "  WhatsApp: {whatsapp}")?;
    writeln!(out, "---")
}
