use std::io;
use std::path;

use anyhow::Result;
use clap_complete::generate;
use clap_complete::Shell;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tally_term::application::cli;
use tally_term::application::ui::destruct_terminal_for_panic;
use tally_term::application::ui::start_loop;
use tally_term::configuration::Config;
use tally_term::configuration::ConfigKey;
use tally_term::domain::services::AppState;
use tally_term::domain::services::AppStateProps;

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .create_panic_handler()(panic_info);
    }));
}

fn setup_logging() -> Result<()> {
    let log_file = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let directory = log_file.parent().unwrap_or_else(|| path::Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = log_file
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("tally-term.log"));
    let appender = tracing_appender::rolling::never(directory, file_name);
    tracing_subscriber::fmt().json().with_writer(appender).init();

    return Ok(());
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    if let Some(("completions", sub_matches)) = matches.subcommand() {
        if let Some(shell) = sub_matches.get_one::<Shell>("shell").copied() {
            let mut cmd = cli::build();
            generate(shell, &mut cmd, "tally-term", &mut io::stdout());
        }
        return Ok(());
    }

    Config::load(vec![&matches]).await?;
    setup_logging()?;
    setup_panic_handler();

    // Config::load has already validated this as a positive integer.
    let initial_courses = Config::get(ConfigKey::InitialCourses).parse::<usize>()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        initial_courses,
        "starting tally-term"
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let app_state = AppState::new(AppStateProps { initial_courses });
    let result = start_loop(&mut terminal, app_state).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    let _ = crossterm::execute!(io::stdout(), crossterm::cursor::Show);

    tracing::info!("tally-term exited");
    return result;
}
