//! newsbetter: A terminal newsletter content editor.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use edtui::EditorEventHandler;
use newsbetter::app_state::{Action, AppState, CommandOutcome, ContentState, View};
use newsbetter::{config, export, input, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newsbetter")]
#[command(about = "Split newsletter documents into sections, edit them, export HTML", long_about = None)]
struct Args {
    /// Files or directories to ingest
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match when scanning directories
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Write the HTML export here and exit without opening the editor
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Newsletter title used in exports
    #[arg(long)]
    title: Option<String>,

    /// Print the final sections as JSON on exit
    #[arg(long)]
    print_json: bool,
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(title) = args.title {
        cfg.newsletter_title = title;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions);
    let content = ingest(&documents);

    if let Some(path) = args.export {
        export::write_html(&path, &cfg.newsletter_title, &content.sections)?;
        eprintln!(
            "Exported {} section(s) to {}",
            content.sections.len(),
            path.display()
        );
        if args.print_json {
            print_json(&content)?;
        }
        return Ok(());
    }

    let app = AppState::new(content, &cfg);
    run_tui(app, &cfg, args.print_json)
}

/// Feeds every document through the pipeline, one file at a time.
fn ingest(documents: &[PathBuf]) -> ContentState {
    let content = ContentState::default().apply(Action::BeginProcessing);
    documents
        .iter()
        .fold(content, |content, path| {
            content.apply(Action::FileProcessed(input::process_path(path)))
        })
        .apply(Action::FinishProcessing)
}

fn print_json(content: &ContentState) -> io::Result<()> {
    let json = export::render_json(&content.sections).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_tui(mut app: AppState, cfg: &config::Config, print_sections: bool) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor_handler = EditorEventHandler::default();

    let result = run_app(&mut terminal, &mut app, cfg, &mut editor_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else if print_sections {
        print_json(&app.content)?;
    }

    Ok(())
}

fn editor_in_normal_mode(app: &AppState) -> bool {
    app.editor_state
        .as_ref()
        .is_some_and(|editor_state| editor_state.mode == edtui::EditorMode::Normal)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
    editor_handler: &mut EditorEventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_view {
            View::List => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        app.move_current_up();
                    } else {
                        app.select_prev();
                    }
                }
                KeyCode::Down => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        app.move_current_down();
                    } else {
                        app.select_next();
                    }
                }
                KeyCode::Enter => app.enter_detail_view(),
                KeyCode::Char('a') => app.add_section(),
                KeyCode::Char('d') | KeyCode::Delete => app.remove_current(),
                KeyCode::Char('k') => app.cycle_kind_current(),
                KeyCode::Char(':') => app.enter_command_mode(),
                _ => {}
            },
            View::Detail => match key.code {
                KeyCode::Char(':') if editor_in_normal_mode(app) => app.enter_command_mode(),
                KeyCode::Esc if editor_in_normal_mode(app) => app.exit_detail_view(false),
                _ => {
                    if let Some(ref mut editor_state) = app.editor_state {
                        editor_handler.on_key_event(key, editor_state);
                    }
                }
            },
            View::Command => match key.code {
                KeyCode::Char(c) => {
                    app.command_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.command_buffer.pop();
                }
                KeyCode::Enter => {
                    let cmd = app.command_buffer.clone();
                    if app.run_command(&cmd) == CommandOutcome::Quit {
                        return Ok(());
                    }
                }
                KeyCode::Esc => app.cancel_command(),
                _ => {}
            },
        }
    }
}
