//! Demo host for the tree navigator.
//!
//! Run the binary to browse a built-in sample tree.
//! Run with `--write-config` to dump the current settings to the config file.

use std::io::{self, stderr};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use treeglide::app::{
    demo::DemoTree,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use treeglide::config::AppConfig;
use treeglide::core::session::Session;
use treeglide::ui::{layout::AppLayout, tree_widget::TreeWidget};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Glide through a tree with the arrow keys")]
struct Cli {
    /// Sample tree to open.
    #[arg(long, value_enum, default_value_t = DemoTree::Thread)]
    demo: DemoTree,

    /// Width of the label column (overrides the config file).
    #[arg(long)]
    label_width: Option<usize>,

    /// Hide the help bar.
    #[arg(long)]
    no_help: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(width) = cli.label_width {
        config.label_width = width;
    }
    if cli.no_help {
        config.show_help = false;
    }

    if cli.write_config {
        let path = config.save()?;
        println!("{}", path.display());
        return Ok(());
    }

    // ── build the session before touching the terminal ────────
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let (width, height) = AppLayout::content_size(ratatui::layout::Rect::new(0, 0, width, height));
    let session = Session::new(cli.demo.build(), width, height)?
        .with_label_width(config.label_width);
    let mut state = AppState::new(session, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::from_area(area, state.help_height());

            frame.render_stateful_widget(TreeWidget::new(), layout.tree_area, &mut state.session);
            if let Some(help) = state.help_bar() {
                frame.render_widget(help, layout.help_area);
            }
        })?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(key) => handler::handle_key(state, key),
            AppEvent::Resize(w, h) => handler::handle_resize(state, w, h),
            AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
