//! guidenav: navigate a single-page user guide from its table of contents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use guidenav::guide::{Guide, LinkTarget};
use guidenav::ui::{self, Focus, Viewer};
use guidenav::{config, formats, input};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Rows taken by the help bar below the page.
const HELP_ROWS: u16 = 3;
/// Frame interval while an animation is running.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "guidenav")]
#[command(about = "Collapsible table-of-contents navigation for user guides", long_about = None)]
struct Args {
    /// Markdown user guide to open
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Configuration file (defaults to ./guidenav.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the menu tree as JSON and exit
    #[arg(long)]
    dump_menu: bool,

    /// Anchor to open the guide at
    #[arg(long, value_name = "ANCHOR")]
    hash: Option<String>,

    /// Write tracing output to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(ref path) = args.log_file {
        setup_tracing(path, args.verbose)?;
    }
    let cfg = config::Config::load(args.config.as_deref());

    let format = formats::markdown::MarkdownFormat;
    let parsed = input::read_guide(&args.path, &format).map_err(io::Error::other)?;

    if args.dump_menu {
        let menu = guidenav::menu::Menu::build(&parsed.headings);
        let json = serde_json::to_string_pretty(&menu.snapshot(&parsed.headings))
            .map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let mut guide = Guide::new(parsed, &cfg);
    guide.set_hash(args.hash);
    run_tui(guide)
}

fn setup_tracing(path: &Path, verbose: bool) -> io::Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("guidenav=trace,debug")
        } else {
            EnvFilter::new("guidenav=debug,info")
        }
    });
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);
    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    tracing::info!(path = %path.display(), "tracing initialized");
    Ok(())
}

fn run_tui(mut guide: Guide) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let (width, height) = viewport_px(&guide, size.width, size.height);
    guide.initialize(width, height);

    let mut viewer = Viewer::default();
    let result = run_app(&mut terminal, &mut guide, &mut viewer);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
    Ok(())
}

fn viewport_px(guide: &Guide, cols: u16, rows: u16) -> (f64, f64) {
    let metrics = guide.metrics();
    (
        ui::cells_to_px(cols, metrics.char_width),
        ui::cells_to_px(rows.saturating_sub(HELP_ROWS), metrics.line_height),
    )
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    guide: &mut Guide,
    viewer: &mut Viewer,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, guide, viewer))?;

        let timeout = if guide.is_scrolling() {
            FRAME
        } else {
            Duration::from_secs(1)
        };
        if !event::poll(timeout)? {
            guide.tick(Instant::now());
            continue;
        }

        let line = guide.metrics().line_height;
        let page = guide.geometry().height().min(line * 20.0);
        match event::read()? {
            Event::Resize(cols, rows) => {
                let (width, height) = viewport_px(guide, cols, rows);
                guide.resize(width, height);
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => guide.scroll_by(line * 3.0),
                MouseEventKind::ScrollUp => guide.scroll_by(-line * 3.0),
                _ => {}
            },
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                viewer.message = None;
                match (viewer.focus, key.code) {
                    (_, KeyCode::Char('q')) => return Ok(()),
                    (_, KeyCode::Tab) => {
                        viewer.focus = match viewer.focus {
                            Focus::Menu => Focus::Content,
                            Focus::Content => Focus::Menu,
                        };
                    }
                    (_, KeyCode::Char('g') | KeyCode::Home) => guide.scroll_to_top(),
                    (Focus::Menu, KeyCode::Up | KeyCode::Char('k')) => {
                        guide.menu_mut().focus_prev();
                    }
                    (Focus::Menu, KeyCode::Down | KeyCode::Char('j')) => {
                        guide.menu_mut().focus_next();
                    }
                    (Focus::Menu, KeyCode::Enter) => {
                        if let Some(entry) = guide.menu().focused() {
                            guide.activate_entry(entry, Instant::now());
                        }
                        viewer.focus = Focus::Content;
                    }
                    (Focus::Content, KeyCode::Up | KeyCode::Char('k')) => guide.scroll_by(-line),
                    (Focus::Content, KeyCode::Down | KeyCode::Char('j')) => guide.scroll_by(line),
                    (_, KeyCode::PageUp) => guide.scroll_by(-page),
                    (_, KeyCode::PageDown) => guide.scroll_by(page),
                    (Focus::Content, KeyCode::Char('t')) => {
                        let offset = guide.layout().map_or(0.0, |g| g.top_offset);
                        let heading = guide
                            .geometry()
                            .heading_at(guide.scroll_top() + offset)
                            .or_else(|| guide.headings().first().map(|h| h.id));
                        let toggled = heading.is_some_and(|h| guide.toggle_major_section(h));
                        if !toggled {
                            viewer.message = Some("Sections only fold in narrow layout".to_string());
                        }
                    }
                    (Focus::Content, KeyCode::Char('n')) => {
                        let links = guide.cross_references_in_view();
                        if links.is_empty() {
                            viewer.message = Some("No links on screen".to_string());
                        } else {
                            let link = &links[viewer.link_index % links.len()];
                            viewer.link_index = viewer.link_index.wrapping_add(1);
                            let target = LinkTarget::Anchor(link.anchor.clone());
                            if !guide.activate(&target, Instant::now()) {
                                viewer.message = Some(format!("Unknown link: #{}", link.anchor));
                            }
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        guide.tick(Instant::now());
    }
}
