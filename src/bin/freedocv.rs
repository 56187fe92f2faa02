use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use freedoc::freedoc::ast::elements::Element;
use freedoc::freedoc::parse_document;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "freedocv")]
#[command(about = "A terminal UI viewer for classified documents")]
struct Args {
    /// Path to the document file to open
    file: PathBuf,
}

struct App {
    elements: Vec<Element>,
    file_name: String,
    scroll: u16,
}

impl App {
    fn new(file_path: PathBuf) -> io::Result<Self> {
        let content = fs::read_to_string(&file_path)?;
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(App {
            elements: parse_document(&content),
            file_name,
            scroll: 0,
        })
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let limit = self.elements.len().saturating_sub(1) as u16;
        if self.scroll < limit {
            self.scroll += 1;
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main block
        let title = format!("freedocv:: {} ({} elements)", self.file_name, self.elements.len());
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);

        frame.render_widget(block, area);

        // One line per element, colored by kind
        let lines: Vec<Line> = self.elements.iter().map(element_line).collect();
        let paragraph = Paragraph::new(lines).scroll((self.scroll, 0));
        frame.render_widget(paragraph, inner);
    }
}

/// Render one element as a colored summary line
fn element_line(element: &Element) -> Line<'static> {
    let color = match element {
        Element::Heading(_) | Element::RpaSection(_) => Color::Cyan,
        Element::Field(_) => Color::Green,
        Element::Bullet(_) | Element::Numbered(_) => Color::White,
        Element::CheckYes(_) => Color::Green,
        Element::CheckNo(_) => Color::Red,
        Element::Separator => Color::DarkGray,
        Element::CodeBlock(_) => Color::Yellow,
        Element::AsciiDiagram(_) => Color::Magenta,
        Element::Table(_) => Color::Blue,
        Element::Paragraph(_) => Color::Gray,
    };

    Line::from(Span::styled(
        format!("{}", element),
        Style::default().fg(color),
    ))
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut app = App::new(args.file)?;

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.draw(frame);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply a key event; returns whether the app should quit
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => true,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => true,
        (KeyCode::Up, _) => {
            app.scroll_up();
            false
        }
        (KeyCode::Down, _) => {
            app.scroll_down();
            false
        }
        _ => false,
    }
}
