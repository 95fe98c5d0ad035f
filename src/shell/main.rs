use anyhow::Result;
use clap::Parser;
use dirview::core::config::{Args, Config};
use dirview::core::telemetry::logging::init_logging;
use dirview::ui::terminal::{parse_input, Input, TerminalSurface};
use dirview::ui::{Browser, Command, Flow};
use std::io::{self, BufRead};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    init_logging(&config.log_level);

    let start = config.start_dir()?;
    let surface = TerminalSurface::new(io::stdout().lock(), config.output);
    let mut browser = Browser::initialize(surface, &start)?;

    let stdin = io::stdin();
    browser.surface_mut().prompt()?;
    for line in stdin.lock().lines() {
        let flow = match parse_input(&line?) {
            Input::Command(command) => browser.handle(command)?,
            Input::RootIndex(ix) => match browser.surface().roots().get(ix).cloned() {
                Some(root) => browser.handle(Command::SelectRoot(root))?,
                None => {
                    browser.surface_mut().message(&format!("no root #{ix}"))?;
                    Flow::Continue
                }
            },
            Input::Roots => {
                browser.surface_mut().print_roots()?;
                Flow::Continue
            }
            Input::Help => {
                browser.surface_mut().print_help()?;
                Flow::Continue
            }
            Input::Empty => Flow::Continue,
            Input::Unknown(text) => {
                browser
                    .surface_mut()
                    .message(&format!("unknown command: {text} (try `help`)"))?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            break;
        }
        browser.surface_mut().prompt()?;
    }

    info!("shutting down");
    Ok(())
}
