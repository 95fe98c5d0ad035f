use super::{Command, DisplaySurface, Flow};
use crate::core::errors::Result;
use crate::pages::browser::DirectoryView;
use std::path::Path;
use tracing::{debug, warn};

pub const LISTING_FAILED_MESSAGE: &str = "Unable to refresh the file list";

/// Routes commands to the [`DirectoryView`] and publishes every change to the surface.
pub struct Browser<S> {
    view: DirectoryView,
    surface: S,
}

impl<S: DisplaySurface> Browser<S> {
    /// Publishes the roots and the first listing of `start`.
    pub fn initialize(surface: S, start: &Path) -> Result<Self> {
        let (view, loaded) = DirectoryView::initialize(start);
        let mut browser = Self { view, surface };
        let roots: Vec<String> = browser
            .view
            .root_options()
            .iter()
            .map(|r| r.display().to_string())
            .collect();
        let selected = (!roots.is_empty()).then_some(0);
        browser.surface.show_roots(&roots, selected)?;
        browser.publish(loaded.map(|_| true))?;
        Ok(browser)
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Applies one command. Listing failures are shown as warnings, never returned;
    /// the error path is reserved for surface I/O.
    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "handling command");
        let outcome = match command {
            Command::Activate { name, click_count } => {
                if click_count != 2 {
                    return Ok(Flow::Continue);
                }
                self.view.navigate_into(&name)
            }
            Command::Up => self.view.navigate_up(),
            Command::SelectRoot(root) => self.view.select_root(Path::new(&root)).map(|_| true),
            Command::Refresh => self.view.refresh().map(|_| true),
            Command::Sort(key) => {
                self.view.sort_by(key);
                let rows = self.view.rows();
                self.surface.show_rows(self.view.columns(), &rows)?;
                return Ok(Flow::Continue);
            }
            Command::Exit => return Ok(Flow::Exit),
        };
        self.publish(outcome)?;
        Ok(Flow::Continue)
    }

    /// `Ok(false)` means the command was a no-op and nothing is redrawn.
    fn publish(&mut self, outcome: Result<bool>) -> Result<()> {
        match outcome {
            Ok(false) => Ok(()),
            Ok(true) => {
                self.surface
                    .show_path(&self.view.current_path().display().to_string())?;
                let rows = self.view.rows();
                self.surface.show_rows(self.view.columns(), &rows)?;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "listing failed");
                self.surface
                    .show_path(&self.view.current_path().display().to_string())?;
                self.surface.show_rows(self.view.columns(), &[])?;
                self.surface.warn(LISTING_FAILED_MESSAGE)?;
                Ok(())
            }
        }
    }
}
