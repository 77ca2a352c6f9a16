//! Command dispatch between the session and the catalog.

use holocron_auth::{LoginOutcome, Session, TokenStore};
use holocron_core::{Catalog, LoadStatus, Transport};
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::view;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Print(String),
    /// Exit the loop.
    Quit,
}

/// Application state: one session and one catalog.
pub struct App<S: TokenStore + 'static, T: Transport> {
    session: Session<S>,
    catalog: Catalog<T>,
}

impl<S: TokenStore + 'static, T: Transport> App<S, T> {
    /// Creates the application.
    pub const fn new(session: Session<S>, catalog: Catalog<T>) -> Self {
        Self { session, catalog }
    }

    /// Resumes a persisted session and loads the first page if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn start(&self) -> anyhow::Result<String> {
        match self.session.restore()? {
            Some(user) => {
                info!("Resuming session for {}", user.username);
                let status = self.catalog.load_first_page().await;
                Ok(format!(
                    "Welcome back, {}.\n{}",
                    user.username,
                    self.render_load(status)
                ))
            }
            None => Ok("Not signed in. Type 'login <user> <password>' or 'help'.".to_string()),
        }
    }

    /// Runs one command.
    ///
    /// # Errors
    ///
    /// Returns an error only if the session store fails. Fetch failures are
    /// reported in the rendered catalog instead.
    pub async fn run(&self, command: Command) -> anyhow::Result<Reply> {
        if command.requires_session() && !self.session.is_authenticated()? {
            debug!(?command, "Rejected command without session");
            return Ok(Reply::Print(
                "Please log in first ('login <user> <password>').".to_string(),
            ));
        }

        let text = match command {
            Command::Login { username, password } => {
                match self.session.login(&username, &password).await? {
                    LoginOutcome::Success { username, .. } => {
                        let status = self.catalog.load_first_page().await;
                        format!("Welcome, {username}.\n{}", self.render_load(status))
                    }
                    LoginOutcome::Failure { error } => format!("Login failed: {error}"),
                }
            }
            Command::Logout => {
                self.session.logout()?;
                self.catalog.close_detail();
                "Signed out.".to_string()
            }
            Command::WhoAmI => match self.session.service().current_user()? {
                Some(user) => format!("Signed in as {}.", user.username),
                None => "Not signed in.".to_string(),
            },
            Command::List => self.render_load(self.catalog.load_first_page().await),
            Command::Next => self.render_load(self.catalog.next().await),
            Command::Prev => self.render_load(self.catalog.previous().await),
            Command::Page(page) => self.render_load(self.catalog.goto_page(page).await),
            Command::Retry => self.render_load(self.catalog.retry().await),
            Command::Search(text) => {
                self.catalog.set_search(text);
                self.render()
            }
            Command::Homeworld(name) => {
                self.catalog.set_homeworld(name);
                self.render()
            }
            Command::Species(name) => {
                self.catalog.set_species(name);
                self.render()
            }
            Command::Film(title) => {
                self.catalog.set_film(title);
                self.render()
            }
            Command::Clear => {
                self.catalog.clear_filters();
                self.render()
            }
            Command::Facets => view::facets(&self.catalog.facets()),
            Command::Show(index) => match self.catalog.select(index).await {
                Some(detail) => view::detail(&detail),
                None => format!("No character number {} in the list.", index + 1),
            },
            Command::Close => {
                self.catalog.close_detail();
                self.render()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Print(text))
    }

    fn render(&self) -> String {
        view::catalog(&self.catalog.state(), &self.catalog.page_strip())
    }

    fn render_load(&self, status: LoadStatus) -> String {
        match status {
            LoadStatus::Unavailable => "No page in that direction.".to_string(),
            LoadStatus::Loaded
            | LoadStatus::Failed
            | LoadStatus::Superseded
            | LoadStatus::Unchanged => self.render(),
        }
    }
}
