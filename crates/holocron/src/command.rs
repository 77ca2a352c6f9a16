//! Parsing of terminal input lines.

/// Usage text printed by `help`.
pub const HELP: &str = "\
Session:
  login <user> <password>   sign in (admin/password123, user/user123, luke/skywalker)
  logout                    sign out
  whoami                    show the signed-in user

Browsing:
  list                      reload the first page
  next | prev               follow the page cursors
  page <n>                  jump to page n
  retry                     repeat the last failed load

Filtering (current page only):
  search <text>             name contains text (empty clears)
  homeworld <name>          exact homeworld (empty clears)
  species <name>            exact species (empty clears)
  film <title>              appears in film (empty clears)
  clear                     drop all filters
  facets                    list filter options

Details:
  show <n>                  open the n-th listed character
  close                     close the detail view

  help | quit";

/// One user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in.
    Login {
        /// Account name.
        username: String,
        /// Account password.
        password: String,
    },
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    WhoAmI,
    /// Reload the first page.
    List,
    /// Follow the `next` cursor.
    Next,
    /// Follow the `previous` cursor.
    Prev,
    /// Jump to a one-based page number.
    Page(u32),
    /// Set the name search.
    Search(String),
    /// Set the homeworld filter.
    Homeworld(String),
    /// Set the species filter.
    Species(String),
    /// Set the film filter.
    Film(String),
    /// Drop all filters.
    Clear,
    /// List filter options.
    Facets,
    /// Open the detail view for a zero-based index into the visible list.
    Show(usize),
    /// Close the detail view.
    Close,
    /// Repeat the last listing request.
    Retry,
    /// Print usage.
    Help,
    /// Exit.
    Quit,
}

impl Command {
    /// Parses a line of input.
    ///
    /// Blank lines yield `Ok(None)`. `show` takes the one-based number
    /// printed next to each character.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb.to_ascii_lowercase().as_str() {
            "login" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next(), args.next()) {
                    (Some(username), Some(password), None) => Self::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    },
                    _ => return Err("usage: login <user> <password>".to_string()),
                }
            }
            "logout" => Self::Logout,
            "whoami" => Self::WhoAmI,
            "list" => Self::List,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "page" => Self::Page(parse_number(rest, "page")?),
            "search" => Self::Search(rest.to_string()),
            "homeworld" => Self::Homeworld(rest.to_string()),
            "species" => Self::Species(rest.to_string()),
            "film" => Self::Film(rest.to_string()),
            "clear" => Self::Clear,
            "facets" => Self::Facets,
            "show" => {
                let number: usize = parse_number(rest, "show")?;
                Self::Show(number - 1)
            }
            "close" => Self::Close,
            "retry" => Self::Retry,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        Ok(Some(command))
    }

    /// Returns true for commands that need a signed-in session.
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::Login { .. } | Self::Logout | Self::WhoAmI | Self::Help | Self::Quit
        )
    }
}

/// Parses a positive number argument.
fn parse_number<N>(arg: &str, verb: &str) -> Result<N, String>
where
    N: std::str::FromStr + PartialOrd + From<u8>,
{
    arg.parse::<N>()
        .ok()
        .filter(|n| *n >= N::from(1))
        .ok_or_else(|| format!("usage: {verb} <n>, with n starting at 1"))
}
