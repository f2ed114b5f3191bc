//! # Input Commands
//!
//! Maps one line of user input to a `UserCommand` using small handler
//! objects held in a registry. Input no handler claims is a search.

/// Actions the controller can perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Look up a post; carries the raw input for validation
    Search(String),
    ShowRecentPosts,
    ClearSearch,
    ReloadRecentPosts,
    Help,
    Quit,
}

/// Trait for input commands
pub trait InputCommand: Send {
    /// Check if this command handles the given (trimmed, lowercased) input
    fn can_handle(&self, input: &str) -> bool;

    /// Produce the command for the input
    fn command(&self, input: &str) -> UserCommand;

    /// Get command name for debugging
    fn name(&self) -> &'static str;
}

/// Handler matching a fixed set of words
struct KeywordCommand {
    words: &'static [&'static str],
    command: UserCommand,
    name: &'static str,
}

impl InputCommand for KeywordCommand {
    fn can_handle(&self, input: &str) -> bool {
        self.words.contains(&input)
    }

    fn command(&self, _input: &str) -> UserCommand {
        self.command.clone()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Registry of input commands
pub struct CommandRegistry {
    commands: Vec<Box<dyn InputCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: vec![
                Box::new(KeywordCommand {
                    words: &["q", "quit", "exit"],
                    command: UserCommand::Quit,
                    name: "QuitCommand",
                }),
                Box::new(KeywordCommand {
                    words: &["r", "recent"],
                    command: UserCommand::ShowRecentPosts,
                    name: "ShowRecentPostsCommand",
                }),
                Box::new(KeywordCommand {
                    words: &["c", "clear"],
                    command: UserCommand::ClearSearch,
                    name: "ClearSearchCommand",
                }),
                Box::new(KeywordCommand {
                    words: &["reload"],
                    command: UserCommand::ReloadRecentPosts,
                    name: "ReloadCommand",
                }),
                Box::new(KeywordCommand {
                    words: &["h", "help", "?"],
                    command: UserCommand::Help,
                    name: "HelpCommand",
                }),
            ],
        }
    }

    /// Add a command handler. Handlers registered later are tried last.
    pub fn register(&mut self, command: Box<dyn InputCommand>) {
        self.commands.push(command);
    }

    /// Turn an input line into a command
    pub fn parse(&self, line: &str) -> UserCommand {
        let normalized = line.trim().to_lowercase();
        for handler in &self.commands {
            if handler.can_handle(&normalized) {
                tracing::debug!("Input '{}' handled by {}", line, handler.name());
                return handler.command(&normalized);
            }
        }
        UserCommand::Search(line.to_string())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
