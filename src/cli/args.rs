use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mantrid")]
#[command(about = "Register shell command templates as aliases and run them by name")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage aliases
    Alias {
        #[command(subcommand)]
        command: AliasCommands,
    },

    /// Execute an alias command
    #[command(long_about = DO_LONG_ABOUT)]
    Do {
        /// Alias name followed by its parameters
        #[arg(
            value_name = "ARGS",
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AliasCommands {
    /// Add a new alias
    Add {
        /// Alias name
        name: String,

        /// Command template ($1, $2, $@ and $* are substituted)
        #[arg(allow_hyphen_values = true)]
        command: String,
    },

    /// List all aliases
    List,

    /// Edit an existing alias
    Edit {
        /// Alias name
        name: String,

        /// New command template
        #[arg(allow_hyphen_values = true)]
        new_command: String,
    },

    /// Remove an alias
    Remove {
        /// Alias name
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print an example config.yaml
    Example,
}

const DO_LONG_ABOUT: &str = "\
Execute a stored alias command with optional parameter substitution.

Parameter handling:
  - If the alias contains placeholders ($1, $2, $@, $*), parameters are substituted
  - If the alias has no placeholders, parameters are appended to the end

Parameter substitution:
  $1, $2, $3...  Positional parameters
  $@             All parameters (space-separated)
  $*             All parameters (same as $@)

Parameter passing:
  mantrid do <alias> [params...]      Direct parameters
  mantrid do <alias> -- [params...]   Parameters after the -- separator
                                      (useful for passing flags like -l, --verbose)

Examples:
  mantrid alias add ls \"ls\"
  mantrid do ls -- -la /tmp            # Executes: ls -la /tmp

  mantrid alias add greet \"echo Hello, $1!\"
  mantrid do greet -- World            # Executes: echo Hello, World!

  mantrid alias add search \"grep -r $@ .\"
  mantrid do search -- TODO            # Executes: grep -r TODO .

WARNING: aliases run directly in your system shell. Parameters are inserted
verbatim without shell escaping; only create aliases for commands you trust.";
