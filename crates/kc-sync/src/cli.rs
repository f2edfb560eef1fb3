//! CLI argument parsing.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// kc-sync - converge Keycloak entities from the command line.
#[derive(Debug, Parser)]
#[command(name = "kc-sync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Server URL (overrides config).
    #[arg(short, long, env = "KEYCLOAK_API_BASE")]
    pub server: Option<String>,

    /// Realm to log in to (overrides config, defaults to master).
    #[arg(short, long, env = "KEYCLOAK_REALM")]
    pub realm: Option<String>,

    /// Client ID used to log in (overrides config).
    #[arg(long, env = "KEYCLOAK_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Client secret used to log in (overrides config).
    #[arg(long, env = "KEYCLOAK_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Context path in front of every address (overrides config).
    #[arg(long)]
    pub context_path: Option<String>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Realm commands.
    #[command(subcommand)]
    Realm(RealmCommand),

    /// Client commands.
    #[command(subcommand)]
    Client(ClientCommand),

    /// Client role commands.
    #[command(subcommand)]
    Role(RoleCommand),

    /// User commands.
    #[command(subcommand)]
    User(UserCommand),

    /// Group commands.
    #[command(subcommand)]
    Group(GroupCommand),

    /// User role mapping commands.
    #[command(subcommand)]
    UserRole(UserRoleCommand),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Log in and report the session.
    Status,
}

/// Realm commands.
#[derive(Debug, Subcommand)]
pub enum RealmCommand {
    /// Get realm settings.
    Get {
        /// Realm name.
        name: String,
    },

    /// Delete a realm.
    Delete {
        /// Realm name.
        name: String,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// Client commands.
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Get a client with its credentials.
    Get {
        /// Client server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Print a confidential client's secret.
    Secret {
        /// Client server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Delete a client.
    Delete {
        /// Client server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// Client role commands.
#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Get a client role with its composites.
    Get {
        /// Role name.
        name: String,

        /// Server id of the owning client.
        #[arg(long)]
        client: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// List the roles a composite role references.
    Composites {
        /// Role name.
        name: String,

        /// Server id of the owning client.
        #[arg(long)]
        client: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Make a role reference exactly the given roles.
    SyncComposites {
        /// Role name.
        name: String,

        /// Server id of the owning client.
        #[arg(long)]
        client: String,

        /// Id of a role to reference (repeatable; none clears the set).
        #[arg(long = "composite")]
        composites: Vec<String>,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Delete a client role.
    Delete {
        /// Role name.
        name: String,

        /// Server id of the owning client.
        #[arg(long)]
        client: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// User commands.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Get a user.
    Get {
        /// User server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Delete a user.
    Delete {
        /// User server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// Group commands.
#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// Get a group.
    Get {
        /// Group server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// List group members.
    Members {
        /// Group server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Make a group contain exactly the given users.
    SyncMembers {
        /// Group server id.
        id: String,

        /// Id of a user that should be a member (repeatable; none empties the group).
        #[arg(long = "member")]
        members: Vec<String>,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Delete a group.
    Delete {
        /// Group server id.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// User role mapping commands.
#[derive(Debug, Subcommand)]
pub enum UserRoleCommand {
    /// List roles mapped to a user.
    List {
        /// User server id.
        user: String,

        /// Server id of a client, for client roles.
        #[arg(long)]
        client: Option<String>,

        /// Include roles held through composites and groups.
        #[arg(long)]
        effective: bool,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Map a role to a user.
    Add {
        /// User server id.
        user: String,

        /// Role name or id.
        role: String,

        /// Server id of a client, for client roles.
        #[arg(long)]
        client: Option<String>,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Unmap a role from a user.
    Remove {
        /// User server id.
        user: String,

        /// Role name or id.
        role: String,

        /// Server id of a client, for client roles.
        #[arg(long)]
        client: Option<String>,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },
}

/// Config commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Initialize configuration interactively.
    Init,
}
