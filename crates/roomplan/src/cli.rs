//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roomplan")]
#[command(about = "Track Canadian registered accounts and CRA contribution room")]
pub struct Cli {
    /// Path to the data directory (default: ~/.roomplan/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Portfolio totals and recent activity
    Summary {
        /// User id (default: the primary profile)
        #[arg(long)]
        user: Option<u32>,
    },

    /// Manage user profiles
    #[command(subcommand)]
    User(UserCmd),

    /// Manage registered accounts
    #[command(subcommand)]
    Account(AccountCmd),

    /// Record and inspect transactions
    #[command(subcommand)]
    Tx(TxCmd),

    /// Show or update CRA contribution limits
    #[command(subcommand)]
    Limits(LimitsCmd),

    /// Manage savings goals
    #[command(subcommand)]
    Goal(GoalCmd),

    /// Suggest a contribution split across RRSP/TFSA/FHSA
    Optimize {
        /// Funds available to contribute
        #[arg(long)]
        funds: f64,

        /// Taxable income used to pick the marginal rate
        #[arg(long)]
        income: f64,

        #[arg(long)]
        user: Option<u32>,
    },

    /// Marginal tax rate lookup
    Rate {
        /// Province name, e.g. "Ontario" (unknown provinces use Ontario rates)
        #[arg(long)]
        province: String,

        #[arg(long)]
        income: f64,

        /// Optional RRSP contribution to estimate a refund for
        #[arg(long)]
        contribution: Option<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCmd {
    /// Create a profile
    Add {
        name: String,
        email: String,

        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: Option<String>,

        #[arg(long, default_value = "Ontario")]
        province: String,

        /// single, married, or common-law (default: single, or married for a spouse)
        #[arg(long)]
        status: Option<String>,

        /// Create as the spouse of the primary profile and link the couple
        #[arg(long)]
        spouse: bool,
    },

    /// Show a profile
    Show {
        #[arg(long)]
        user: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCmd {
    /// Open an account (RRSP, TFSA, RPP, DPSP, FHSA, RESP)
    Add {
        kind: String,
        institution: String,

        #[arg(long, default_value_t = 0.0)]
        balance: f64,

        /// Contribution room override (default depends on the account type)
        #[arg(long)]
        room: Option<f64>,

        #[arg(long)]
        user: Option<u32>,
    },

    /// List accounts
    List {
        #[arg(long)]
        user: Option<u32>,
    },

    /// Delete an account and its transactions
    Remove { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum TxCmd {
    /// Record a transaction against an account
    Add {
        /// Account id
        account: u32,
        amount: f64,

        /// contribution, withdrawal, or transfer
        #[arg(long, default_value = "contribution")]
        kind: String,

        /// Transaction date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Record even when the amount exceeds available room
        #[arg(long)]
        force: bool,
    },

    /// List transactions, newest first
    List {
        #[arg(long)]
        account: Option<u32>,

        #[arg(long)]
        user: Option<u32>,
    },

    /// Delete a transaction
    Remove { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum LimitsCmd {
    /// Show CRA figures and derived rooms
    Show {
        #[arg(long)]
        user: Option<u32>,
    },

    /// Update CRA figures; derived rooms are recomputed
    Set {
        #[arg(long)]
        user: Option<u32>,

        /// RRSP deduction limit for the tax year
        #[arg(long)]
        rrsp_room: Option<f64>,

        /// Unused RRSP room carried forward
        #[arg(long)]
        unused: Option<f64>,

        /// Pension adjustment reported on the T4
        #[arg(long)]
        pension_adjustment: Option<f64>,

        /// RPP contributions, used to estimate the pension adjustment
        #[arg(long)]
        rpp: Option<f64>,

        /// DPSP contributions, used to estimate the pension adjustment
        #[arg(long)]
        dpsp: Option<f64>,

        /// Cumulative TFSA room
        #[arg(long)]
        tfsa_room: Option<f64>,

        /// TFSA room restored by withdrawals
        #[arg(long)]
        tfsa_withdrawal_room: Option<f64>,

        /// FHSA annual limit
        #[arg(long)]
        fhsa_annual: Option<f64>,

        /// FHSA lifetime limit
        #[arg(long)]
        fhsa_lifetime: Option<f64>,

        /// Total contributed to the FHSA so far
        #[arg(long)]
        fhsa_contributed: Option<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalCmd {
    /// Create a savings goal
    Add {
        title: String,

        #[arg(long)]
        target: f64,

        #[arg(long, default_value_t = 0.0)]
        current: f64,

        /// Target date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,

        /// low, medium, or high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Comma-separated account types this goal draws on
        #[arg(long, value_delimiter = ',')]
        kinds: Vec<String>,

        /// Share the goal with the partner profile
        #[arg(long)]
        shared: bool,

        #[arg(long)]
        user: Option<u32>,
    },

    /// List goals with progress
    List {
        #[arg(long)]
        user: Option<u32>,
    },

    /// Delete a goal
    Remove { id: u32 },
}
