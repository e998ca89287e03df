//! [`Args`] definitions.

use clap::Parser;
use common::YearMonth;
use service::domain::member;

/// Salary calendar of a team member.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// ID of the team member to report the salary of.
    ///
    /// Overrides the `data.member` configuration.
    #[arg(short, long)]
    pub member: Option<String>,

    /// Month the salary is paid for, in `YYYY-MM` format.
    ///
    /// Defaults to the current month.
    #[arg(long)]
    pub month: Option<YearMonth>,

    /// Number of months to shift the reported month by.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Returns the [`member::Id`] to report the salary of, falling back to
    /// the `default` one.
    ///
    /// # Errors
    ///
    /// If neither [`Args::member`] nor the `default` one is specified.
    pub fn member_id(
        &self,
        default: Option<&str>,
    ) -> Result<member::Id, Error> {
        self.member
            .as_deref()
            .or(default)
            .map(member::Id::from)
            .ok_or(Error::NoMember)
    }

    /// Returns the [`YearMonth`] to report the salary for.
    ///
    /// # Errors
    ///
    /// If the [`Args::offset`] leads out of the supported range of years.
    pub fn target(&self) -> Result<YearMonth, Error> {
        self.month
            .unwrap_or_else(YearMonth::current)
            .offset(self.offset)
            .ok_or(Error::MonthOutOfRange)
    }
}

crate::define_error! {
    enum Error {
        #[code = "NO_MEMBER"]
        #[message = "Team member is specified neither by `--member` nor by \
                     `data.member` configuration"]
        NoMember,

        #[code = "MONTH_OUT_OF_RANGE"]
        #[message = "Reported month is out of the supported range"]
        MonthOutOfRange,
    }
}
