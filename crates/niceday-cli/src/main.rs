//! Command-line front end for the niceday-api.
//!
//! Each subcommand maps onto one client operation and prints the result as
//! JSON on stdout.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use niceday::{Acknowledgement, NicedayClient, Tracker, TrackerStatus};
use tracing::{debug, info};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Talk to the niceday-api from the command line.
#[derive(Parser, Debug)]
#[command(name = "niceday")]
#[command(version, about, long_about = None)]
struct Args {
    /// niceday-api base URL
    #[arg(long, env = "NICEDAY_API_URI", default_value = niceday::DEFAULT_URL)]
    url: String,

    /// Extra header sent with every request, as NAME:VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a user's profile
    Profile {
        user_id: i64,

        /// Print the full user data instead of the profile keys
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Send a text message to a user
    Message { recipient_id: i64, text: String },

    /// Enable or disable a tracker for a user
    TrackerStatus {
        user_id: i64,

        /// Tracker name, e.g. "smoking"
        tracker: Tracker,

        /// Disable the tracker instead of enabling it
        #[arg(long, default_value_t = false)]
        disable: bool,
    },

    /// List smoking tracker entries between two timestamps
    Smoking {
        user_id: i64,

        /// Start of the range, e.g. 2021-10-01T00:00:00
        #[arg(long)]
        start: NaiveDateTime,

        /// End of the range, e.g. 2022-02-10T00:00:00
        #[arg(long)]
        end: NaiveDateTime,
    },

    /// Schedule a recurring tracker reminder
    Reminder {
        user_id: i64,

        /// Tracker name, e.g. "smoking"
        tracker: Tracker,

        /// Reminder title shown in the app
        title: String,

        /// Recurrence rule, e.g. "RRULE:FREQ=DAILY"
        rrule: String,
    },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got {:?}", s))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn print_ack(ack: &Acknowledgement) -> Result<(), Box<dyn std::error::Error>> {
    match ack.json() {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(niceday::Error::NonJsonResponse(_)) => println!("{}", ack.body),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let client = args
        .headers
        .iter()
        .fold(NicedayClient::builder().url(&args.url), |builder, (name, value)| {
            builder.header(name, value)
        })
        .build()?;
    info!(niceday_url = %client.base_url(), headers = args.headers.len(), "Using niceday-api");

    match args.command {
        Command::Profile { user_id, raw } => {
            debug!(user_id, raw, "Fetching profile");
            let value = if raw {
                client.profiles().raw(user_id).await?
            } else {
                serde_json::to_value(client.profiles().get(user_id).await?)?
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::Message { recipient_id, text } => {
            debug!(recipient_id, "Posting message");
            let ack = client.messages().post(recipient_id, &text).await?;
            print_ack(&ack)?;
        }
        Command::TrackerStatus {
            user_id,
            tracker,
            disable,
        } => {
            let status = TrackerStatus::for_tracker(tracker, !disable);
            debug!(user_id, %tracker, enabled = status.is_enabled, "Setting tracker status");
            let ack = client.trackers().set_statuses(user_id, &[status]).await?;
            print_ack(&ack)?;
        }
        Command::Smoking { user_id, start, end } => {
            debug!(user_id, %start, %end, "Fetching smoking tracker");
            let entries = client.trackers().smoking(user_id, &start, &end).await?;
            info!(count = entries.len(), "Smoking tracker entries fetched");
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Reminder {
            user_id,
            tracker,
            title,
            rrule,
        } => {
            debug!(user_id, %tracker, "Setting tracker reminder");
            let ack = client
                .trackers()
                .set_reminder(user_id, tracker.schedule_type(), &title, rrule.as_str())
                .await?;
            print_ack(&ack)?;
        }
    }

    Ok(())
}
