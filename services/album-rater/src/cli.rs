//!
//! src/cli.rs
//!
//! Command line surface. The command takes no flags beyond help and
//! version, anything else is rejected before a transaction starts.
//!

use clap::Parser;

const LONG_ABOUT: &str = "\
Add an album to the rating database.

It will first prompt you to enter the uri of a spotify album
    - Then checks if it is actually an album URI
    - Then strips the URI to an ID
    - Then it will display the album properties and allow you to confirm
Then it will ask you for a rating
    - Then checks if it is an integer 1-10
Then it will push to the rating database.

Endpoints are read from ACCESS, ALBUM and MONGO (environment or .env).";

#[derive(Parser, Debug)]
#[command(
    name = "album-rater",
    version,
    about = "Add an album to the rating database",
    long_about = LONG_ABOUT
)]
pub struct Cli {}
