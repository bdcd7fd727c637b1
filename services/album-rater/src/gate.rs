//!
//! src/gate.rs
//!
//! Shows the resolved album and asks the user to confirm it before
//! anything is written remotely.
//!

use crate::errors::RaterError;
use crate::prompt::Prompter;
use crate::types::AlbumRecord;

pub const CONFIRM_LABEL: &str = "Is this the album you would like to rate?";

#[derive(Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed(AlbumRecord),
    Rejected
}

/// A failed prompt is an error, a "no" is a normal [`Confirmation::Rejected`]
pub fn confirm_album<P: Prompter + ?Sized>(prompter: &mut P, record: AlbumRecord) ->
    Result<Confirmation, RaterError> {
    prompter.say(&format!("\n{} by {}\n", record.album_name, record.artist_name))?;

    if prompter.confirm(CONFIRM_LABEL)? {
        prompter.say("Okay time to rate")?;
        Ok(Confirmation::Confirmed(record))
    } else {
        Ok(Confirmation::Rejected)
    }
}
