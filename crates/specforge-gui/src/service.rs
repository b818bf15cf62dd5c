//! Services for background tasks.
//!
//! These functions wrap the backend clients for use with Iced's
//! `Task::perform` pattern; every network round trip in the app starts here.

use std::collections::BTreeSet;

use iced::Task;

use specforge_backend::{AuthClient, Session, TableClient, load_seeded_tables, sign_out_with_timeout};
use specforge_core::SeedTable;

use crate::message::{AuthMessage, DashboardMessage, Message};
use crate::state::AuthMode;

/// Sign in or sign up, settling with [`AuthMessage::Completed`].
pub fn authenticate(auth: AuthClient, mode: AuthMode, email: String, password: String) -> Task<Message> {
    Task::perform(
        async move {
            let result = match mode {
                AuthMode::SignIn => auth.sign_in(&email, &password).await,
                AuthMode::SignUp => auth.sign_up(&email, &password).await,
            };
            result.map_err(|e| e.to_string())
        },
        |result| Message::Auth(AuthMessage::Completed(result)),
    )
}

/// Reload all seeded tables, settling with [`DashboardMessage::Loaded`].
///
/// `version` is the reload version captured from `begin_reload`; the handler
/// uses it to discard results that a newer reload has superseded.
pub fn reload_tables(
    tables: TableClient,
    session: Session,
    skip: BTreeSet<SeedTable>,
    version: u64,
) -> Task<Message> {
    Task::perform(
        async move { load_seeded_tables(&tables, &session, &skip).await },
        move |outcome| Message::Dashboard(DashboardMessage::Loaded { version, outcome }),
    )
}

/// Invalidate the session remotely, settling with
/// [`DashboardMessage::SignedOut`].
///
/// The remote call is raced against its timeout inside the backend crate;
/// either way the handler clears the local session when this settles.
pub fn sign_out(auth: AuthClient, session: Session) -> Task<Message> {
    Task::perform(
        async move { sign_out_with_timeout(&auth, &session).await },
        |result| {
            Message::Dashboard(DashboardMessage::SignedOut {
                error: result.err().map(|e| e.to_string()),
            })
        },
    )
}
