use tracing::info;

use crate::session::{controller::Session, outcome::Outcome};

pub fn handle(session: &mut Session) -> Outcome {
    if let Some(id) = session.current.take() {
        info!(account = %id, "logout");
    }
    session.pending = None;
    Outcome::LoggedOut
}
