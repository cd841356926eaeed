use crate::app::App;
use crate::auth::Authenticator;
use anyhow::Result;

use super::action_queue::Action;

pub(super) async fn run_action(
    action: Action,
    app: &mut App,
    auth: &dyn Authenticator,
) -> Result<()> {
    match action {
        Action::SubmitLogin => {
            app.submit_login(auth).await;
        }
    }
    Ok(())
}
