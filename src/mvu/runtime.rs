use crate::error::AppError;
use crate::mvu::game::{Deps, GameModel, Msg, run_effect, update};

/// Drives one game page request to completion. Effects are executed one at a
/// time; the message each yields is fed back through `update`, which may queue
/// further effects.
///
/// # Errors
///
/// Will return `Err` with the first failure any effect reports
pub async fn run_game(
    model: &mut GameModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), AppError> {
    let mut pending = update(model, init_msg);
    while let Some(effect) = pending.pop() {
        tracing::debug!(game_id = %model.id, ?effect, "running game page effect");
        match run_effect(effect, model, deps).await {
            Msg::Failed(e) => {
                tracing::debug!(game_id = %model.id, error = %e, "game page effect failed");
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            msg => pending.extend(update(model, msg)),
        }
    }
    Ok(())
}
