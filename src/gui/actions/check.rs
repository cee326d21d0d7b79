// src/gui/actions/check.rs
use crate::{advise, gui::app::App};

pub fn check(app: &mut App) {
    let user = app.user_hardware();
    let game = app.game_requirements();
    let opts = &app.state.options.check;

    if user.cpu.is_empty() && user.gpu.is_empty() && user.ram.is_empty() {
        logd!("Check: Clicked with no hardware entered");
    }

    let advice = advise::advise(&user, &game, opts);
    let c = &advice.comparison;
    logf!(
        "Check: cpu={} gpu={} ram={} → min={} rec={}",
        c.details.cpu.status.as_str(),
        c.details.gpu.status.as_str(),
        c.details.ram.status.as_str(),
        c.can_run_minimum,
        c.can_run_recommended
    );

    let msg = if game.has_any_requirement() {
        s!("Checked")
    } else {
        s!("Checked (no requirements entered; nothing can fail)")
    };
    app.advice = Some(advice);
    app.status(msg);
}
