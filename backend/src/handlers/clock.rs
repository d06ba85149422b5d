use axum::{extract::State, Json};

use crate::{state::AppState, utils::time::now_in_timezone, view_state::ClockState};

pub async fn get_clock(State(state): State<AppState>) -> Json<ClockState> {
    Json(ClockState::at(now_in_timezone(&state.config.time_zone)))
}
