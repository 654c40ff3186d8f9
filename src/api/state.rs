use std::sync::Arc;

use crate::repo::LeagueRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn LeagueRepository>,
}
