use crate::finder::SupermarketFinder;
use std::sync::Arc;

pub struct AppState {
    pub finder: Arc<SupermarketFinder>,
}
