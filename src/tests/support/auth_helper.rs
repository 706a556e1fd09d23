use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::stubs::StubTokenProvider;

/// Token provider app data that authenticates every bearer token as `user_id`
pub fn token_provider(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(StubTokenProvider::valid(user_id));
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
