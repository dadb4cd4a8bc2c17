use crate::prelude::*;

use crate::Route;

pub mod backup;
pub mod initialize;
pub mod wallet_home;

/// Capability to move the application to another page
pub trait Navigate {
    fn go_to(&self, route: Route);
}

impl Navigate for Navigator {
    fn go_to(&self, route: Route) {
        if let Some(failure) = self.push(route) {
            log::warn!("Navigation failed: {failure:?}");
        }
    }
}

/// Leaves the onboarding for the main wallet screen
pub fn proceed_to_main(navigator: &impl Navigate) {
    log::debug!("proceed_to_main");
    navigator.go_to(Route::WalletHomeView {});
}
