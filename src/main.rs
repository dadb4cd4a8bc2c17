#![cfg_attr(feature = "desktop", windows_subsystem = "windows")]
mod components;
mod state_management;
mod utils;
mod views;

mod prelude {
    pub use super::components::alerts::{alert_error, alert_info, alert_success, alert_warn};
    pub use super::state_management::prelude::*;
    pub use dioxus::prelude::*;
}

use serde::{Deserialize, Serialize};

use components::alerts::AlertsContainer;
use prelude::*;

use views::{
    backup::{BackupImportedView, BackupView},
    initialize::InitializeView,
    wallet_home::WalletHomeView,
};

#[derive(Clone, Routable, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    WalletHomeView {},
    #[nest("/initialize")]
        #[route("/")]
        InitializeView {},
        #[route("/backup")]
        BackupView {},
        #[route("/backup-imported")]
        BackupImportedView {},
    #[end_nest]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

static TITLE: &str = "Wallet";

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    state_management::use_init_services();

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }

        div { id: "app", class: "text-base",
            AlertsContainer {}
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "We are terribly sorry, but the page you requested doesn't exist." }
        pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    log::info!("starting app");
    dioxus::launch(App)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::WalletHomeView {}.to_string(), "/");
        assert_eq!(Route::BackupView {}.to_string(), "/initialize/backup");
        assert_eq!(
            Route::BackupImportedView {}.to_string(),
            "/initialize/backup-imported"
        );
    }

    #[test]
    fn backup_paths_parse_to_their_views() {
        assert_eq!(
            "/initialize/backup".parse::<Route>().ok(),
            Some(Route::BackupView {})
        );
        assert_eq!(
            "/initialize/backup-imported".parse::<Route>().ok(),
            Some(Route::BackupImportedView {})
        );
    }
}
