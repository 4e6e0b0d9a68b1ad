mod action;
pub use action::Action;

mod fetch;
pub use fetch::fetch_app_data;

mod mutate;
pub use mutate::Vote;

mod session;
pub use session::Session;

mod storage;
pub use storage::{load_app_data, save_app_data, MemoryStorage, Storage, KEY_APP_DATA};

mod store;
pub use store::{EntityRef, Store};

mod timeago;
pub use timeago::{time_ago, time_labels, LABEL_REFRESH_INTERVAL};

mod ui_state;

pub mod api {
    pub use komento_api::*;
}
