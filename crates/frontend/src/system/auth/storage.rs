use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the admin flag under `key`
pub fn save_admin_flag(key: &str, value: &str) {
    match get_local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write of '{}'", key);
            }
        }
        None => log::warn!("localStorage unavailable, admin session will not survive reload"),
    }
}

/// Read the admin flag stored under `key`
pub fn get_admin_flag(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Remove the admin flag
pub fn clear_admin_flag(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
