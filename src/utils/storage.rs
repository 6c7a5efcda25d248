use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Store a raw string value (used for the opaque bearer token).
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error writing to localStorage".to_string())?;
    Ok(())
}

/// Load a raw string value.
pub fn load_raw(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error removing from localStorage".to_string())?;
    Ok(())
}
