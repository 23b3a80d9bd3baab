//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "INVOICE_QR_SCALE" => validate_int_range(value, 1, 32)?,
        "INVOICE_QR_MARGIN" => validate_int_range(value, 0, 16)?,
        "INVOICE_CARD_WIDTH" => validate_int_range(value, 240, 2048)?,
        "INVOICE_SHOP_NAME" => {
            if value.trim().is_empty() || value.chars().count() > 64 {
                return Err("shop name must be 1-64 characters".into());
            }
        }
        "INVOICE_FONT_PATH" => {
            if !value.is_empty() {
                let ext = std::path::Path::new(value)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(str::to_lowercase)
                    .unwrap_or_default();
                if !matches!(ext.as_str(), "ttf" | "otf") {
                    return Err("font must be a .ttf or .otf file".into());
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: u32, max: u32) -> Result<(), String> {
    let v: u32 = value.parse().map_err(|_| "must be a non-negative integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
