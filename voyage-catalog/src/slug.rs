/// URL-safe package slug built from the title and trip length,
/// e.g. `("Bali Escape!", 5)` gives `bali-escape-5-days`.
pub fn slugify(title: &str, duration_days: u32) -> String {
    let mut slug = String::with_capacity(title.len() + 8);
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    let unit = if duration_days == 1 { "day" } else { "days" };
    if slug.is_empty() {
        format!("{}-{}", duration_days, unit)
    } else {
        format!("{}-{}-{}", slug, duration_days, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Bali Escape!", 5), "bali-escape-5-days");
        assert_eq!(slugify("  Magical   Maldives -- Overwater ", 4), "magical-maldives-overwater-4-days");
        assert_eq!(slugify("Day Trip", 1), "day-trip-1-day");
        assert_eq!(slugify("???", 3), "3-days");
    }
}
