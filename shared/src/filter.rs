/// Case-insensitive substring test; an empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::contains_ci;

    #[test]
    fn matches_regardless_of_case() {
        assert!(contains_ci("surf_Utopia_v5", "UTOPIA"));
        assert!(contains_ci("Türkçe", "TÜRK"));
        assert!(!contains_ci("surf_mesa", "utopia"));
    }

    #[test]
    fn blank_needle_matches_everything() {
        assert!(contains_ci("surf_mesa", ""));
        assert!(contains_ci("", "   "));
    }
}
