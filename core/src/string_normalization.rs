use unidecode::unidecode;

/// Folds a product name into its lookup form: ASCII, lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
