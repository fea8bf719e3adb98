//! Single normalization pipeline applied before every keyword or catalog
//! match, so accented and plain spellings classify identically.

/// Lowercases, trims, and folds Latin-1 diacritics to their base letter.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().chars().map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'â' | 'ã' | 'à' | 'ä' => 'a',
        'é' | 'ê' | 'è' | 'ë' => 'e',
        'í' | 'î' | 'ì' | 'ï' => 'i',
        'ó' | 'ô' | 'õ' | 'ò' | 'ö' => 'o',
        'ú' | 'û' | 'ù' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn folds_accented_vowels_and_cedilla() {
        assert_eq!(normalize("Eletrônicos"), "eletronicos");
        assert_eq!(normalize("  CALÇADOS  "), "calcados");
        assert_eq!(normalize("Olá, bom dia!"), "ola, bom dia!");
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(normalize("carrinho"), "carrinho");
    }
}
