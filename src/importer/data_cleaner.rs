// ==========================================
// Data cleaner - stage 1: TRIM / UPPER / numeric normalization
// ==========================================
// Rules: keys are trimmed, empty keys drop the row; numeric columns lose
// thousands separators and quote characters, unparseable values become 0,
// negatives are clamped to 0.
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str, uppercase: bool) -> String {
        let trimmed = value.trim();
        if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        }
    }

    /// Trimmed key, or None when empty/missing (row is dropped upstream).
    pub fn normalize_key(&self, value: Option<&String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Clean a quantity or price cell: `"1,250.50"` -> 1250.5.
    ///
    /// Missing and unparseable values coerce to 0; negative values are
    /// clamped to 0 (canonical quantities are never negative).
    pub fn clean_numeric(&self, value: Option<&String>) -> f64 {
        let cleaned = match value {
            None => return 0.0,
            Some(v) => v.replace('"', "").replace(',', "").trim().to_string(),
        };

        let parsed = cleaned.parse::<f64>().unwrap_or(0.0);
        if parsed.is_finite() {
            parsed.max(0.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text("  rodamiento  ", false), "rodamiento");
        assert_eq!(cleaner.clean_text("  rodamiento  ", true), "RODAMIENTO");
    }

    #[test]
    fn test_normalize_key() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_key(Some(&"  ".to_string())), None);
        assert_eq!(cleaner.normalize_key(Some(&"".to_string())), None);
        assert_eq!(
            cleaner.normalize_key(Some(&" 01100342 ".to_string())),
            Some("01100342".to_string())
        );
        assert_eq!(cleaner.normalize_key(None), None);
    }

    #[test]
    fn test_clean_numeric_thousands_and_quotes() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_numeric(Some(&"\"1,250.50\"".to_string())), 1250.5);
        assert_eq!(cleaner.clean_numeric(Some(&" 20 ".to_string())), 20.0);
        assert_eq!(cleaner.clean_numeric(Some(&"3,000".to_string())), 3000.0);
    }

    #[test]
    fn test_clean_numeric_defaults_to_zero() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_numeric(None), 0.0);
        assert_eq!(cleaner.clean_numeric(Some(&"".to_string())), 0.0);
        assert_eq!(cleaner.clean_numeric(Some(&"N/A".to_string())), 0.0);
    }

    #[test]
    fn test_clean_numeric_clamps_negative() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_numeric(Some(&"-5".to_string())), 0.0);
    }
}
