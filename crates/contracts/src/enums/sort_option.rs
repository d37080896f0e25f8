use serde::{Deserialize, Serialize};

/// Вариант сортировки списка каталога
///
/// Сериализуется в те же токены, что использует форма фильтра:
/// `""`, `"score-asc"`, `"score-desc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "score-asc")]
    ScoreAsc,
    #[serde(rename = "score-desc")]
    ScoreDesc,
}

impl SortOption {
    /// Получить код варианта (значение option в select)
    pub fn code(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::ScoreAsc => "score-asc",
            SortOption::ScoreDesc => "score-desc",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::None => "No sorting",
            SortOption::ScoreAsc => "Score: low to high",
            SortOption::ScoreDesc => "Score: high to low",
        }
    }

    /// Получить все варианты
    pub fn all() -> Vec<SortOption> {
        vec![SortOption::None, SortOption::ScoreAsc, SortOption::ScoreDesc]
    }

    /// Парсинг из строки; нераспознанный код даёт `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => Some(SortOption::None),
            "score-asc" => Some(SortOption::ScoreAsc),
            "score-desc" => Some(SortOption::ScoreDesc),
            _ => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, SortOption::None)
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde_tokens() {
        for option in SortOption::all() {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.code()));
            assert_eq!(SortOption::from_code(option.code()), Some(option));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(SortOption::from_code("title-asc"), None);
        assert!(!SortOption::default().is_selected());
    }
}
