/// UCI metadata for one engine parameter.
#[derive(Debug, Clone)]
pub struct UciOption {
    pub name: &'static str,
    pub option_type: UciOptionType,
}

#[derive(Debug, Clone)]
pub enum UciOptionType {
    Spin { min: i64, max: i64 },
}

impl UciOptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            UciOptionType::Spin { min, max } => {
                let parsed = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| format!("Invalid integer: {}", e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
        }
    }

    pub fn to_uci<T>(&self, name: &str, current_value: &T) -> String
    where
        T: ToString,
    {
        match self {
            UciOptionType::Spin { min, max } => format!(
                "option name {} type spin default {} min {} max {}",
                name,
                current_value.to_string(),
                min,
                max
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_bounds() {
        let spin = UciOptionType::Spin { min: 1, max: 12 };
        assert!(spin.validate("1").is_ok());
        assert!(spin.validate("12").is_ok());
        assert!(spin.validate("0").is_err());
        assert!(spin.validate("13").is_err());
        assert!(spin.validate("deep").is_err());
    }

    #[test]
    fn test_spin_to_uci() {
        let spin = UciOptionType::Spin { min: 1, max: 12 };
        assert_eq!(
            spin.to_uci("Search Depth", &4),
            "option name Search Depth type spin default 4 min 1 max 12"
        );
    }
}
