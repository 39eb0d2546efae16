use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid seed '{0}': expected a decimal or 0x-prefixed hex integer")]
pub struct SeedParseError(pub String);

/// Split a comma-separated flag value, dropping blanks.
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_seed(token: &str) -> Result<u64, SeedParseError> {
    let parsed = token.strip_prefix("0x").map_or_else(
        || token.parse::<u64>(),
        |hex| u64::from_str_radix(&hex.replace('_', ""), 16),
    );
    parsed.map_err(|_| SeedParseError(token.to_string()))
}

pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>, SeedParseError> {
    tokens.iter().map(|t| parse_seed(t)).collect()
}
