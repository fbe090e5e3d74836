use super::domain::ResponseVector;

const AFFIRMATIVE: &[&str] = &["sí", "si", "s", "1", "true", "verdadero", "x"];
const NEGATIVE: &[&str] = &["no", "n", "0", "false", "falso", "", "nan"];

/// Maps one raw answer to 0 or 1.
///
/// Anything that is not a recognized "yes" resolves to 0, including
/// unrecognized tokens and numbers other than exactly 1. A missing or
/// ambiguous answer therefore never counts towards an area.
pub fn normalize_response(raw: &str) -> u8 {
    let token = raw.trim().to_lowercase();

    if AFFIRMATIVE.contains(&token.as_str()) {
        return 1;
    }
    if NEGATIVE.contains(&token.as_str()) {
        return 0;
    }

    match token.parse::<f64>() {
        Ok(value) if value == 1.0 => 1,
        _ => 0,
    }
}

pub fn normalize_responses<S: AsRef<str>>(raw: &[S]) -> ResponseVector {
    ResponseVector::from_bits(raw.iter().map(|value| normalize_response(value.as_ref())))
}
